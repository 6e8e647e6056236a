use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::{PipelineError, PipelineSettings, Stage};

/// Applies `unit` to every item on the blocking pool and returns the outputs
/// in input order.
///
/// Items are batched into chunks of `settings.chunk_size`; at most
/// `settings.workers` chunks run at once. Chunks complete in any order and
/// are reassembled by index. A panicking unit fails the whole stage.
pub async fn run_units<T, U, F>(
    stage: Stage,
    items: Vec<T>,
    settings: &PipelineSettings,
    unit: F,
) -> Result<Vec<U>, PipelineError>
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let unit = Arc::new(unit);
    let permits = Arc::new(Semaphore::new(settings.workers.max(1)));
    let chunk_size = settings.chunk_size.max(1);
    let mut tasks = JoinSet::new();
    let mut items = items.into_iter();
    let mut chunk_count = 0usize;

    loop {
        let chunk: Vec<T> = items.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        let permit = permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|err| PipelineError::Worker {
                stage,
                message: err.to_string(),
            })?;
        let unit = unit.clone();
        let index = chunk_count;
        tasks.spawn_blocking(move || {
            let _permit = permit;
            let outputs: Vec<U> = chunk.into_iter().map(|item| unit(item)).collect();
            (index, outputs)
        });
        chunk_count += 1;
    }

    let mut chunks: Vec<Option<Vec<U>>> = (0..chunk_count).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (index, outputs) = joined.map_err(|err| PipelineError::Worker {
            stage,
            message: err.to_string(),
        })?;
        chunks[index] = Some(outputs);
    }

    Ok(chunks.into_iter().flatten().flatten().collect())
}
