use std::sync::Arc;

use pipeline_logging::{pipeline_debug, pipeline_info, pipeline_warn, set_run_id};
use wordfreq_core::{map_token, normalize, reduce_group, shuffle, WordFrequencies};

use crate::fetch::{NoopProgressSink, ProgressSink, TextFetcher};
use crate::parallel::run_units;
use crate::{EngineEvent, JobId, JobProgress, PipelineError, PipelineRun, RunOutcome, Stage};

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Upper bound on concurrently running map or reduce chunks.
    pub workers: usize,
    /// Number of tokens (map) or groups (reduce) handled per spawned task.
    pub chunk_size: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            chunk_size: 4096,
        }
    }
}

/// Sequences fetch -> normalize -> map -> shuffle -> reduce for one URL at a time.
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Arc<dyn TextFetcher>,
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn TextFetcher>, settings: PipelineSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Word counts for the document at `url`.
    ///
    /// A failed fetch yields an empty mapping; use [`Pipeline::run`] to tell
    /// that apart from a document without words.
    pub async fn process(&self, url: &str) -> Result<WordFrequencies, PipelineError> {
        let run = self.run(0, url, &NoopProgressSink).await?;
        Ok(run.frequencies)
    }

    pub async fn run(
        &self,
        job_id: JobId,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<PipelineRun, PipelineError> {
        emit_stage(sink, job_id, Stage::Downloading, None);
        let document = match self.fetcher.fetch(job_id, url, sink).await {
            Ok(document) => document,
            Err(err) => {
                set_run_id(job_id);
                pipeline_warn!("Skipping map/reduce for {}: {}", url, err);
                emit_stage(sink, job_id, Stage::Done, Some(0));
                return Ok(PipelineRun {
                    url: url.to_string(),
                    outcome: RunOutcome::AcquisitionFailed(err),
                    frequencies: WordFrequencies::new(),
                });
            }
        };

        let frequencies = self.count_text(job_id, &document.text, sink).await?;

        set_run_id(job_id);
        pipeline_info!(
            "MapReduce finished for {}: {} tokens, {} distinct words",
            url,
            frequencies.total(),
            frequencies.len()
        );
        emit_stage(sink, job_id, Stage::Done, Some(frequencies.total()));

        Ok(PipelineRun {
            url: url.to_string(),
            outcome: RunOutcome::Fetched(document.metadata),
            frequencies,
        })
    }

    /// Runs every stage after acquisition on already-fetched text.
    pub async fn process_text(&self, text: &str) -> Result<WordFrequencies, PipelineError> {
        self.count_text(0, text, &NoopProgressSink).await
    }

    async fn count_text(
        &self,
        job_id: JobId,
        text: &str,
        sink: &dyn ProgressSink,
    ) -> Result<WordFrequencies, PipelineError> {
        emit_stage(sink, job_id, Stage::Normalizing, None);
        let tokens = normalize(text).to_vec();
        let token_count = tokens.len() as u64;
        set_run_id(job_id);
        pipeline_debug!("Normalized {} tokens", token_count);

        emit_stage(sink, job_id, Stage::Mapping, Some(token_count));
        let contributions = run_units(Stage::Mapping, tokens, &self.settings, |token: String| {
            map_token(&token)
        })
        .await?;

        emit_stage(sink, job_id, Stage::Shuffling, Some(token_count));
        let groups = shuffle(contributions);
        set_run_id(job_id);
        pipeline_debug!("Shuffled into {} groups", groups.len());

        emit_stage(sink, job_id, Stage::Reducing, Some(token_count));
        let entries = run_units(Stage::Reducing, groups, &self.settings, reduce_group).await?;

        Ok(entries.into_iter().collect())
    }
}

fn emit_stage(sink: &dyn ProgressSink, job_id: JobId, stage: Stage, tokens: Option<u64>) {
    sink.emit(EngineEvent::Progress(JobProgress {
        job_id,
        stage,
        bytes: None,
        tokens,
    }));
}
