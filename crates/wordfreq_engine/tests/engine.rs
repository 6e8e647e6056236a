use std::collections::HashMap;
use std::sync::Arc;

use wordfreq_engine::{
    Document, EngineEvent, EngineHandle, FailureKind, FetchError, FetchMetadata, JobId, Pipeline,
    PipelineSettings, ProgressSink, Stage, TextFetcher,
};

/// Serves fixed bodies keyed by URL; unknown URLs fail with 404.
struct MapFetcher {
    bodies: HashMap<String, String>,
}

#[async_trait::async_trait]
impl TextFetcher for MapFetcher {
    async fn fetch(
        &self,
        _job_id: JobId,
        url: &str,
        _sink: &dyn ProgressSink,
    ) -> Result<Document, FetchError> {
        let text = self.bodies.get(url).cloned().ok_or(FetchError {
            kind: FailureKind::HttpStatus(404),
            message: "not found".into(),
        })?;
        Ok(Document {
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url: url.to_string(),
                redirect_count: 0,
                content_type: None,
                encoding_label: "UTF-8".into(),
                byte_len: text.len() as u64,
            },
            text,
        })
    }
}

fn engine() -> EngineHandle {
    let bodies = HashMap::from([
        ("mem://a".to_string(), "one two two".to_string()),
        ("mem://b".to_string(), "Three, three; THREE.".to_string()),
    ]);
    let pipeline = Pipeline::new(Arc::new(MapFetcher { bodies }), PipelineSettings::default());
    EngineHandle::with_pipeline(pipeline).expect("engine runtime")
}

#[test]
fn engine_completes_every_enqueued_job() {
    let engine = engine();
    engine.enqueue(1, "mem://a");
    engine.enqueue(2, "mem://b");
    engine.enqueue(3, "mem://missing");

    let mut results = HashMap::new();
    let mut stages: HashMap<JobId, Vec<Stage>> = HashMap::new();
    while results.len() < 3 {
        match engine.recv().expect("engine alive") {
            EngineEvent::Progress(progress) => {
                stages.entry(progress.job_id).or_default().push(progress.stage)
            }
            EngineEvent::JobCompleted { job_id, result } => {
                results.insert(job_id, result.expect("pipeline ok"));
            }
        }
    }

    assert_eq!(results[&1].frequencies.get("two"), Some(2));
    assert_eq!(results[&1].frequencies.get("one"), Some(1));
    assert_eq!(results[&2].frequencies.get("three"), Some(3));
    assert_eq!(results[&2].frequencies.len(), 1);
    assert!(results[&3].is_acquisition_failure());
    assert!(results[&3].frequencies.is_empty());

    for job_id in [1, 2, 3] {
        let job_stages = &stages[&job_id];
        assert_eq!(job_stages.first(), Some(&Stage::Queued));
        assert_eq!(job_stages.last(), Some(&Stage::Done));
    }
    assert!(!stages[&3].contains(&Stage::Mapping));
}

#[test]
fn try_recv_is_empty_without_jobs() {
    let engine = engine();
    assert!(engine.try_recv().is_none());
}
