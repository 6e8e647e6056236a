use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use crate::fetch::{ChannelProgressSink, FetchSettings, ReqwestFetcher};
use crate::pipeline::{Pipeline, PipelineSettings};
use crate::{EngineEvent, JobId, JobProgress, Stage};

enum EngineCommand {
    Enqueue { job_id: JobId, url: String },
}

/// Runs pipelines on a background tokio runtime and reports back over a channel.
///
/// Jobs run concurrently. The runtime shuts down once the handle is dropped.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(fetch: FetchSettings, settings: PipelineSettings) -> io::Result<Self> {
        let pipeline = Pipeline::new(Arc::new(ReqwestFetcher::new(fetch)), settings);
        Self::with_pipeline(pipeline)
    }

    pub fn with_pipeline(pipeline: Pipeline) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("wordfreq-engine")
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let pipeline = pipeline.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&pipeline, command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, job_id: JobId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Enqueue {
            job_id,
            url: url.into(),
        });
    }

    /// Blocks until the next event; `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    pipeline: &Pipeline,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Enqueue { job_id, url } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let _ = event_tx.send(EngineEvent::Progress(JobProgress {
                job_id,
                stage: Stage::Queued,
                bytes: None,
                tokens: None,
            }));
            let result = pipeline.run(job_id, &url, &sink).await;
            let _ = event_tx.send(EngineEvent::JobCompleted { job_id, result });
        }
    }
}
