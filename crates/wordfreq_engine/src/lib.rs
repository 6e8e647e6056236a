//! Word frequency engine: acquisition, parallel pipeline execution and reports.
mod decode;
mod engine;
mod fetch;
mod filename;
mod parallel;
mod persist;
mod pipeline;
mod report;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::EngineHandle;
pub use fetch::{
    ChannelProgressSink, FetchSettings, NoopProgressSink, ProgressSink, ReqwestFetcher,
    TextFetcher,
};
pub use filename::report_filename;
pub use parallel::run_units;
pub use persist::{AtomicFileWriter, PersistError};
pub use pipeline::{Pipeline, PipelineSettings};
pub use report::{is_report_file, write_report, RunReport};
pub use types::{
    Document, EngineEvent, FailureKind, FetchError, FetchMetadata, JobId, JobProgress,
    PipelineError, PipelineRun, RunOutcome, Stage,
};
