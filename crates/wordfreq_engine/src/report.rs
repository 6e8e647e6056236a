use std::path::{Path, PathBuf};

use serde::Serialize;
use wordfreq_core::WordFrequencies;

use crate::filename::report_filename;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::{PipelineRun, RunOutcome};

#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub url: &'a str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub generated_utc: &'a str,
    pub total_tokens: u64,
    pub distinct_words: usize,
    pub frequencies: &'a WordFrequencies,
}

impl<'a> RunReport<'a> {
    pub fn new(run: &'a PipelineRun, generated_utc: &'a str) -> Self {
        let (status, final_url, error) = match &run.outcome {
            RunOutcome::Fetched(metadata) => ("fetched", Some(metadata.final_url.as_str()), None),
            RunOutcome::AcquisitionFailed(err) => ("acquisition_failed", None, Some(err.to_string())),
        };
        Self {
            url: &run.url,
            status,
            final_url,
            error,
            generated_utc,
            total_tokens: run.frequencies.total(),
            distinct_words: run.frequencies.len(),
            frequencies: &run.frequencies,
        }
    }
}

/// True when `destination` names a report file (`.json`, any case) rather
/// than a directory.
pub fn is_report_file(destination: &Path) -> bool {
    destination
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Writes the JSON report for `run`.
///
/// A destination ending in `.json` is the report file itself; anything else
/// is a directory and the file name is derived from the URL.
pub fn write_report(
    run: &PipelineRun,
    destination: &Path,
    generated_utc: &str,
) -> Result<PathBuf, PersistError> {
    let content = serde_json::to_string_pretty(&RunReport::new(run, generated_utc))?;

    if is_report_file(destination) {
        let dir = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let filename = destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| report_filename(&run.url));
        AtomicFileWriter::new(dir).write(&filename, &content)
    } else {
        AtomicFileWriter::new(destination.to_path_buf()).write(&report_filename(&run.url), &content)
    }
}
