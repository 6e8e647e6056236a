use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wordfreq_core::DEFAULT_TOP_N;
use wordfreq_engine::{FetchSettings, PipelineSettings};

use crate::cli::Cli;

const DEFAULT_CONFIG_FILENAME: &str = "wordfreq.ron";
const DEFAULT_LOG_FILENAME: &str = "wordfreq.log";

/// Values read from the optional RON configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub top_n: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub max_bytes: Option<u64>,
    pub workers: Option<usize>,
    pub log_file: Option<PathBuf>,
}

/// A loaded file config plus problems worth logging once a logger exists.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub file: FileConfig,
    pub warnings: Vec<String>,
}

/// Reads `explicit`, or `./wordfreq.ron` when no path was given.
///
/// A missing default file is silent; every other problem becomes a warning
/// and defaults are used.
pub fn load(explicit: Option<&Path>) -> LoadedConfig {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILENAME), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            return LoadedConfig::default();
        }
        Err(err) => {
            return LoadedConfig {
                file: FileConfig::default(),
                warnings: vec![format!("Failed to read config from {:?}: {}", path, err)],
            };
        }
    };

    match ron::from_str::<FileConfig>(&content) {
        Ok(file) => LoadedConfig {
            file,
            warnings: Vec::new(),
        },
        Err(err) => LoadedConfig {
            file: FileConfig::default(),
            warnings: vec![format!("Failed to parse config from {:?}: {}", path, err)],
        },
    }
}

/// Effective settings: CLI flags over file values over defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub top_n: usize,
    pub fetch: FetchSettings,
    pub pipeline: PipelineSettings,
    pub log_file: PathBuf,
}

impl RunConfig {
    pub fn resolve(cli: &Cli, file: &FileConfig) -> Self {
        let mut fetch = FetchSettings::default();
        if let Some(secs) = cli.timeout.or(file.request_timeout_secs) {
            fetch.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.connect_timeout_secs {
            fetch.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(max_bytes) = file.max_bytes {
            fetch.max_bytes = max_bytes;
        }

        let mut pipeline = PipelineSettings::default();
        if let Some(workers) = cli.workers.or(file.workers).filter(|w| *w > 0) {
            pipeline.workers = workers;
        }

        Self {
            top_n: cli.top.or(file.top_n).unwrap_or(DEFAULT_TOP_N),
            fetch,
            pipeline,
            log_file: cli
                .log_file
                .clone()
                .or_else(|| file.log_file.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILENAME)),
        }
    }
}
