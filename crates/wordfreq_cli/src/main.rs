mod cli;
mod config;
mod logging;
mod present;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::Parser;
use pipeline_logging::{pipeline_debug, pipeline_info, pipeline_warn};
use wordfreq_engine::{is_report_file, write_report, EngineEvent, EngineHandle, JobId, PipelineRun};

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::logging::LogDestination;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = config::load(cli.config.as_deref());
    let config = RunConfig::resolve(&cli, &loaded.file);

    logging::initialize(if cli.log_to_terminal {
        LogDestination::Both(&config.log_file)
    } else {
        LogDestination::File(&config.log_file)
    });
    for warning in &loaded.warnings {
        pipeline_warn!("{}", warning);
    }

    check_output(&cli.urls, cli.output.as_deref())?;

    let runs = run_all(&cli.urls, &config)?;

    let generated_utc = Utc::now().to_rfc3339();
    for run in runs.values() {
        print!("{}", present::render_top(run, config.top_n));
        if cli.full {
            println!("{}", serde_json::to_string_pretty(&run.frequencies)?);
        }
        if let Some(output) = &cli.output {
            let path = write_report(run, output, &generated_utc)
                .with_context(|| format!("failed to write report for {}", run.url))?;
            pipeline_info!("Wrote report for {} to {:?}", run.url, path);
        }
    }

    Ok(())
}

/// Several runs would overwrite each other in a single report file.
fn check_output(urls: &[String], output: Option<&Path>) -> anyhow::Result<()> {
    if urls.len() > 1 && output.is_some_and(is_report_file) {
        bail!("--output must be a directory when several URLs are given");
    }
    Ok(())
}

/// Enqueues every URL and waits for all runs, keyed by job id in input order.
fn run_all(urls: &[String], config: &RunConfig) -> anyhow::Result<BTreeMap<JobId, PipelineRun>> {
    let engine = EngineHandle::new(config.fetch.clone(), config.pipeline.clone())
        .context("failed to start engine runtime")?;

    for (index, url) in urls.iter().enumerate() {
        let job_id = index as JobId + 1;
        pipeline_info!("Enqueue job_id={} url={}", job_id, url);
        engine.enqueue(job_id, url.clone());
    }

    let mut runs = BTreeMap::new();
    while runs.len() < urls.len() {
        match engine.recv() {
            Some(EngineEvent::Progress(progress)) => {
                pipeline_debug!(
                    "Job {} stage={:?} bytes={:?} tokens={:?}",
                    progress.job_id,
                    progress.stage,
                    progress.bytes,
                    progress.tokens
                );
            }
            Some(EngineEvent::JobCompleted { job_id, result }) => {
                let run = result.with_context(|| format!("pipeline failed for job {job_id}"))?;
                runs.insert(job_id, run);
            }
            None => bail!("engine stopped before all jobs completed"),
        }
    }
    Ok(runs)
}
