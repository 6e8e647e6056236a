#![deny(missing_docs)]
//! Shared logging utilities for the word frequency workspace.
//!
//! This crate provides the `pipeline_*` logging macros used across the
//! codebase, a per-thread run id that prefixes pipeline log lines, and a
//! minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the id of the pipeline run being executed.
    static RUN_ID: Cell<u64> = const { Cell::new(0) };
}

/// Sets the pipeline run id for the current thread.
/// The orchestrator calls this before logging on behalf of a run.
pub fn set_run_id(run_id: u64) {
    RUN_ID.with(|v| v.set(run_id));
}

/// Retrieves the pipeline run id for the current thread.
/// Returns 0 if no run id has been set.
pub fn current_run_id() -> u64 {
    RUN_ID.with(|v| v.get())
}

/// Logs a trace-level message prefixed with the current run id.
#[macro_export]
macro_rules! pipeline_trace {
    ($($arg:tt)*) => {{
        log::trace!("[run {}] {}", $crate::current_run_id(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message prefixed with the current run id.
#[macro_export]
macro_rules! pipeline_debug {
    ($($arg:tt)*) => {{
        log::debug!("[run {}] {}", $crate::current_run_id(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message prefixed with the current run id.
#[macro_export]
macro_rules! pipeline_info {
    ($($arg:tt)*) => {{
        log::info!("[run {}] {}", $crate::current_run_id(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message prefixed with the current run id.
#[macro_export]
macro_rules! pipeline_warn {
    ($($arg:tt)*) => {{
        log::warn!("[run {}] {}", $crate::current_run_id(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message prefixed with the current run id.
#[macro_export]
macro_rules! pipeline_error {
    ($($arg:tt)*) => {{
        log::error!("[run {}] {}", $crate::current_run_id(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_id_is_thread_local() {
        set_run_id(42);
        assert_eq!(current_run_id(), 42);
        let other = std::thread::spawn(current_run_id).join().unwrap();
        assert_eq!(other, 0);
    }

    #[test]
    fn macros_expand_with_and_without_args() {
        initialize_for_tests();
        pipeline_info!("plain message");
        pipeline_debug!("value={}", 3);
        pipeline_warn!("{} and {}", "a", "b");
    }
}
