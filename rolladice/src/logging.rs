//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it logs to a daily file. Headless mode
//! logs to stderr and keeps stdout for the protocol.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "rolladice.log";

/// Keeps the background log writer alive until dropped.
pub struct LoggingGuards {
    _file_guard: Option<WorkerGuard>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to `<log_dir>/rolladice.log.<date>`.
///
/// Returns the reason when file logging could not be set up; the caller
/// decides where to report it since the terminal is not ours yet.
pub fn init_file_logging(log_dir: &Path) -> (LoggingGuards, Option<String>) {
    if let Err(err) = std::fs::create_dir_all(log_dir) {
        let message = format!("File logging disabled ({}): {}", log_dir.display(), err);
        return (LoggingGuards { _file_guard: None }, Some(message));
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .with_ansi(false)
                .compact()
                .with_writer(file_writer),
        )
        .try_init()
        .ok();

    (
        LoggingGuards {
            _file_guard: Some(guard),
        },
        None,
    )
}

/// Log to stderr.
pub fn init_stderr_logging() -> LoggingGuards {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();

    LoggingGuards { _file_guard: None }
}
