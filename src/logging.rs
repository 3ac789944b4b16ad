//! Run logging: console plus a per-day file in the configured log directory.
//!
//! Initialised once per process, before the first document is touched. The
//! returned guard flushes the file writer when dropped at the end of the run.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Could not create log directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging was already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Keeps the file writer alive; dropping it flushes pending lines.
pub struct LogGuard {
    _file: WorkerGuard,
}

/// `archivar_YYYY-MM-DD.log`
pub fn log_file_name(date: NaiveDate) -> String {
    format!("{}_{}.log", config::APP_NAME, date.format("%Y-%m-%d"))
}

/// Install the global subscriber writing to stdout and `log_dir`.
pub fn init_logging(log_dir: &Path) -> Result<LogGuard, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.display().to_string(),
        source,
    })?;

    let file_name = log_file_name(chrono::Local::now().date_naive());
    let appender = tracing_appender::rolling::never(log_dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialised(e.to_string()))?;

    Ok(LogGuard { _file: guard })
}
