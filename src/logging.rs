//! Tracing setup
//!
//! The terminal belongs to the UI, so log records go to a file through a
//! non-blocking writer. `RUST_LOG` takes precedence over the configured level.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::CONFIG_DIR;
use crate::error::{DisplayNameError, Result};

const LOG_FILE_NAME: &str = "display-name.log";

/// Default log location: `<data dir>/display-name/display-name.log`,
/// or the system temp dir when no home directory is known.
pub fn default_log_path() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.data_local_dir().join(CONFIG_DIR))
        .unwrap_or_else(|| std::env::temp_dir().join(CONFIG_DIR))
        .join(LOG_FILE_NAME)
}

/// Build the filter from `RUST_LOG`, falling back to `level`
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("display_name={}", level)))
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// or buffered records are lost.
pub fn initialize(level: &str, log_file: &Path) -> Result<WorkerGuard> {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let file_name = log_file
        .file_name()
        .ok_or_else(|| DisplayNameError::Logging(format!("Not a file path: {}", log_file.display())))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| DisplayNameError::Logging(e.to_string()))?;

    Ok(guard)
}
