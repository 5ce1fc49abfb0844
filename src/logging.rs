//! Subscriber setup for the binary.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

use crate::model::config::{AppConfig, LoggingConfig};

/// Install the global subscriber.
///
/// Logs go to a daily-rolling file when a log directory is configured,
/// stdout otherwise. Keep the returned guard alive until exit or buffered
/// file lines are lost.
pub fn init(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = select_filter(from_env.as_deref(), &config.logging)?;

    match config.log_directory() {
        Some(dir) => {
            let (writer, guard) = file_writer(&dir, &config.logging.file_name)?;
            tracing_subscriber::fmt()
                .with_writer(writer)
                .with_ansi(false)
                .with_env_filter(filter)
                .try_init()
                .map_err(|err| anyhow::anyhow!(err))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_target(false)
                .with_env_filter(filter)
                .try_init()
                .map_err(|err| anyhow::anyhow!(err))?;
            Ok(None)
        }
    }
}

/// `RUST_LOG` wins when set; a malformed value is an error, not a fallback.
fn select_filter(from_env: Option<&str>, config: &LoggingConfig) -> Result<EnvFilter> {
    match from_env {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {} {directives:?}", EnvFilter::DEFAULT_ENV)),
        None => config_filter(config),
    }
}

fn config_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter {:?}", config.filter))
}

fn file_writer(dir: &Path, file_name: &str) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
