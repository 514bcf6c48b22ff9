use crate::domain::ConfigError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to `log_file`, since the terminal is owned by the UI.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Keep the
/// returned guard alive until exit so buffered lines get flushed.
pub fn init_logging(log_file: &Path) -> Result<WorkerGuard, ConfigError> {
    let directory = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_file.file_name().ok_or_else(|| ConfigError::Invalid {
        key: "log_file".to_string(),
        message: format!("'{}' has no file name", log_file.display()),
    })?;

    std::fs::create_dir_all(directory)?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| ConfigError::Invalid {
            key: "log_file".to_string(),
            message: e.to_string(),
        })?;

    Ok(guard)
}
