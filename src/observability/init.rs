//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths::{expand_tilde, get_data_dir};
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
const LOG_FILE_NAME: &str = "listadapter.log";

/// Installs a global subscriber writing formatted events to a rotating file.
///
/// The level comes from `RUST_LOG` when set, then `config.trace_level`, then
/// `"info"`. The file is `config.log_file`, or `listadapter.log` in the data
/// directory.
///
/// Logging is optional: if the log directory cannot be created this returns
/// without installing anything, and repeated calls are no-ops.
///
/// # Example
///
/// ```rust
/// use listadapter::observability::init_tracing;
/// use listadapter::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     log_file: Some(dir.path().join("adapter.log").display().to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let log_file = log_file_path(config);
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file));

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

/// Resolves where log output goes for `config`.
#[must_use]
pub fn log_file_path(config: &Config) -> PathBuf {
    config.log_file.as_deref().map_or_else(
        || get_data_dir().join(LOG_FILE_NAME),
        |path| PathBuf::from(expand_tilde(path)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_log_file_wins() {
        let config = Config {
            log_file: Some("/var/log/rows.log".to_string()),
            ..Config::default()
        };
        assert_eq!(log_file_path(&config), PathBuf::from("/var/log/rows.log"));
    }

    #[test]
    fn default_log_file_lives_in_data_dir() {
        let path = log_file_path(&Config::default());
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
        assert!(path.ends_with(format!("listadapter/{LOG_FILE_NAME}")) || path.starts_with(".listadapter"));
    }
}
