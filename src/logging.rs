//! Tracing setup: a console layer on stdout and an append-only file layer at
//! `<log_dir>/app.log`, each with its own level filter.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

pub const LOG_FILE_NAME: &str = "app.log";

pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

fn open_log_file(log_dir: &Path) -> std::io::Result<File> {
    std::fs::create_dir_all(log_dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path(log_dir))
}

/// Install the global subscriber. If the log file cannot be opened, logging
/// continues on the console only.
pub fn init(config: &LoggingConfig, log_dir: &Path) {
    let console_filter =
        EnvFilter::try_new(&config.console_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stdout)
        .with_filter(console_filter);

    let (file_layer, file_error) = match open_log_file(log_dir) {
        Ok(file) => {
            let file_filter =
                EnvFilter::try_new(&config.file_level).unwrap_or_else(|_| EnvFilter::new("debug"));
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(file_filter);
            (Some(layer), None)
        }
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!(
            error = %e,
            dir = %log_dir.display(),
            "could not open log file, logging to console only"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn log_file_is_created_in_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("logs");
        open_log_file(&dir).unwrap();
        assert!(log_file_path(&dir).exists());
    }
}
