//! File logging for the tpkit binaries.

use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::config::APP_DIR;

/// Directory holding the per-binary log files
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("logs")
}

/// Route `log` output to `<data dir>/tpkit/logs/<app>.log`
///
/// `RUST_LOG` wins over `level` when set. Returns the log file path.
pub fn setup_logging(app: &str, level: Option<&str>) -> Result<PathBuf> {
    let log_dir = log_dir();
    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!("{}.log", app));

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let env = env_logger::Env::default().default_filter_or(level.unwrap_or("info"));
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(log_file)
}
