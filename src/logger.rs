//! Logging setup
//!
//! Installs a `fern` dispatch behind the `log` facade. Logging is opt-in
//! (see [`crate::config::LoggingConfig`]); when enabled, records go to
//! stderr and to a log file in the platform data directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Install the global logger. A no-op when `enabled` is false.
pub fn setup_logging(enabled: bool) -> Result<()> {
    if !enabled {
        return Ok(());
    }

    let log_path = get_log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let log_file = fern::log_file(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}",
                chrono::Utc::now().format("%H:%M:%S%.3f"),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr())
        .chain(log_file)
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}

/// Path of the log file in the platform data directory.
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("tzform").join("tzform.log"))
}
