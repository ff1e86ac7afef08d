//! File logging for the terminal application.
//!
//! The TUI owns stdout, so log records go to a file. When logging is disabled
//! no logger is installed and the `log` macros compile down to no-ops.

use crate::config::LoggingConfig;
use crate::constants::LOG_FILE_NAME;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Install the global logger according to `config`.
///
/// Returns the log file path when logging was enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    init_with_path(config.level_filter()?, &path)?;
    Ok(Some(path))
}

/// Install a `fern` dispatch writing to `path` at `level` and above.
pub fn init_with_path(level: log::LevelFilter, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file)
        .apply()
        .context("A global logger is already installed")?;

    log::info!("Logging to {}", path.display());
    Ok(())
}

/// Log file location inside the user cache directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .or_else(dirs::data_local_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join("tablekit").join(LOG_FILE_NAME))
}
