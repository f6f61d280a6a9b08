//! Log setup
//!
//! The picker owns the terminal, so log lines go to a file. `RUST_LOG` takes
//! precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber writing to `log_file`
///
/// # Errors
///
/// Returns `PickerError::Logging` if the file cannot be opened, the level is
/// not a valid filter, or a subscriber is already installed.
pub fn init(log_file: &Path, level: &str) -> crate::Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| crate::PickerError::Logging(format!("invalid log level '{level}': {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| crate::PickerError::Logging(e.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}
