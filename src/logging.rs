use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::{AppError, Result};

/// Send `tracing` output to `path`. The terminal belongs to the UI, so
/// without a log file nothing is recorded.
pub fn init(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;
    tracing::info!(log_file = %path.display(), "logging started");
    Ok(())
}
