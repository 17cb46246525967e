//! Hands files to the host's default application.

use std::path::Path;

use crate::error::Result;

/// Launch the system default handler for `path` without waiting for it.
pub fn open_path(path: &Path) -> Result<()> {
    open::that_detached(path)?;
    Ok(())
}

/// Best-effort open: failures are logged and otherwise ignored.
pub fn open_in_background(path: &Path) {
    match open_path(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "opened with system handler"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to open file"),
    }
}
