use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{AppError, Result};

/// One directory entry as shown in a tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl Entry {
    /// Build an entry from a filesystem path.
    ///
    /// Symlinks are followed to decide `is_dir`; a dangling link is described
    /// by the link itself.
    pub fn from_path(path: &Path) -> Result<Self> {
        let link_meta = fs::symlink_metadata(path).map_err(|e| AppError::from_io(e, path))?;
        let metadata = if link_meta.file_type().is_symlink() {
            fs::metadata(path).unwrap_or(link_meta)
        } else {
            link_meta
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Ok(Self {
            name,
            path: path.to_path_buf(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }
}

/// List the entries of `dir`, ordered by file name.
///
/// Entries whose metadata cannot be read are skipped.
pub fn list_dir(dir: &Path) -> Result<Vec<Entry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| AppError::from_io(e, dir))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        match Entry::from_path(&dir_entry.path()) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::debug!(path = %dir_entry.path().display(), error = %e, "skipping entry");
            }
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(dir = %dir.display(), count = entries.len(), "listed directory");
    Ok(entries)
}
