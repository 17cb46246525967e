use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from filesystem or terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Terminal initialization or event channel errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Invalid path provided by the user.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Directory (or path) does not exist.
    #[error("No such directory: {}", path.display())]
    NotFound { path: PathBuf },

    /// Directory exists but cannot be read.
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl AppError {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AppError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => AppError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => AppError::Io(err),
        }
    }
}
