//! Error types for sheetfold-core

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while consolidating a workbook
#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not exist
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A path could not be read or written for permission reasons
    /// (file open in another program, read-only location)
    #[error("permission denied: {}", .path.display())]
    Permission {
        /// The path that was being accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The input is not a readable workbook (corrupt, wrong format,
    /// password-protected)
    #[error("unreadable workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The output workbook could not be built
    #[error("failed to build output workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Classify a codec error, routing IO kinds to their own variants
    pub(crate) fn from_codec(path: &Path, err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(e) => Self::from_io(path, e),
            other => Error::Workbook(other),
        }
    }

    /// Classify an IO error against the path it touched
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Error::Permission {
                path: path.to_path_buf(),
                source: err,
            },
            _ => Error::Io(err),
        }
    }
}
