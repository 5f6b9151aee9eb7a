//! Error type for loading matrices and running operations

use std::io;
use std::path::PathBuf;

use spmat_core::{ErrorCategory, SpmatError};
use thiserror::Error;

/// Errors surfaced by the `spmat` library
#[derive(Debug, Error)]
pub enum Error {
    /// A matrix file could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A matrix file was read but its contents are malformed
    #[error("{}: {source}", .path.display())]
    Load { path: PathBuf, source: SpmatError },

    /// An operation on loaded matrices failed
    #[error(transparent)]
    Matrix(#[from] SpmatError),

    /// The requested operation name is not supported
    ///
    /// Replaces [`SpmatError::UnknownOperation`], adding the name as typed
    #[error("unknown operation \"{0}\", expected one of add, subtract, multiply")]
    UnknownOperation(String),

    /// A result could not be rendered as JSON
    #[cfg(feature = "serde")]
    #[error("failed to render result: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Category of the underlying matrix error, if there is one
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::Load { source, .. } => Some(source.category()),
            Error::Matrix(source) => Some(source.category()),
            Error::UnknownOperation(_) => Some(ErrorCategory::Operation),
            _ => None,
        }
    }
}

/// Result type for the `spmat` library
pub type Result<T> = std::result::Result<T, Error>;
