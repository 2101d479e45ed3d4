//! Error types for the WARC writer.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for serialization operations.
#[derive(Debug, Error)]
pub enum WarcError {
    /// The destination stream rejected (or partially accepted) a write.
    #[error("Write error: {0}")]
    Write(std::io::Error),

    /// The content source failed before it was exhausted.
    #[error("Read error: {0}")]
    Read(std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown record format: {0}")]
    UnknownFormat(String),

    #[error("Archive is locked by another writer: {0}")]
    Locked(PathBuf),
}

impl WarcError {
    /// Returns the underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            WarcError::Write(e) | WarcError::Read(e) | WarcError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for WARC writer operations.
pub type Result<T> = std::result::Result<T, WarcError>;
