//! Error types for block list operations with source context

use std::fmt;
use std::io;

/// Block list pipeline error with the URI or path it relates to
#[derive(Debug)]
pub enum BlockListError {
    /// HTTP fetch of a remote source failed (connect, timeout, status)
    Http { uri: String, error: reqwest::Error },
    /// Reading a source failed (missing file, I/O error mid-stream)
    Read { uri: String, error: io::Error },
    /// Writing the output file failed (permissions, disk full)
    Write { path: String, error: io::Error },
}

impl fmt::Display for BlockListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockListError::Http { uri, error } => {
                write!(f, "Failed to fetch {}: {}", uri, error)
            }
            BlockListError::Read { uri, error } => {
                write!(f, "Failed to read {}: {}", uri, error)
            }
            BlockListError::Write { path, error } => {
                write!(f, "Failed to write {}: {}", path, error)
            }
        }
    }
}

impl std::error::Error for BlockListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlockListError::Http { error, .. } => Some(error),
            BlockListError::Read { error, .. } => Some(error),
            BlockListError::Write { error, .. } => Some(error),
        }
    }
}

/// Result type alias for block list operations
pub type Result<T> = std::result::Result<T, BlockListError>;
