//! Error types for joe operations.
//!
//! This module defines [`JoeError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `JoeError` for the distinct failure kinds callers react to
//!   (network, archive, filesystem, missing cache)
//! - Use `anyhow::Error` (via `JoeError::Other`) for unexpected errors
//! - During `generate`, per-name failures are never errors; they are
//!   reported as unresolved names instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for joe operations.
#[derive(Debug, Error)]
pub enum JoeError {
    /// Fetching the remote archive failed (transport error or non-success status).
    #[error("Failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// The fetched payload could not be read as a zip archive.
    #[error("Invalid template archive: {message}")]
    Archive { message: String },

    /// The cache directory does not exist or cannot be read.
    #[error("Template cache not found at {path}. Run `joe update` first.")]
    CacheNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JoeError {
    /// Whether this error means the cache has never been populated.
    pub fn is_cache_missing(&self) -> bool {
        matches!(self, Self::CacheNotFound { .. })
    }
}

// Archives are read from memory, so every zip failure (including its
// wrapped IO errors, e.g. a truncated payload) is an archive problem.
impl From<zip::result::ZipError> for JoeError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive {
            message: err.to_string(),
        }
    }
}

/// Result type alias for joe operations.
pub type Result<T> = std::result::Result<T, JoeError>;
