//! Error types for the trip organizer library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all organizer operations.
#[derive(Error, Debug)]
pub enum TripError {
    /// The storage engine could not be opened at all (missing permissions,
    /// unusable path, disabled SQLite). Callers treat this as "no existing
    /// document" and fall back to seed content.
    #[error("Storage unavailable at '{path}': {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    /// A read or write against an already-open store failed.
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors (including blocking-task join failures)
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TripError {
    /// Creates a storage error with a context message.
    pub fn storage(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Storage {
            message: message.into(),
            source,
        }
    }

    /// Whether this error means the storage engine never opened.
    ///
    /// The first-run policy hinges on this distinction: an unavailable store
    /// degrades to seed content, while a failure on an open store does not.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }
}

/// Extension trait for mapping `rusqlite` results with a context message.
pub trait StorageResultExt<T> {
    /// Map storage errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripError::storage(message, e))
    }
}

/// Result type alias for organizer operations
pub type Result<T> = std::result::Result<T, TripError>;
