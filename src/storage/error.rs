//! Error types for the storage layer.

use thiserror::Error;

/// Errors that can occur while writing to a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("Storage I/O error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The storage key cannot be used as a slot name.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}
