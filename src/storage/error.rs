//! Storage-specific error types.

use std::path::PathBuf;

/// Errors that can occur while persisting key-value pairs.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read the storage file
    #[error("Failed to load storage from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the storage file
    #[error("Failed to save storage to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Storage file content could not be parsed
    #[error("Failed to deserialize storage: {0}")]
    DeserializationFailed(String),

    /// Storage content could not be serialized
    #[error("Failed to serialize storage: {0}")]
    SerializationFailed(String),
}
