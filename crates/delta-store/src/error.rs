//! Store error types.

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium could not be read or written.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stored collection could not be parsed.
    #[error("Corrupted data under key '{key}': {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored collection was written by a newer schema than this build
    /// understands.
    #[error("Key '{key}' has schema version {found}, this build supports up to {supported}")]
    UnsupportedSchemaVersion {
        key: String,
        found: u32,
        supported: u32,
    },

    /// Cross-cutting domain error.
    #[error(transparent)]
    Core(#[from] delta_core::errors::CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
