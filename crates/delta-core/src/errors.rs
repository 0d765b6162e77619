//! Cross-cutting error types.
//!
//! Domain-specific errors (e.g. `StoreError`) live in their own crates; a
//! unified error is deferred to `delta-cli` where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any delta crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Login rejected or an operation required a session that does not exist.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Convenience constructor for [`CoreError::NotFound`].
    #[must_use]
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
