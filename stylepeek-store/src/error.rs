//! Store error types.

use stylepeek_core::CoreError;
use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A project with the same `createdAt` is already stored.
    #[error("Project already exists: {0}")]
    DuplicateProject(String),

    /// No project has the given `createdAt`.
    #[error("Project not found: {0}")]
    NotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Returns true if this is a transient error that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateProject(key) => CoreError::DuplicateProject(key),
            StoreError::Serialization(e) => CoreError::Serialization(e),
            other => CoreError::Other(other.to_string()),
        }
    }
}
