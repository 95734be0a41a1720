//! Extraction error types.

use stylepeek_core::ExtractError;
use thiserror::Error;

/// Errors raised while querying a parsed document.
///
/// Resolvers catch these and fall back to their defaults; only title
/// derivation lets one escape, wrapped as [`ExtractError::Extraction`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A CSS selector could not be parsed.
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector {
        /// The selector text.
        selector: String,
        /// Parser message.
        reason: String,
    },
}

impl From<DocumentError> for ExtractError {
    fn from(err: DocumentError) -> Self {
        ExtractError::Extraction(err.to_string())
    }
}
