//! Core error types for Stylepeek.

use thiserror::Error;

/// Caller-facing error for a style extraction.
///
/// The display strings contain stable substrings (`Invalid URL format`,
/// `Failed to fetch`, `Failed to extract styles`) that presentation layers
/// key their friendly messages off.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input was empty or could not be parsed as a URL after scheme inference.
    #[error("Invalid URL format: {reason}")]
    InvalidUrl {
        /// The raw input as supplied by the caller.
        input: String,
        /// Why validation rejected it.
        reason: String,
    },

    /// Every proxy attempt failed or returned insufficient content.
    #[error("Failed to fetch website content: {0}")]
    Fetch(String),

    /// Unexpected failure while parsing or resolving styles.
    #[error("Failed to extract styles: {0}")]
    Extraction(String),
}

impl ExtractError {
    /// Creates an invalid URL error.
    pub fn invalid_url(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if retrying the same request might succeed.
    ///
    /// Only fetch failures are transient; bad input must be corrected first.
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

/// Error type for core data operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A project with the same `createdAt` key already exists.
    #[error("Duplicate project: {0}")]
    DuplicateProject(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_stable_substrings() {
        let err = ExtractError::invalid_url("", "input is empty");
        assert!(err.to_string().contains("Invalid URL format"));

        let err = ExtractError::Fetch("all 3 proxies failed".into());
        assert!(err.to_string().contains("Failed to fetch"));

        let err = ExtractError::Extraction("boom".into());
        assert_eq!(err.to_string(), "Failed to extract styles: boom");
    }

    #[test]
    fn test_only_fetch_is_retriable() {
        assert!(ExtractError::Fetch("x".into()).is_retriable());
        assert!(!ExtractError::invalid_url("x", "y").is_retriable());
        assert!(!ExtractError::Extraction("x".into()).is_retriable());
    }
}
