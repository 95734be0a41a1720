//! Fetch error types.

use stylepeek_core::ExtractError;
use thiserror::Error;

/// Error type for proxy fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failed (DNS, connect, TLS, body read).
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The attempt exceeded its time budget.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The proxy answered with a non-success status.
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// The body was too short to be a real page.
    #[error("Response body too short ({len} chars, need more than {min})")]
    BodyTooShort {
        /// Characters received.
        len: usize,
        /// Threshold that must be exceeded.
        min: usize,
    },

    /// A proxy template could not produce a valid request URL.
    #[error("Invalid proxy URL: {0}")]
    InvalidProxy(String),

    /// No proxies are configured.
    #[error("No proxies configured")]
    NoProxies,

    /// The caller cancelled the fetch.
    #[error("Fetch cancelled")]
    Cancelled,

    /// Every proxy failed.
    #[error("all {attempts} proxies failed (last error: {last_error})")]
    AllProxiesFailed {
        /// Number of proxies tried.
        attempts: usize,
        /// Message of the most recent failure.
        last_error: String,
    },

    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
}

impl From<FetchError> for ExtractError {
    fn from(err: FetchError) -> Self {
        ExtractError::Fetch(err.to_string())
    }
}
