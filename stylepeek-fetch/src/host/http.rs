//! HTTP client with tracing and fixed browser-like headers.
//!
//! Public CORS proxies are picky about clients, so every request carries
//! the same `Accept` and desktop `User-Agent` headers.

use reqwest::{Client, header};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::FetchError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// `Accept` header sent with every request.
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Desktop browser user agent.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Response
// ============================================================================

/// A fully-read text response.
#[derive(Debug, Clone)]
pub struct TextResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded body.
    pub body: String,
}

impl TextResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper with tracing.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::ClientBuild(e.to_string()))?;

        Ok(Self {
            inner: client,
            timeout,
        })
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Performs a GET request and reads the body as text.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_text(&self, url: &str) -> Result<TextResponse, FetchError> {
        debug!("GET request");

        let response = self
            .inner
            .get(url)
            .header(header::ACCEPT, ACCEPT)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let status = response.status().as_u16();
        debug!(status, "Response received");

        let body = response.text().await?;
        debug!(len = body.len(), "Body read");
        Ok(TextResponse { status, body })
    }
}

// ============================================================================
// Tests
// ============================================================================
