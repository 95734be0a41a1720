//! Fetch context providing access to host APIs.
//!
//! The context is passed to the proxy pipeline and bundles the HTTP client,
//! fetch settings and an optional cancellation token.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::FetchError;
use crate::host::http::{DEFAULT_TIMEOUT_SECS, HttpClient};
use crate::proxy::ProxyEndpoint;

/// Bodies must be longer than this many characters to count as a page.
pub const DEFAULT_MIN_BODY_CHARS: usize = 100;

// ============================================================================
// Fetch Settings
// ============================================================================

/// Settings for fetch operations.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Proxies, tried in order.
    pub proxies: Vec<ProxyEndpoint>,
    /// Time budget for each proxy attempt.
    pub timeout: Duration,
    /// Bodies with this many characters or fewer are rejected.
    pub min_body_chars: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            proxies: ProxyEndpoint::defaults(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            min_body_chars: DEFAULT_MIN_BODY_CHARS,
        }
    }
}

impl FetchSettings {
    /// Replaces the proxy list.
    pub fn with_proxies(mut self, proxies: Vec<ProxyEndpoint>) -> Self {
        self.proxies = proxies;
        self
    }

    /// Sets the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the minimum body length.
    pub fn with_min_body_chars(mut self, min: usize) -> Self {
        self.min_body_chars = min;
        self
    }
}

// ============================================================================
// Cancellation
// ============================================================================

/// Owner side of a cancellation flag.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Creates a new, not-yet-cancelled handle.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Returns a token observing this handle.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }

    /// Requests cancellation of every fetch holding a token.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of a cancellation flag.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Returns true once cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves when cancellation is requested.
    ///
    /// Never resolves if the handle is dropped without cancelling.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

// ============================================================================
// Fetch Context
// ============================================================================

/// Context provided to the proxy pipeline.
pub struct FetchContext {
    /// HTTP client with tracing.
    pub http: Arc<HttpClient>,
    /// Fetch settings.
    pub settings: FetchSettings,
    /// Cancellation token, if the caller wants to abort.
    pub cancel: Option<CancelToken>,
}

impl FetchContext {
    /// Creates a context with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_settings(FetchSettings::default())
    }

    /// Creates a context with custom settings.
    pub fn with_settings(settings: FetchSettings) -> Result<Self, FetchError> {
        Self::builder().settings(settings).build()
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }

    /// Returns the per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.settings.timeout
    }

    /// Returns true if the caller has cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext")
            .field("settings", &self.settings)
            .field("cancellable", &self.cancel.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`FetchContext`].
#[derive(Debug, Default)]
pub struct FetchContextBuilder {
    settings: Option<FetchSettings>,
    http: Option<Arc<HttpClient>>,
    cancel: Option<CancelToken>,
}

impl FetchContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fetch settings.
    pub fn settings(mut self, settings: FetchSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Uses an existing HTTP client instead of building one.
    pub fn http(mut self, http: Arc<HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// Attaches a cancellation token.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Builds the context.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build(self) -> Result<FetchContext, FetchError> {
        let settings = self.settings.unwrap_or_default();
        let http = match self.http {
            Some(http) => http,
            None => Arc::new(HttpClient::with_timeout(settings.timeout)?),
        };

        Ok(FetchContext {
            http,
            settings,
            cancel: self.cancel,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
