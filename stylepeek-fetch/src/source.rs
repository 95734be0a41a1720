//! HTML sources.
//!
//! Extraction only needs "give me the HTML for this URL". The trait keeps
//! the network out of the extraction crate so it can be tested against
//! canned documents.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::pipeline::{FetchOutcome, ProxyPipeline};

/// Something that can produce the raw HTML of a page.
#[async_trait]
pub trait HtmlSource: Send + Sync {
    /// Fetches the HTML for an absolute URL.
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// [`HtmlSource`] backed by the CORS proxy pipeline.
#[derive(Debug)]
pub struct ProxyFetcher {
    ctx: FetchContext,
    pipeline: ProxyPipeline,
}

impl ProxyFetcher {
    /// Creates a fetcher using the context's proxies.
    pub fn new(ctx: FetchContext) -> Self {
        let pipeline = ProxyPipeline::from_context(&ctx);
        Self { ctx, pipeline }
    }

    /// Creates a fetcher with the default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Ok(Self::new(FetchContext::new()?))
    }

    /// Returns the fetch context.
    pub fn context(&self) -> &FetchContext {
        &self.ctx
    }

    /// Runs the pipeline and returns the full outcome, attempts included.
    #[instrument(skip(self))]
    pub async fn fetch_outcome(&self, url: &str) -> FetchOutcome {
        let outcome = self.pipeline.execute(&self.ctx, url).await;
        debug!(
            attempts = outcome.attempts_count(),
            success = outcome.is_success(),
            "Fetch finished"
        );
        outcome
    }
}

#[async_trait]
impl HtmlSource for ProxyFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        self.fetch_outcome(url).await.into_html()
    }
}
