//! Proxy pipeline for fetching HTML.
//!
//! The pipeline tries each configured proxy in order, sequentially, and
//! accepts the first response that is HTTP-OK with a body longer than the
//! minimum. A proxy is never retried; any failure moves on to the next one.

use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::proxy::ProxyEndpoint;

// ============================================================================
// Fetch Attempt
// ============================================================================

/// Record of a single proxy attempt.
#[derive(Debug, Clone)]
pub struct FetchAttempt {
    /// Name of the proxy that was tried.
    pub proxy: String,
    /// Whether the attempt succeeded.
    pub success: bool,
    /// Error if the attempt failed.
    pub error: Option<String>,
    /// How long the attempt took.
    pub duration: Duration,
}

impl FetchAttempt {
    /// Creates a successful attempt record.
    pub fn success(proxy: impl Into<String>, duration: Duration) -> Self {
        Self {
            proxy: proxy.into(),
            success: true,
            error: None,
            duration,
        }
    }

    /// Creates a failed attempt record.
    pub fn failure(proxy: impl Into<String>, error: impl Into<String>, duration: Duration) -> Self {
        Self {
            proxy: proxy.into(),
            success: false,
            error: Some(error.into()),
            duration,
        }
    }
}

// ============================================================================
// Fetch Outcome
// ============================================================================

/// Page content returned by a successful proxy.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Raw HTML body.
    pub html: String,
    /// Name of the proxy that served it.
    pub proxy: String,
}

/// The outcome of a pipeline execution.
#[derive(Debug)]
pub struct FetchOutcome {
    /// The page, or the final error.
    pub result: Result<FetchedPage, FetchError>,
    /// All attempts made.
    pub attempts: Vec<FetchAttempt>,
    /// Total duration of all attempts.
    pub duration: Duration,
}

impl FetchOutcome {
    /// Returns true if some proxy succeeded.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns the number of proxies that were tried.
    pub fn attempts_count(&self) -> usize {
        self.attempts.len()
    }

    /// Returns the proxy that succeeded, if any.
    pub fn successful_proxy(&self) -> Option<&str> {
        self.result.as_ref().ok().map(|p| p.proxy.as_str())
    }

    /// Returns all errors that occurred.
    pub fn errors(&self) -> Vec<&str> {
        self.attempts
            .iter()
            .filter_map(|a| a.error.as_deref())
            .collect()
    }

    /// Unwraps into the HTML body or the final error.
    pub fn into_html(self) -> Result<String, FetchError> {
        self.result.map(|page| page.html)
    }
}

// ============================================================================
// Proxy Pipeline
// ============================================================================

/// An ordered list of proxies tried one after another.
#[derive(Debug, Clone, Default)]
pub struct ProxyPipeline {
    proxies: Vec<ProxyEndpoint>,
}

impl ProxyPipeline {
    /// Creates a pipeline over the given proxies.
    pub fn new(proxies: Vec<ProxyEndpoint>) -> Self {
        Self { proxies }
    }

    /// Creates a pipeline over the context's configured proxies.
    pub fn from_context(ctx: &FetchContext) -> Self {
        Self::new(ctx.settings.proxies.clone())
    }

    /// Returns the number of proxies in the pipeline.
    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    /// Returns true if the pipeline has no proxies.
    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// Returns the proxies in order.
    pub fn proxies(&self) -> &[ProxyEndpoint] {
        &self.proxies
    }

    /// Execute the pipeline for a target URL.
    #[instrument(skip(self, ctx), fields(proxies = self.proxies.len()))]
    pub async fn execute(&self, ctx: &FetchContext, target: &str) -> FetchOutcome {
        let start = Instant::now();
        let mut attempts = Vec::new();

        if self.proxies.is_empty() {
            return FetchOutcome {
                result: Err(FetchError::NoProxies),
                attempts,
                duration: start.elapsed(),
            };
        }

        info!(count = self.proxies.len(), "Executing proxy pipeline");
        let mut last_error = None;

        for proxy in &self.proxies {
            if ctx.is_cancelled() {
                debug!("Cancelled before next proxy");
                return FetchOutcome {
                    result: Err(FetchError::Cancelled),
                    attempts,
                    duration: start.elapsed(),
                };
            }

            let attempt_start = Instant::now();
            debug!(proxy = %proxy.name, "Trying proxy");

            match self.attempt(ctx, proxy, target).await {
                Ok(html) => {
                    let duration = attempt_start.elapsed();
                    info!(proxy = %proxy.name, duration = ?duration, "Proxy succeeded");
                    attempts.push(FetchAttempt::success(&proxy.name, duration));

                    return FetchOutcome {
                        result: Ok(FetchedPage {
                            html,
                            proxy: proxy.name.clone(),
                        }),
                        attempts,
                        duration: start.elapsed(),
                    };
                }
                Err(FetchError::Cancelled) => {
                    debug!(proxy = %proxy.name, "Cancelled during attempt");
                    attempts.push(FetchAttempt::failure(
                        &proxy.name,
                        FetchError::Cancelled.to_string(),
                        attempt_start.elapsed(),
                    ));
                    return FetchOutcome {
                        result: Err(FetchError::Cancelled),
                        attempts,
                        duration: start.elapsed(),
                    };
                }
                Err(error) => {
                    let duration = attempt_start.elapsed();
                    warn!(
                        proxy = %proxy.name,
                        error = %error,
                        duration = ?duration,
                        "Proxy failed"
                    );
                    attempts.push(FetchAttempt::failure(&proxy.name, error.to_string(), duration));
                    last_error = Some(error);
                }
            }
        }

        warn!("All proxies failed");
        let last_error = last_error.map_or_else(|| "unknown error".to_string(), |e| e.to_string());
        FetchOutcome {
            result: Err(FetchError::AllProxiesFailed {
                attempts: attempts.len(),
                last_error,
            }),
            attempts,
            duration: start.elapsed(),
        }
    }

    /// One proxy attempt, bounded by the timeout and the cancel token.
    async fn attempt(
        &self,
        ctx: &FetchContext,
        proxy: &ProxyEndpoint,
        target: &str,
    ) -> Result<String, FetchError> {
        let request = async {
            let url = proxy.request_url(target)?;
            let timeout = ctx.timeout();
            let response = tokio::time::timeout(timeout, ctx.http.get_text(&url))
                .await
                .map_err(|_| FetchError::Timeout(timeout.as_secs()))??;

            if !response.is_success() {
                return Err(FetchError::Status(response.status));
            }

            let len = response.body.chars().count();
            if len <= ctx.settings.min_body_chars {
                return Err(FetchError::BodyTooShort {
                    len,
                    min: ctx.settings.min_body_chars,
                });
            }
            Ok(response.body)
        };

        match &ctx.cancel {
            Some(token) => {
                tokio::select! {
                    result = request => result,
                    () = token.cancelled() => Err(FetchError::Cancelled),
                }
            }
            None => request.await,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{CancelHandle, FetchSettings};
    use httpmock::prelude::*;

    const DEAD_PROXY: &str = "http://127.0.0.1:1/{raw_url}";

    fn context(proxies: Vec<ProxyEndpoint>) -> FetchContext {
        FetchContext::with_settings(
            FetchSettings::default()
                .with_proxies(proxies)
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap()
    }

    fn page(len: usize) -> String {
        let mut body = String::from("<html><body>");
        while body.len() < len {
            body.push('x');
        }
        body
    }

    #[tokio::test]
    async fn test_empty_pipeline() {
        let ctx = context(vec![]);
        let outcome = ProxyPipeline::from_context(&ctx)
            .execute(&ctx, "https://example.com")
            .await;

        assert!(!outcome.is_success());
        assert!(matches!(outcome.result, Err(FetchError::NoProxies)));
        assert_eq!(outcome.attempts_count(), 0);
    }

    #[tokio::test]
    async fn test_falls_through_network_errors_to_third_proxy() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/raw");
                then.status(200).body(page(150));
            })
            .await;

        let ctx = context(vec![
            ProxyEndpoint::named("dead-1", DEAD_PROXY),
            ProxyEndpoint::named("dead-2", DEAD_PROXY),
            ProxyEndpoint::named("live", format!("{}?url={{url}}", server.url("/raw"))),
        ]);
        let outcome = ProxyPipeline::from_context(&ctx)
            .execute(&ctx, "https://example.com")
            .await;

        mock.assert_async().await;
        assert_eq!(outcome.attempts_count(), 3);
        assert_eq!(outcome.errors().len(), 2);
        assert_eq!(outcome.successful_proxy(), Some("live"));
        assert_eq!(outcome.into_html().unwrap(), page(150));
    }

    #[tokio::test]
    async fn test_target_is_percent_encoded() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/raw")
                    .query_param("url", "https://example.com/?a=1");
                then.status(200).body(page(200));
            })
            .await;

        let ctx = context(vec![ProxyEndpoint::new(format!(
            "{}?url={{url}}",
            server.url("/raw")
        ))]);
        let outcome = ProxyPipeline::from_context(&ctx)
            .execute(&ctx, "https://example.com/?a=1")
            .await;

        mock.assert_async().await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_short_body_moves_on() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/short");
                then.status(200).body(page(100));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/long");
                then.status(200).body(page(101));
            })
            .await;

        let ctx = context(vec![
            ProxyEndpoint::named("short", format!("{}?u={{url}}", server.url("/short"))),
            ProxyEndpoint::named("long", format!("{}?u={{url}}", server.url("/long"))),
        ]);
        let outcome = ProxyPipeline::from_context(&ctx)
            .execute(&ctx, "https://example.com")
            .await;

        assert_eq!(outcome.successful_proxy(), Some("long"));
        assert!(outcome.attempts[0].error.as_deref().unwrap().contains("too short"));
    }

    #[tokio::test]
    async fn test_non_ok_status_moves_on_and_reports_last_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/forbidden");
                then.status(403).body(page(500));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/unavailable");
                then.status(503).body(page(500));
            })
            .await;

        let ctx = context(vec![
            ProxyEndpoint::new(format!("{}?u={{url}}", server.url("/forbidden"))),
            ProxyEndpoint::new(format!("{}?u={{url}}", server.url("/unavailable"))),
        ]);
        let outcome = ProxyPipeline::from_context(&ctx)
            .execute(&ctx, "https://example.com")
            .await;

        match outcome.result {
            Err(FetchError::AllProxiesFailed {
                attempts,
                last_error,
            }) => {
                assert_eq!(attempts, 2);
                assert!(last_error.contains("503"), "{}", last_error);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slow_proxy_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/slow");
                then.status(200)
                    .body(page(500))
                    .delay(Duration::from_secs(5));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/fast");
                then.status(200).body(page(500));
            })
            .await;

        let ctx = FetchContext::with_settings(
            FetchSettings::default()
                .with_proxies(vec![
                    ProxyEndpoint::named("slow", format!("{}?u={{url}}", server.url("/slow"))),
                    ProxyEndpoint::named("fast", format!("{}?u={{url}}", server.url("/fast"))),
                ])
                .with_timeout(Duration::from_millis(300)),
        )
        .unwrap();
        let outcome = ProxyPipeline::from_context(&ctx)
            .execute(&ctx, "https://example.com")
            .await;

        assert_eq!(outcome.successful_proxy(), Some("fast"));
        assert!(outcome.attempts[0].error.is_some());
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let handle = CancelHandle::new();
        handle.cancel();
        let ctx = FetchContext::builder()
            .settings(FetchSettings::default().with_proxies(vec![ProxyEndpoint::new(DEAD_PROXY)]))
            .cancel_token(handle.token())
            .build()
            .unwrap();

        let outcome = ProxyPipeline::from_context(&ctx)
            .execute(&ctx, "https://example.com")
            .await;

        assert!(matches!(outcome.result, Err(FetchError::Cancelled)));
        assert_eq!(outcome.attempts_count(), 0);
    }

    #[tokio::test]
    async fn test_cancel_during_attempt_stops_pipeline() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/slow");
                then.status(200)
                    .body(page(500))
                    .delay(Duration::from_secs(5));
            })
            .await;

        let handle = CancelHandle::new();
        let ctx = FetchContext::builder()
            .settings(
                FetchSettings::default()
                    .with_proxies(vec![
                        ProxyEndpoint::named("slow", format!("{}?u={{url}}", server.url("/slow"))),
                        ProxyEndpoint::named("never", DEAD_PROXY),
                    ])
                    .with_timeout(Duration::from_secs(10)),
            )
            .cancel_token(handle.token())
            .build()
            .unwrap();

        let pipeline = ProxyPipeline::from_context(&ctx);
        let canceller = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            handle.cancel();
        };
        let (outcome, ()) = tokio::join!(pipeline.execute(&ctx, "https://example.com"), canceller);

        assert!(matches!(outcome.result, Err(FetchError::Cancelled)));
        assert_eq!(outcome.attempts_count(), 1);
    }
}
