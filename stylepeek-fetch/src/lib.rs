// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Stylepeek Fetch
//!
//! Retrieves the HTML of arbitrary public pages through a list of CORS
//! proxies.
//!
//! ## Host APIs
//!
//! - [`host::http`] - HTTP client with tracing and browser-like headers
//!
//! ## Fetch Pipeline
//!
//! - [`proxy::ProxyEndpoint`] - A proxy URL template
//! - [`pipeline::ProxyPipeline`] - Tries proxies in order until one works
//! - [`context::FetchContext`] - HTTP client, settings and cancellation
//! - [`source::HtmlSource`] - The seam extraction depends on
//!
//! ## Example
//!
//! ```ignore
//! use stylepeek_fetch::{FetchContext, HtmlSource, ProxyFetcher};
//!
//! let fetcher = ProxyFetcher::new(FetchContext::new()?);
//! let html = fetcher.fetch_html("https://example.com").await?;
//! ```

pub mod context;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod proxy;
pub mod source;

// Errors
pub use error::FetchError;

// Host APIs
pub use host::http::{HttpClient, TextResponse};

// Pipeline
pub use context::{
    CancelHandle, CancelToken, DEFAULT_MIN_BODY_CHARS, FetchContext, FetchContextBuilder,
    FetchSettings,
};
pub use pipeline::{FetchAttempt, FetchOutcome, FetchedPage, ProxyPipeline};
pub use proxy::{DEFAULT_PROXY_TEMPLATES, ProxyEndpoint};
pub use source::{HtmlSource, ProxyFetcher};
