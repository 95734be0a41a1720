//! Host APIs for the fetch pipeline.
//!
//! - [`http`] - HTTP client with tracing and fixed browser headers

pub mod http;

pub use http::{HttpClient, TextResponse};
