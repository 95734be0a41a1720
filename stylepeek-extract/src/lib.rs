// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Stylepeek Extract
//!
//! Heuristic style extraction from static HTML.
//!
//! Given a page, the resolvers sample a lightweight design system:
//!
//! | Resolver | Reads | Fallback |
//! |----------|-------|----------|
//! | [`favicon`] | icon `<link>` tags | `/favicon.ico` at the origin |
//! | [`colors`] | inline styles, `<style>` blocks | 4-color palette |
//! | [`typography`] | first `h1..h6`, `p`; inline + class rules | 7-entry demo set |
//! | [`interactive`] | buttons and `a[href]`, inline only | demo buttons / link |
//!
//! Computed styles, the cascade and external stylesheets are out of reach:
//! everything comes from the markup string.
//!
//! ## Usage
//!
//! ```ignore
//! use stylepeek_extract::StyleExtractor;
//! use stylepeek_fetch::ProxyFetcher;
//!
//! let extractor = StyleExtractor::new(ProxyFetcher::with_defaults()?);
//! let project = extractor.extract("apple.com").await?;
//! println!("{} colors", project.colors.len());
//! ```

pub mod colors;
pub mod css;
pub mod defaults;
pub mod document;
pub mod error;
pub mod extractor;
pub mod favicon;
pub mod interactive;
pub mod normalize;
pub mod typography;


// Re-export key types
pub use document::Document;
pub use error::DocumentError;
pub use extractor::{StyleExtractor, build_project, derive_title};
pub use normalize::normalize_url;

// Re-export resolvers
pub use colors::mine_colors;
pub use favicon::resolve_favicon;
pub use interactive::{sample_buttons, sample_links};
pub use typography::resolve_typography;
