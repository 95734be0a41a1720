//! Extraction orchestrator.
//!
//! Normalizes the input, fetches the page through an [`HtmlSource`] and runs
//! every resolver over the parsed document. Resolvers never fail the whole
//! extraction; they degrade to their defaults instead.

use chrono::{DateTime, Utc};
use stylepeek_core::{ExtractError, StyleProject, format_timestamp};
use stylepeek_fetch::HtmlSource;
use tracing::{debug, info, instrument};
use url::Url;

use crate::colors::mine_colors;
use crate::document::Document;
use crate::favicon::resolve_favicon;
use crate::interactive::{sample_buttons, sample_links};
use crate::normalize::normalize_url;
use crate::typography::resolve_typography;

// ============================================================================
// Style Extractor
// ============================================================================

/// Turns a user-entered URL into a [`StyleProject`].
#[derive(Debug)]
pub struct StyleExtractor<S> {
    source: S,
}

impl<S: HtmlSource> StyleExtractor<S> {
    /// Creates an extractor reading pages from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs the full extraction for a domain or URL.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::InvalidUrl`] if the input is empty or not a URL
    /// - [`ExtractError::Fetch`] if no proxy returned usable HTML
    /// - [`ExtractError::Extraction`] if the parsed page cannot be processed
    #[instrument(skip(self))]
    pub async fn extract(&self, input: &str) -> Result<StyleProject, ExtractError> {
        let url = normalize_url(input)?;
        let html = self.source.fetch_html(&url).await?;
        debug!(len = html.len(), "Fetched HTML");

        let project = build_project(&url, &html, Utc::now())?;
        info!(
            title = %project.title,
            colors = project.colors.len(),
            type_styles = project.type_styles.len(),
            "Extraction complete"
        );
        Ok(project)
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Builds a project from already-fetched HTML.
///
/// `url` must be the normalized URL; it is stored as-is.
///
/// # Errors
///
/// Returns [`ExtractError::Extraction`] if the title cannot be derived.
pub fn build_project(
    url: &str,
    html: &str,
    created_at: DateTime<Utc>,
) -> Result<StyleProject, ExtractError> {
    let doc = Document::parse(html);
    let title = derive_title(&doc, url)?;

    Ok(StyleProject {
        title,
        url: url.to_string(),
        favicon: resolve_favicon(&doc, url),
        colors: mine_colors(&doc),
        type_styles: resolve_typography(&doc),
        button_styles: sample_buttons(&doc),
        link_styles: sample_links(&doc),
        created_at: format_timestamp(created_at),
    })
}

/// Page `<title>`, else the first `<h1>`, else the URL's hostname.
///
/// # Errors
///
/// Returns [`ExtractError::Extraction`] when neither element has text and the
/// URL has no host.
pub fn derive_title(doc: &Document, url: &str) -> Result<String, ExtractError> {
    if let Some(title) = doc.first_text("title")? {
        return Ok(title);
    }
    if let Some(heading) = doc.first_text("h1")? {
        return Ok(heading);
    }

    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .ok_or_else(|| ExtractError::Extraction(format!("cannot derive a title for {url}")))
}
