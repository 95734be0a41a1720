//! Parsed HTML document with selector queries.
//!
//! Only static markup is inspected: no scripts run, no styles are computed
//! and no sub-resources are fetched.

use scraper::{ElementRef, Html, Selector};

use crate::error::DocumentError;

/// Selector for every element carrying an inline `style` attribute.
const INLINE_STYLE_SELECTOR: &str = "[style]";

/// Selector for `<style>` blocks.
const STYLE_BLOCK_SELECTOR: &str = "style";

/// A parsed page.
///
/// Wraps [`scraper::Html`], which is not `Send`; parse after the last
/// `.await` and drop before the next one.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document. Malformed markup is repaired, never
    /// rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns every element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidSelector`] if the selector does not parse.
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, DocumentError> {
        let parsed = parse_selector(selector)?;
        Ok(self.html.select(&parsed).collect())
    }

    /// Returns the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidSelector`] if the selector does not parse.
    pub fn select_first(&self, selector: &str) -> Result<Option<ElementRef<'_>>, DocumentError> {
        let parsed = parse_selector(selector)?;
        Ok(self.html.select(&parsed).next())
    }

    /// Returns the trimmed text of the first match, if it is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidSelector`] if the selector does not parse.
    pub fn first_text(&self, selector: &str) -> Result<Option<String>, DocumentError> {
        Ok(self
            .select_first(selector)?
            .map(text_of)
            .filter(|text| !text.is_empty()))
    }

    /// Raw `style` attribute values, in document order.
    pub fn inline_styles(&self) -> Vec<&str> {
        match self.select(INLINE_STYLE_SELECTOR) {
            Ok(elements) => elements
                .into_iter()
                .filter_map(|el| el.value().attr("style"))
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Raw text of every `<style>` block, in document order.
    pub fn style_blocks(&self) -> Vec<String> {
        match self.select(STYLE_BLOCK_SELECTOR) {
            Ok(elements) => elements
                .into_iter()
                .map(|el| el.text().collect::<String>())
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("errors", &self.html.errors.len())
            .finish_non_exhaustive()
    }
}

/// Concatenated descendant text of an element, trimmed.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Reads an attribute from an element.
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

fn parse_selector(selector: &str) -> Result<Selector, DocumentError> {
    Selector::parse(selector).map_err(|e| DocumentError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
