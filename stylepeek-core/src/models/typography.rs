//! Typography types.
//!
//! - [`TypeTag`] - The element kinds that carry a type sample (h1..h6, p)
//! - [`TypeStyle`] - A sampled typography profile for one tag

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Tag
// ============================================================================

/// Element kinds sampled for typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<p>`
    P,
}

impl TypeTag {
    /// Returns the HTML tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::P => "p",
        }
    }

    /// All tags in resolution order (headings, then paragraph).
    pub fn all() -> &'static [TypeTag] {
        &[
            Self::H1,
            Self::H2,
            Self::H3,
            Self::H4,
            Self::H5,
            Self::H6,
            Self::P,
        ]
    }

    /// Returns true for `h1`..`h6`.
    pub fn is_heading(&self) -> bool {
        !matches!(self, Self::P)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Type Style
// ============================================================================

/// Typography sampled from the first element of one tag kind.
///
/// Every style property is always populated; missing values are filled from
/// per-tag defaults during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    /// Which tag this entry describes.
    pub tag: TypeTag,
    /// Fixed display sample for the tag (not the page text).
    pub text: String,
    /// Trimmed text content of the sampled element, possibly empty.
    pub actual_text: String,
    /// CSS `font-size`.
    pub font_size: String,
    /// CSS `font-family`.
    pub font_family: String,
    /// CSS `font-weight`.
    pub font_weight: String,
    /// CSS `line-height`.
    pub line_height: String,
    /// CSS `color`.
    pub color: String,
    /// CSS `text-transform`.
    pub text_transform: String,
    /// CSS `letter-spacing`.
    pub letter_spacing: String,
    /// CSS `text-decoration`.
    pub text_decoration: String,
    /// Raw `class` attribute of the sampled element (headings only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_order() {
        let names: Vec<&str> = TypeTag::all().iter().map(TypeTag::as_str).collect();
        assert_eq!(names, ["h1", "h2", "h3", "h4", "h5", "h6", "p"]);
    }

    #[test]
    fn test_is_heading() {
        assert!(TypeTag::H3.is_heading());
        assert!(!TypeTag::P.is_heading());
    }
}
