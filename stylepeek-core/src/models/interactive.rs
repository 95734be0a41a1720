//! Interactive element styles (buttons and links).

use serde::{Deserialize, Serialize};

/// Maximum characters of link text kept before an ellipsis is appended.
pub const LINK_TEXT_LIMIT: usize = 30;

/// Style sampled from a button-like element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    /// Button label.
    pub text: String,
    /// CSS `background-color`.
    pub background_color: String,
    /// CSS `color`.
    pub color: String,
    /// CSS `border`.
    pub border: String,
    /// CSS `border-radius`.
    pub border_radius: String,
    /// CSS `padding`.
    pub padding: String,
    /// CSS `font-size`.
    pub font_size: String,
    /// CSS `font-family`.
    pub font_family: String,
    /// CSS `font-weight`.
    pub font_weight: String,
    /// CSS `text-transform`.
    pub text_transform: String,
    /// CSS `box-shadow`.
    pub box_shadow: String,
    /// CSS `letter-spacing`.
    pub letter_spacing: String,
    /// CSS `cursor`.
    pub cursor: String,
}

/// Style sampled from an anchor element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStyle {
    /// Link text, truncated to [`LINK_TEXT_LIMIT`] characters plus `...`.
    pub text: String,
    /// CSS `color`.
    pub color: String,
    /// CSS `text-decoration`.
    pub text_decoration: String,
    /// CSS `font-size`.
    pub font_size: String,
    /// CSS `font-weight`.
    pub font_weight: String,
}

/// Truncates link text to [`LINK_TEXT_LIMIT`] characters, appending `...`
/// when anything was cut.
pub fn truncate_link_text(text: &str) -> String {
    if text.chars().count() > LINK_TEXT_LIMIT {
        let mut truncated: String = text.chars().take(LINK_TEXT_LIMIT).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}
