//! Color literal mining.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use stylepeek_core::MAX_COLORS;
use tracing::debug;

use crate::defaults::DEFAULT_PALETTE;
use crate::document::Document;

/// Hex (3 or 6 digits), `rgb(r, g, b)` and `rgba(r, g, b, a)` literals.
static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)#([0-9a-f]{3}|[0-9a-f]{6})\b|rgb\((\d+,\s*\d+,\s*\d+)\)|rgba\((\d+,\s*\d+,\s*\d+,\s*[\d.]+)\)",
    )
    .expect("Invalid regex")
});

/// Collects color literals from inline styles, then `<style>` blocks.
///
/// Literals are kept as written, deduplicated on exact text, and capped at
/// [`MAX_COLORS`] in discovery order. A page without any yields
/// [`DEFAULT_PALETTE`].
pub fn mine_colors(doc: &Document) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut colors = Vec::new();
    let inline = doc.inline_styles();
    let blocks = doc.style_blocks();
    let sources = inline
        .iter()
        .copied()
        .chain(blocks.iter().map(String::as_str));

    for text in sources {
        for found in COLOR_RE.find_iter(text) {
            let literal = found.as_str();
            if seen.insert(literal.to_string()) {
                colors.push(literal.to_string());
            }
        }
    }

    if colors.is_empty() {
        debug!("No color literals found, using default palette");
        return default_palette();
    }

    debug!(found = colors.len(), "Mined colors");
    colors.truncate(MAX_COLORS);
    colors
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(html: &str) -> Vec<String> {
        mine_colors(&Document::parse(html))
    }

    #[test]
    fn test_inline_and_block_case_preserved() {
        let found = colors(
            r#"<html><head><style>.x{background:#fff}</style></head>
            <body><div style="color:#ABC123">a</div></body></html>"#,
        );
        assert_eq!(found, vec!["#ABC123", "#fff"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let found = colors(
            r#"<div style="color:#fff"></div><span style="border-color:#fff"></span>
            <style>p{color:#fff}</style>"#,
        );
        assert_eq!(found, vec!["#fff"]);
    }

    #[test]
    fn test_rgb_and_rgba() {
        let found = colors(
            r#"<style>a{color:rgb(1, 2, 3)} b{color:RGBA(10,20,30,0.5)} c{color:rgb(1, 2)}</style>"#,
        );
        assert_eq!(found, vec!["rgb(1, 2, 3)", "RGBA(10,20,30,0.5)"]);
    }

    #[test]
    fn test_inline_before_blocks() {
        let found = colors(
            r#"<html><head><style>a{color:#111}</style></head>
            <body><p style="color:#222">x</p></body></html>"#,
        );
        assert_eq!(found, vec!["#222", "#111"]);
    }

    #[test]
    fn test_invalid_hex_lengths_skipped() {
        let found = colors(r#"<style>a{color:#abcd} b{color:#abcdefab} c{color:#a1b2c3}</style>"#);
        assert_eq!(found, vec!["#a1b2c3"]);
    }

    #[test]
    fn test_capped_at_twenty() {
        let rules: String = (0..30).map(|i| format!("a{i}{{color:#{:06x}}}", i)).collect();
        let found = colors(&format!("<style>{rules}</style>"));
        assert_eq!(found.len(), MAX_COLORS);
        assert_eq!(found[0], "#000000");
        assert_eq!(found[19], "#000013");
    }

    #[test]
    fn test_default_palette() {
        assert_eq!(
            colors("<html><body><p>No colors here</p></body></html>"),
            vec!["#000000", "#ffffff", "#646cff", "#f9f9f9"]
        );
    }
}
