//! Default values used when a page does not specify a style.
//!
//! The tables are built once and shared; resolvers only read them.

use std::sync::LazyLock;

use stylepeek_core::{ButtonStyle, LinkStyle, TypeStyle, TypeTag};

/// Font stack used whenever no family is found.
pub const SYSTEM_FONT: &str = "system-ui, -apple-system, sans-serif";

/// Palette returned when a page contains no color literals.
pub const DEFAULT_PALETTE: [&str; 4] = ["#000000", "#ffffff", "#646cff", "#f9f9f9"];

/// Fallback `text-transform`.
pub const TEXT_TRANSFORM: &str = "none";

/// Fallback `letter-spacing`.
pub const LETTER_SPACING: &str = "normal";

/// Fallback `text-decoration` for headings and paragraphs.
pub const TEXT_DECORATION: &str = "none";

/// Button label used when an element has neither text nor `value`.
pub const BUTTON_TEXT: &str = "Button";

/// Link label used when an anchor has no text.
pub const LINK_TEXT: &str = "Example link";

const SERIF_FONT: &str = "Georgia, serif";

const PARAGRAPH_SAMPLE: &str =
    "This is paragraph text that demonstrates the body typography styling from the website.";

// ============================================================================
// Typography
// ============================================================================

/// Per-tag defaults for typography resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDefaults {
    /// Display sample shown instead of the page text.
    pub sample_text: &'static str,
    /// Default `font-size`.
    pub font_size: &'static str,
    /// Default `font-weight`.
    pub font_weight: &'static str,
    /// Default `line-height`.
    pub line_height: &'static str,
    /// Default `color`.
    pub color: &'static str,
}

const fn tag_row(
    sample_text: &'static str,
    font_size: &'static str,
    font_weight: &'static str,
    line_height: &'static str,
    color: &'static str,
) -> TagDefaults {
    TagDefaults {
        sample_text,
        font_size,
        font_weight,
        line_height,
        color,
    }
}

const H1: TagDefaults = tag_row("Main Heading Text", "36px", "800", "1.1", "#000000");
const H2: TagDefaults = tag_row("Secondary Heading Text", "30px", "700", "1.2", "#111111");
const H3: TagDefaults = tag_row("Third Level Heading", "24px", "600", "1.3", "#222222");
const H4: TagDefaults = tag_row("Fourth Level Heading", "20px", "600", "1.4", "#333333");
const H5: TagDefaults = tag_row("Fifth Level Heading", "18px", "500", "1.5", "#444444");
const H6: TagDefaults = tag_row("Sixth Level Heading", "16px", "500", "1.5", "#666666");
const P: TagDefaults = tag_row(PARAGRAPH_SAMPLE, "16px", "400", "1.6", "#374151");

/// Returns the defaults row for a tag.
pub fn tag_defaults(tag: TypeTag) -> &'static TagDefaults {
    match tag {
        TypeTag::H1 => &H1,
        TypeTag::H2 => &H2,
        TypeTag::H3 => &H3,
        TypeTag::H4 => &H4,
        TypeTag::H5 => &H5,
        TypeTag::H6 => &H6,
        TypeTag::P => &P,
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_style(
    tag: TypeTag,
    text: &str,
    font_size: &str,
    font_family: &str,
    font_weight: &str,
    line_height: &str,
    color: &str,
    text_transform: &str,
    letter_spacing: &str,
) -> TypeStyle {
    TypeStyle {
        tag,
        text: text.to_string(),
        actual_text: String::new(),
        font_size: font_size.to_string(),
        font_family: font_family.to_string(),
        font_weight: font_weight.to_string(),
        line_height: line_height.to_string(),
        color: color.to_string(),
        text_transform: text_transform.to_string(),
        letter_spacing: letter_spacing.to_string(),
        text_decoration: TEXT_DECORATION.to_string(),
        class_name: None,
    }
}

/// Returned when a page has no headings and no paragraphs at all.
pub static DEMO_TYPE_STYLES: LazyLock<Vec<TypeStyle>> = LazyLock::new(|| {
    vec![
        demo_style(TypeTag::H1, "Main Heading Example", "36px", SERIF_FONT, "800", "1.1", "#000000", "none", "-0.02em"),
        demo_style(TypeTag::H2, "Secondary Heading Example", "30px", SERIF_FONT, "700", "1.2", "#111111", "none", "-0.01em"),
        demo_style(TypeTag::H3, "Third Level Heading", "24px", SYSTEM_FONT, "600", "1.3", "#222222", "none", "normal"),
        demo_style(TypeTag::H4, "Fourth Level Heading", "20px", SYSTEM_FONT, "600", "1.4", "#333333", "none", "normal"),
        demo_style(TypeTag::H5, "Fifth Level Heading", "18px", SYSTEM_FONT, "500", "1.5", "#444444", "uppercase", "0.05em"),
        demo_style(TypeTag::H6, "Sixth Level Heading", "16px", SYSTEM_FONT, "500", "1.5", "#666666", "uppercase", "0.1em"),
        demo_style(TypeTag::P, PARAGRAPH_SAMPLE, "16px", SYSTEM_FONT, "400", "1.6", "#333333", "none", "normal"),
    ]
});

// ============================================================================
// Buttons & Links
// ============================================================================

/// Property defaults for sampled buttons.
pub static DEFAULT_BUTTON: LazyLock<ButtonStyle> = LazyLock::new(|| ButtonStyle {
    text: BUTTON_TEXT.to_string(),
    background_color: "#3b82f6".to_string(),
    color: "#ffffff".to_string(),
    border: "none".to_string(),
    border_radius: "6px".to_string(),
    padding: "10px 20px".to_string(),
    font_size: "14px".to_string(),
    font_family: SYSTEM_FONT.to_string(),
    font_weight: "500".to_string(),
    text_transform: "none".to_string(),
    box_shadow: "none".to_string(),
    letter_spacing: "normal".to_string(),
    cursor: "pointer".to_string(),
});

/// Returned when a page has no button-like elements.
pub static DEMO_BUTTONS: LazyLock<Vec<ButtonStyle>> = LazyLock::new(|| {
    let primary = ButtonStyle {
        text: "Primary Button".to_string(),
        ..DEFAULT_BUTTON.clone()
    };
    let secondary = ButtonStyle {
        text: "Secondary Button".to_string(),
        background_color: "#f1f5f9".to_string(),
        color: "#1e293b".to_string(),
        border: "1px solid #e2e8f0".to_string(),
        ..DEFAULT_BUTTON.clone()
    };
    vec![primary, secondary]
});

/// Property defaults for sampled links.
pub static DEFAULT_LINK: LazyLock<LinkStyle> = LazyLock::new(|| LinkStyle {
    text: LINK_TEXT.to_string(),
    color: "#3b82f6".to_string(),
    text_decoration: "underline".to_string(),
    font_size: "14px".to_string(),
    font_weight: "500".to_string(),
});

/// Returned when a page has no anchors with an `href`.
pub static DEMO_LINKS: LazyLock<Vec<LinkStyle>> = LazyLock::new(|| {
    vec![LinkStyle {
        text: "Example link text".to_string(),
        ..DEFAULT_LINK.clone()
    }]
});
