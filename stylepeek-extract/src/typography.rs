//! Typography resolution for headings and paragraphs.
//!
//! For each tag in `h1..h6, p` only the first element in document order is
//! sampled. Properties come from its inline style, then from rules whose
//! selector textually names one of its classes, then from the tag's row in
//! [`tag_defaults`].
//!
//! A page with no heading or paragraph at all yields [`DEMO_TYPE_STYLES`].
//! A page with some of them yields exactly those tags; missing ones are not
//! backfilled.

use scraper::ElementRef;
use stylepeek_core::{TypeStyle, TypeTag};
use tracing::{debug, warn};

use crate::css::{ElementStyles, class_rules, parse_declarations};
use crate::defaults::{
    DEMO_TYPE_STYLES, LETTER_SPACING, SYSTEM_FONT, TEXT_DECORATION, TEXT_TRANSFORM, tag_defaults,
};
use crate::document::{Document, attr, text_of};

/// Resolves one [`TypeStyle`] per present tag, ordered `h1..h6, p`.
pub fn resolve_typography(doc: &Document) -> Vec<TypeStyle> {
    let blocks = doc.style_blocks();
    let mut styles = Vec::new();

    for &tag in TypeTag::all() {
        match doc.select_first(tag.as_str()) {
            Ok(Some(element)) => styles.push(resolve_element(tag, element, &blocks)),
            Ok(None) => debug!(%tag, "Tag not present"),
            Err(e) => warn!(%tag, error = %e, "Skipping tag"),
        }
    }

    if styles.is_empty() {
        debug!("No headings or paragraphs, using demo typography");
        return DEMO_TYPE_STYLES.clone();
    }
    styles
}

/// Resolves the style of one sampled element.
pub fn resolve_element(tag: TypeTag, element: ElementRef<'_>, style_blocks: &[String]) -> TypeStyle {
    let class_attr = attr(element, "class").unwrap_or_default();
    let styles = ElementStyles::new(
        parse_declarations(attr(element, "style").unwrap_or_default()),
        class_rules(class_attr, style_blocks),
    );
    let defaults = tag_defaults(tag);

    TypeStyle {
        tag,
        text: defaults.sample_text.to_string(),
        actual_text: text_of(element),
        font_size: styles.resolve("fontSize", defaults.font_size),
        font_family: styles.resolve("fontFamily", SYSTEM_FONT),
        font_weight: styles.resolve("fontWeight", defaults.font_weight),
        line_height: styles.resolve("lineHeight", defaults.line_height),
        color: styles.resolve("color", defaults.color),
        text_transform: styles.resolve("textTransform", TEXT_TRANSFORM),
        letter_spacing: styles.resolve("letterSpacing", LETTER_SPACING),
        text_decoration: styles.resolve("textDecoration", TEXT_DECORATION),
        class_name: tag.is_heading().then(|| class_attr.to_string()),
    }
}
