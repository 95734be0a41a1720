//! Button and link samplers.

use scraper::ElementRef;
use stylepeek_core::{ButtonStyle, LinkStyle, MAX_INTERACTIVE_SAMPLES, truncate_link_text};
use tracing::{debug, warn};

use crate::css::{ElementStyles, parse_declarations};
use crate::defaults::{
    BUTTON_TEXT, DEFAULT_BUTTON, DEFAULT_LINK, DEMO_BUTTONS, DEMO_LINKS, LINK_TEXT,
};
use crate::document::{Document, attr, text_of};

/// Elements treated as buttons.
pub const BUTTON_SELECTOR: &str =
    r#"button, input[type="button"], input[type="submit"], .btn, [role="button"]"#;

/// Elements treated as links.
pub const LINK_SELECTOR: &str = "a[href]";

// ============================================================================
// Buttons
// ============================================================================

/// Samples up to five buttons in document order.
///
/// Only inline styles are read. No matches yields [`DEMO_BUTTONS`].
pub fn sample_buttons(doc: &Document) -> Vec<ButtonStyle> {
    let elements = match doc.select(BUTTON_SELECTOR) {
        Ok(elements) => elements,
        Err(e) => {
            warn!(error = %e, "Button selector failed");
            Vec::new()
        }
    };

    let buttons: Vec<ButtonStyle> = elements
        .into_iter()
        .take(MAX_INTERACTIVE_SAMPLES)
        .map(button_style)
        .collect();

    if buttons.is_empty() {
        debug!("No buttons found, using demo buttons");
        return DEMO_BUTTONS.clone();
    }
    debug!(count = buttons.len(), "Sampled buttons");
    buttons
}

fn button_style(element: ElementRef<'_>) -> ButtonStyle {
    let styles = inline_styles(element);
    let d = &*DEFAULT_BUTTON;

    ButtonStyle {
        text: button_text(element),
        background_color: styles.resolve("backgroundColor", &d.background_color),
        color: styles.resolve("color", &d.color),
        border: styles.resolve("border", &d.border),
        border_radius: styles.resolve("borderRadius", &d.border_radius),
        padding: styles.resolve("padding", &d.padding),
        font_size: styles.resolve("fontSize", &d.font_size),
        font_family: styles.resolve("fontFamily", &d.font_family),
        font_weight: styles.resolve("fontWeight", &d.font_weight),
        text_transform: styles.resolve("textTransform", &d.text_transform),
        box_shadow: styles.resolve("boxShadow", &d.box_shadow),
        letter_spacing: styles.resolve("letterSpacing", &d.letter_spacing),
        cursor: styles.resolve("cursor", &d.cursor),
    }
}

/// Text content, else the `value` attribute, else `"Button"`.
fn button_text(element: ElementRef<'_>) -> String {
    let text = text_of(element);
    if !text.is_empty() {
        return text;
    }
    attr(element, "value")
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(BUTTON_TEXT)
        .to_string()
}

// ============================================================================
// Links
// ============================================================================

/// Samples up to five anchors with an `href`, in document order.
///
/// No matches yields [`DEMO_LINKS`].
pub fn sample_links(doc: &Document) -> Vec<LinkStyle> {
    let elements = match doc.select(LINK_SELECTOR) {
        Ok(elements) => elements,
        Err(e) => {
            warn!(error = %e, "Link selector failed");
            Vec::new()
        }
    };

    let links: Vec<LinkStyle> = elements
        .into_iter()
        .take(MAX_INTERACTIVE_SAMPLES)
        .map(link_style)
        .collect();

    if links.is_empty() {
        debug!("No links found, using demo link");
        return DEMO_LINKS.clone();
    }
    debug!(count = links.len(), "Sampled links");
    links
}

fn link_style(element: ElementRef<'_>) -> LinkStyle {
    let styles = inline_styles(element);
    let d = &*DEFAULT_LINK;
    let text = text_of(element);

    LinkStyle {
        text: if text.is_empty() {
            LINK_TEXT.to_string()
        } else {
            truncate_link_text(&text)
        },
        color: styles.resolve("color", &d.color),
        text_decoration: styles.resolve("textDecoration", &d.text_decoration),
        font_size: styles.resolve("fontSize", &d.font_size),
        font_weight: styles.resolve("fontWeight", &d.font_weight),
    }
}

fn inline_styles(element: ElementRef<'_>) -> ElementStyles {
    ElementStyles::inline_only(parse_declarations(attr(element, "style").unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_kinds_and_cap() {
        let doc = Document::parse(
            r#"<button>One</button>
            <input type="button" value="Two">
            <input type="submit" value="Three">
            <a class="btn" href="/x">Four</a>
            <div role="button">Five</div>
            <button>Six</button>"#,
        );
        let texts: Vec<String> = sample_buttons(&doc).into_iter().map(|b| b.text).collect();
        assert_eq!(texts, ["One", "Two", "Three", "Four", "Five"]);
    }

    #[test]
    fn test_button_inline_styles_and_defaults() {
        let doc = Document::parse(
            r#"<button style="background-color: #000; border-radius: 999px; box-shadow: 0 1px 2px rgba(0,0,0,0.2)">Go</button>"#,
        );
        let button = &sample_buttons(&doc)[0];
        assert_eq!(button.background_color, "#000");
        assert_eq!(button.border_radius, "999px");
        assert_eq!(button.box_shadow, "0 1px 2px rgba(0,0,0,0.2)");
        assert_eq!(button.color, "#ffffff");
        assert_eq!(button.padding, "10px 20px");
        assert_eq!(button.cursor, "pointer");
    }

    #[test]
    fn test_button_text_fallbacks() {
        let doc = Document::parse(r#"<button>  </button><input type="submit">"#);
        let texts: Vec<String> = sample_buttons(&doc).into_iter().map(|b| b.text).collect();
        assert_eq!(texts, ["Button", "Button"]);
    }

    #[test]
    fn test_no_buttons_gives_demo_pair() {
        let buttons = sample_buttons(&Document::parse("<p>No buttons</p>"));
        assert_eq!(buttons, *DEMO_BUTTONS);
    }

    #[test]
    fn test_link_truncation() {
        let text = "abcdefghij".repeat(3) + "12345";
        assert_eq!(text.len(), 35);
        let doc = Document::parse(&format!(r##"<a href="#">{text}</a>"##));
        let links = sample_links(&doc);
        assert_eq!(links[0].text, format!("{}...", &text[..30]));
    }

    #[test]
    fn test_link_requires_href_and_caps() {
        let anchors: String = (0..7).map(|i| format!(r#"<a href="/{i}">L{i}</a>"#)).collect();
        let doc = Document::parse(&format!("<a name='top'>anchor</a>{anchors}"));
        let texts: Vec<String> = sample_links(&doc).into_iter().map(|l| l.text).collect();
        assert_eq!(texts, ["L0", "L1", "L2", "L3", "L4"]);
    }

    #[test]
    fn test_link_styles() {
        let doc = Document::parse(
            r#"<a href="/" style="color: #e11d48; text-decoration: none"><img src="x.png"></a>"#,
        );
        let link = &sample_links(&doc)[0];
        assert_eq!(link.text, "Example link");
        assert_eq!(link.color, "#e11d48");
        assert_eq!(link.text_decoration, "none");
        assert_eq!(link.font_size, "14px");
        assert_eq!(link.font_weight, "500");
    }

    #[test]
    fn test_no_links_gives_demo_link() {
        let links = sample_links(&Document::parse("<p>No links</p>"));
        assert_eq!(links, *DEMO_LINKS);
    }
}
