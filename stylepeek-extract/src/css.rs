//! Inline-style and class back-match helpers shared by the resolvers.
//!
//! Nothing here models the cascade: declarations are read as text and keys
//! are camel-cased CSS property names (`font-size` becomes `fontSize`).

use std::collections::HashMap;

use regex::RegexBuilder;
use tracing::{debug, warn};

/// Camel-cased property name to raw value.
pub type StyleMap = HashMap<String, String>;

/// Converts a hyphenated CSS property to camel case.
///
/// Only a hyphen followed by a lowercase ASCII letter is folded, so a
/// vendor prefix like `-webkit-box-shadow` becomes `WebkitBoxShadow`.
pub fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut chars = property.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Parses a declaration list such as `color: red; font-size: 12px`.
///
/// Each piece is split on its first `:`; pieces with an empty name or value
/// are skipped. Later declarations overwrite earlier ones.
pub fn parse_declarations(text: &str) -> StyleMap {
    let mut styles = StyleMap::new();
    for declaration in text.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let (property, value) = (property.trim(), value.trim());
        if property.is_empty() || value.is_empty() {
            continue;
        }
        styles.insert(camel_case(property), value.to_string());
    }
    styles
}

/// Finds declarations for an element's classes in raw `<style>` text.
///
/// For every block, in order, and every whitespace-separated class, the
/// first `.class { ... }` rule (case-insensitive) is parsed and merged in.
/// Later blocks and later classes overwrite earlier values. This is a text
/// match: `.card` also hits `.list .card {}` and `.card:hover {}` is missed.
pub fn class_rules(class_attr: &str, style_blocks: &[String]) -> StyleMap {
    let mut styles = StyleMap::new();
    let classes: Vec<&str> = class_attr.split_whitespace().collect();
    if classes.is_empty() {
        return styles;
    }

    for block in style_blocks {
        for class in &classes {
            let pattern = format!(r"\.{}\s*\{{([^}}]+)\}}", regex::escape(class));
            let rule = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
                Ok(rule) => rule,
                Err(e) => {
                    warn!(class, error = %e, "Skipping class back-match");
                    continue;
                }
            };
            if let Some(body) = rule.captures(block).and_then(|c| c.get(1)) {
                debug!(class, "Matched class rule");
                styles.extend(parse_declarations(body.as_str()));
            }
        }
    }
    styles
}

/// Inline and class-matched styles for one element.
#[derive(Debug, Default, Clone)]
pub struct ElementStyles {
    inline: StyleMap,
    class: StyleMap,
}

impl ElementStyles {
    /// Reads styles from an inline `style` value and optional class rules.
    pub fn new(inline: StyleMap, class: StyleMap) -> Self {
        Self { inline, class }
    }

    /// Inline styles only.
    pub fn inline_only(inline: StyleMap) -> Self {
        Self::new(inline, StyleMap::new())
    }

    /// Resolves a property: inline value, then class value, then `default`.
    pub fn resolve(&self, key: &str, default: &str) -> String {
        self.inline
            .get(key)
            .or_else(|| self.class.get(key))
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
