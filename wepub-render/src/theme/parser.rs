//! Theme CSS parsing (CSS text → ThemeStyles / ThemeMetadata)
//!
//! A restricted, non-nesting CSS reader: block comments are stripped,
//! `selector-list { declarations }` blocks are scanned in order, and the
//! selector list is split on top-level commas. Property names are kept
//! verbatim, including `--custom-property` names. Malformed declarations
//! (missing colon, empty value) are dropped silently; a theme with no
//! parseable rule yields an empty mapping, never an error.

use crate::theme::{ThemeMetadata, ThemeStyles};
use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid comment pattern"));

static RULE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)([^{}]+)\{([^}]*)\}").expect("valid rule pattern"));

static LEADING_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*/\*(.*?)\*/").expect("valid leading-comment pattern"));

/// Normalize raw theme CSS into a selector → declarations mapping.
pub fn parse_theme(css: &str) -> ThemeStyles {
    let mut styles = ThemeStyles::new();
    let cleaned = BLOCK_COMMENT.replace_all(css, "");

    for block in RULE_BLOCK.captures_iter(&cleaned) {
        let selector_list = block[1].trim();
        if selector_list.is_empty() {
            continue;
        }

        let declarations = parse_declarations(&block[2]);
        if declarations.is_empty() {
            continue;
        }

        // Selectors sharing a comma group each receive the full set.
        for selector in selector_list.split(',') {
            let selector = selector.trim();
            if selector.is_empty() {
                continue;
            }
            for (property, value) in &declarations {
                styles.set_declaration(selector, property, value);
            }
        }
    }

    styles
}

fn parse_declarations(body: &str) -> Vec<(String, String)> {
    let mut declarations = Vec::new();
    for declaration in body.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }
        declarations.push((property.to_string(), value.to_string()));
    }
    declarations
}

/// Extract labeled metadata fields from the theme's first block comment.
///
/// Recognized labels: `@theme-name:`, `@theme-author:`,
/// `@theme-description:`, `@theme-version:`. Absent fields stay `None`
/// and the caller falls back to the file-derived id.
pub fn parse_theme_metadata(css: &str) -> ThemeMetadata {
    let mut metadata = ThemeMetadata::default();

    let Some(comment) = LEADING_COMMENT.captures(css) else {
        return metadata;
    };

    for line in comment[1].lines() {
        let line = line.trim().trim_start_matches('*').trim();
        if let Some(value) = line.strip_prefix("@theme-name:") {
            metadata.name = non_empty(value);
        } else if let Some(value) = line.strip_prefix("@theme-author:") {
            metadata.author = non_empty(value);
        } else if let Some(value) = line.strip_prefix("@theme-description:") {
            metadata.description = non_empty(value);
        } else if let Some(value) = line.strip_prefix("@theme-version:") {
            metadata.version = non_empty(value);
        }
    }

    metadata
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
