//! Theme model: named CSS sources normalized into selector → declaration
//! mappings.
//!
//! A theme is plain CSS text. The resolver reduces it to [`ThemeStyles`],
//! an insertion-ordered rule list the style engine matches against the
//! HTML tree. No cascade or specificity model exists beyond declaration
//! order; this is an intentional simplification.

pub mod parser;

pub use parser::{parse_theme, parse_theme_metadata};

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// A named, user-selectable style source.
///
/// Discovered by scanning a theme directory; immutable once loaded and
/// replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Unique among loaded themes; derived from the file stem.
    pub id: String,
    /// Display name: metadata `@theme-name` when present, else the id.
    pub name: String,
    pub path: PathBuf,
    pub author: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// Metadata extracted from a theme's leading block comment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeMetadata {
    pub name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// One selector's declaration set, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

/// The normalized selector → declarations mapping for one theme.
///
/// Insertion-ordered: the style engine processes rules in the order the
/// theme declared them. Re-declaring a selector merges per property with
/// the later value winning; it never replaces the whole block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemeStyles {
    rules: Vec<StyleRule>,
}

impl ThemeStyles {
    pub fn new() -> Self {
        ThemeStyles { rules: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// The declarations recorded for an exact selector string, if any.
    pub fn declarations(&self, selector: &str) -> Option<&[(String, String)]> {
        self.rules
            .iter()
            .find(|rule| rule.selector == selector)
            .map(|rule| rule.declarations.as_slice())
    }

    /// Set one property under a selector, merging last-wins into any
    /// existing rule for the identical selector string.
    pub fn set_declaration(&mut self, selector: &str, property: &str, value: &str) {
        let rule = match self
            .rules
            .iter_mut()
            .find(|rule| rule.selector == selector)
        {
            Some(rule) => rule,
            None => {
                self.rules.push(StyleRule {
                    selector: selector.to_string(),
                    declarations: Vec::new(),
                });
                self.rules.last_mut().expect("rule was just pushed")
            }
        };
        if let Some(entry) = rule
            .declarations
            .iter_mut()
            .find(|(key, _)| key == property)
        {
            entry.1 = value.to_string();
        } else {
            rule.declarations
                .push((property.to_string(), value.to_string()));
        }
    }

    /// One-level custom-property dereference table: every `--name`
    /// definition under `:root`, built once per theme resolution.
    pub fn custom_properties(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        if let Some(declarations) = self.declarations(":root") {
            for (property, value) in declarations {
                if property.starts_with("--") {
                    vars.insert(property.clone(), value.clone());
                }
            }
        }
        vars
    }
}
