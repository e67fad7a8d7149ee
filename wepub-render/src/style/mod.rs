//! Theme style resolution.
//!
//! Walks the HTML tree and turns the theme's selector/declaration
//! rules into inline `style` attributes, since the paste target strips
//! everything else. Resolution is two-pass: code blocks are decorated
//! first and skipped by the generic pass.

pub mod highlight;
pub mod selector;

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::hast::{Element, HtmlDocument, HtmlNode};
use crate::theme::ThemeStyles;
use selector::selector_matches;

static VAR_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"var\((--[^)]+)\)").expect("valid var pattern"));

/// Applies the theme to every element of the document in place.
///
/// Rules are evaluated in theme order with per-property last-wins
/// merging. Anchors are rewritten to styled `span`s because the paste
/// target does not keep hyperlinks. Raw nodes are never touched.
pub fn apply_styles(doc: &mut HtmlDocument, theme: &ThemeStyles) {
    let variables = theme.custom_properties();
    let skip = highlight::process_code_blocks(doc);
    let mut path = Vec::new();
    style_nodes(&mut doc.children, theme, &variables, &skip, &mut path);
}

/// Inline declaration string for the top-level container, resolved
/// from the theme's `body` rule. Empty when the theme has none.
pub fn resolve_body_style(theme: &ThemeStyles) -> String {
    let variables = theme.custom_properties();
    let mut merged: Vec<(String, String)> = Vec::new();
    for rule in theme.rules() {
        if rule
            .selector
            .split(',')
            .any(|group| group.trim() == "body")
        {
            merge_declarations(&mut merged, &rule.declarations);
        }
    }
    declaration_string(&merged, &variables)
}

fn style_nodes(
    nodes: &mut [HtmlNode],
    theme: &ThemeStyles,
    variables: &HashMap<String, String>,
    skip: &HashSet<Vec<usize>>,
    path: &mut Vec<usize>,
) {
    for (index, node) in nodes.iter_mut().enumerate() {
        let HtmlNode::Element(element) = node else {
            continue;
        };
        path.push(index);
        if !skip.contains(path) {
            style_element(element, theme, variables);
            style_nodes(&mut element.children, theme, variables, skip, path);
        }
        path.pop();
    }
}

fn style_element(
    element: &mut Element,
    theme: &ThemeStyles,
    variables: &HashMap<String, String>,
) {
    if element.tag_name == "a" {
        element.tag_name = "span".to_string();
        element.remove_attr("href");
        let anchor_style = resolve_element_style(element, "a", theme, variables);
        element.append_style(&anchor_style);
    }
    let tag = element.tag_name.clone();
    let style = resolve_element_style(element, &tag, theme, variables);
    element.append_style(&style);

    // Fixed pixel dimensions on images move into the style attribute,
    // which is the only sizing the paste target honors.
    if element.tag_name == "img" {
        if let Some(width) = element.remove_attr("width") {
            element.append_style(&format!("width: {width}px;"));
        }
        if let Some(height) = element.remove_attr("height") {
            element.append_style(&format!("height: {height}px;"));
        }
    }
}

fn resolve_element_style(
    element: &Element,
    tag_name: &str,
    theme: &ThemeStyles,
    variables: &HashMap<String, String>,
) -> String {
    let mut merged: Vec<(String, String)> = Vec::new();
    for rule in theme.rules() {
        if selector_matches(&rule.selector, element, tag_name) {
            merge_declarations(&mut merged, &rule.declarations);
        }
    }
    declaration_string(&merged, variables)
}

fn merge_declarations(merged: &mut Vec<(String, String)>, declarations: &[(String, String)]) {
    for (property, value) in declarations {
        match merged.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value.clone(),
            None => merged.push((property.clone(), value.clone())),
        }
    }
}

/// Renders merged declarations as an inline style string. Custom
/// property definitions are dropped, `var()` references are resolved
/// one level deep, and property names are normalized to kebab-case.
fn declaration_string(
    declarations: &[(String, String)],
    variables: &HashMap<String, String>,
) -> String {
    let rendered: Vec<String> = declarations
        .iter()
        .filter(|(property, _)| !property.starts_with("--"))
        .map(|(property, value)| {
            format!(
                "{}: {};",
                kebab_case(property),
                substitute_variables(value, variables)
            )
        })
        .collect();
    rendered.join(" ")
}

/// One-level `var(--x)` dereference. References to undefined variables
/// are kept verbatim so the output stays inspectable.
fn substitute_variables(value: &str, variables: &HashMap<String, String>) -> String {
    if !value.contains("var(--") {
        return value.to_string();
    }
    VAR_REFERENCE
        .replace_all(value, |captures: &regex::Captures| {
            match variables.get(&captures[1]) {
                Some(resolved) => resolved.clone(),
                None => captures[0].to_string(),
            }
        })
        .into_owned()
}

fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
