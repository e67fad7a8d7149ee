//! Code-block decoration and syntax-highlight class mapping.
//!
//! The paste target ignores classes and stylesheets, so highlighted
//! code keeps its colors only through a fixed class-to-declarations
//! table inlined onto the `code` element. This runs as its own tree
//! pass before generic style resolution; the returned skip set records
//! every decorated `pre` subtree so the second pass leaves them alone.

use std::collections::HashSet;

use crate::hast::{Element, HtmlDocument, HtmlNode};

/// Identifies a node by its child-index path from the document root.
pub type NodePath = Vec<usize>;

/// Decorative frame for `pre` blocks. The top padding leaves room for
/// the window-button ornament.
const PRE_STYLE: &str = "border: 1px solid #ddd; border-radius: 5px; padding: 1em; \
     padding-top: 18px; margin: 1em 0; overflow: auto; background-color: #f6f8fa; \
     line-height: 1.5; font-size: 0.9em; box-shadow: 0 2px 5px rgba(0,0,0,0.1);";

/// Base style for `code` inside a decorated `pre`.
const CODE_STYLE: &str = "background: transparent; padding: 0; \
     font-family: Consolas, Monaco, 'Andale Mono', 'Ubuntu Mono', monospace; \
     font-size: 0.9em; line-height: 1.6; display: block;";

/// macOS-style window buttons, emitted verbatim at the top of every
/// code block.
const TRAFFIC_LIGHT_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"54\" \
     height=\"14\" viewBox=\"0 0 54 14\" style=\"display: block; margin-bottom: 8px;\">\
     <circle cx=\"7\" cy=\"7\" r=\"6\" fill=\"#ff5f56\"/>\
     <circle cx=\"27\" cy=\"7\" r=\"6\" fill=\"#ffbd2e\"/>\
     <circle cx=\"47\" cy=\"7\" r=\"6\" fill=\"#27c93f\"/></svg>";

/// Inline declarations for a syntax-highlight class. The table mirrors
/// the classic GitHub-flavored highlight palette.
pub fn highlight_declarations(class: &str) -> Option<&'static [(&'static str, &'static str)]> {
    let declarations: &[(&str, &str)] = match class {
        "hljs" => &[
            ("display", "block"),
            ("overflow-x", "auto"),
            ("padding", "0.5em"),
            ("color", "#333"),
            ("background-color", "#f8f8f8"),
        ],
        "hljs-comment" | "hljs-quote" => &[("color", "#998"), ("font-style", "italic")],
        "hljs-keyword" | "hljs-selector-tag" | "hljs-subst" => {
            &[("color", "#333"), ("font-weight", "bold")]
        }
        "hljs-number" | "hljs-literal" | "hljs-variable" | "hljs-template-variable"
        | "hljs-attr" => &[("color", "#008080")],
        "hljs-string" | "hljs-doctag" => &[("color", "#d14")],
        "hljs-title" | "hljs-section" | "hljs-selector-id" => {
            &[("color", "#900"), ("font-weight", "bold")]
        }
        "hljs-type" | "hljs-class" => &[("color", "#458"), ("font-weight", "bold")],
        "hljs-tag" | "hljs-name" | "hljs-attribute" => &[("color", "#000080")],
        "hljs-regexp" | "hljs-link" => &[("color", "#009926")],
        "hljs-symbol" | "hljs-bullet" => &[("color", "#990073")],
        "hljs-built_in" | "hljs-builtin-name" => &[("color", "#0086b3")],
        "hljs-meta" => &[("color", "#999"), ("font-weight", "bold")],
        "hljs-deletion" => &[("background-color", "#fdd")],
        "hljs-addition" => &[("background-color", "#dfd")],
        "hljs-emphasis" => &[("font-style", "italic")],
        "hljs-strong" => &[("font-weight", "bold")],
        _ => return None,
    };
    Some(declarations)
}

/// Decorates every `pre` block in the document and returns the paths
/// of the decorated subtrees, which later passes must skip.
pub fn process_code_blocks(doc: &mut HtmlDocument) -> HashSet<NodePath> {
    let mut skip = HashSet::new();
    let mut path = Vec::new();
    walk(&mut doc.children, &mut path, &mut skip);
    skip
}

fn walk(nodes: &mut [HtmlNode], path: &mut NodePath, skip: &mut HashSet<NodePath>) {
    for (index, node) in nodes.iter_mut().enumerate() {
        let HtmlNode::Element(element) = node else {
            continue;
        };
        path.push(index);
        if element.tag_name == "pre" {
            decorate_pre(element);
            skip.insert(path.clone());
        } else {
            walk(&mut element.children, path, skip);
        }
        path.pop();
    }
}

fn decorate_pre(pre: &mut Element) {
    for child in &mut pre.children {
        if let HtmlNode::Element(element) = child {
            if element.tag_name == "code" {
                style_code(element);
            }
        }
    }
    pre.remove_attr("class");
    pre.append_style(PRE_STYLE);
    pre.children
        .insert(0, HtmlNode::Raw(TRAFFIC_LIGHT_SVG.to_string()));
}

fn style_code(code: &mut Element) {
    let mut classes = Vec::new();
    collect_highlight_classes(code, &mut classes);
    let mut merged: Vec<(&str, &str)> = Vec::new();
    for class in &classes {
        if let Some(declarations) = highlight_declarations(class) {
            for &(property, value) in declarations {
                match merged.iter_mut().find(|(p, _)| *p == property) {
                    Some(entry) => entry.1 = value,
                    None => merged.push((property, value)),
                }
            }
        }
    }
    code.append_style(CODE_STYLE);
    if !merged.is_empty() {
        let extra: Vec<String> = merged
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect();
        code.append_style(&extra.join(" "));
    }
    harden_whitespace(&mut code.children);
}

fn collect_highlight_classes(element: &Element, classes: &mut Vec<String>) {
    for class in element.class_list() {
        if class.starts_with("hljs") {
            classes.push(class.to_string());
        }
    }
    for child in &element.children {
        if let HtmlNode::Element(element) = child {
            collect_highlight_classes(element, classes);
        }
    }
}

/// The paste target collapses runs of whitespace and drops newlines,
/// so code text is rewritten into explicit break elements and
/// no-break spaces. Tabs expand to four spaces first.
fn harden_whitespace(nodes: &mut Vec<HtmlNode>) {
    let mut rewritten = Vec::with_capacity(nodes.len());
    for node in nodes.drain(..) {
        match node {
            HtmlNode::Text(value) => rewritten.extend(harden_text(&value)),
            HtmlNode::Element(mut element) => {
                harden_whitespace(&mut element.children);
                rewritten.push(HtmlNode::Element(element));
            }
            other => rewritten.push(other),
        }
    }
    *nodes = rewritten;
}

fn harden_text(value: &str) -> Vec<HtmlNode> {
    let expanded = value.replace('\t', "    ");
    let mut nodes = Vec::new();
    let mut run = String::new();
    for ch in expanded.chars() {
        match ch {
            '\n' => {
                if !run.is_empty() {
                    nodes.push(HtmlNode::Text(std::mem::take(&mut run)));
                }
                nodes.push(HtmlNode::Element(Element::new("br")));
            }
            ' ' => run.push('\u{a0}'),
            other => run.push(other),
        }
    }
    if !run.is_empty() {
        nodes.push(HtmlNode::Text(run));
    }
    nodes
}
