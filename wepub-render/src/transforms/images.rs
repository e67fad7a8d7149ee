//! Image normalization on the HTML tree.
//!
//! Every image is wrapped in a `<figure>` so captions survive pasting,
//! relative sources are optionally rewritten against a configured
//! domain, and the incoming source is kept under `data-src` for
//! traceability.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::hast::{text, Element, HtmlDocument, HtmlNode};

static ABSOLUTE_SOURCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?://|data:|file:)").expect("valid source pattern"));

/// Wraps images in figures and rewrites relative sources.
///
/// An image that is the child of a paragraph collapses the paragraph
/// into the figure, so no empty `<p>` shell is left behind. An empty
/// `image_domain` disables source rewriting.
pub fn transform_images(doc: &mut HtmlDocument, image_domain: &str) {
    transform_nodes(&mut doc.children, image_domain);
}

fn transform_nodes(nodes: &mut [HtmlNode], domain: &str) {
    for node in nodes {
        let HtmlNode::Element(element) = node else {
            continue;
        };
        if element.tag_name == "p" {
            if let Some(index) = element
                .children
                .iter()
                .position(|child| matches!(child, HtmlNode::Element(e) if e.tag_name == "img"))
            {
                let HtmlNode::Element(img) = element.children.remove(index) else {
                    unreachable!();
                };
                let figure = build_figure(img, domain);
                element.tag_name = figure.tag_name;
                element.properties = figure.properties;
                element.children = figure.children;
                continue;
            }
        }
        if element.tag_name == "img" {
            let img = std::mem::replace(element, Element::new("figure"));
            *element = build_figure(img, domain);
            continue;
        }
        transform_nodes(&mut element.children, domain);
    }
}

fn build_figure(mut img: Element, domain: &str) -> Element {
    let source = img.attr("src").unwrap_or_default().to_string();
    img.set_attr("data-src", &source);
    if !domain.is_empty() && !source.is_empty() && !ABSOLUTE_SOURCE.is_match(&source) {
        img.set_attr("src", &join_domain(domain, &source));
    }
    let caption = img
        .attr("title")
        .filter(|title| !title.is_empty())
        .or_else(|| img.attr("alt").filter(|alt| !alt.is_empty()))
        .map(str::to_string);
    let mut children = vec![HtmlNode::Element(img)];
    if let Some(caption) = caption {
        children.push(HtmlNode::Element(Element::with_children(
            "figcaption",
            vec![text(&caption)],
        )));
    }
    Element::with_children("figure", children)
}

fn join_domain(domain: &str, path: &str) -> String {
    format!(
        "{}/{}",
        domain.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
