//! Markdown tree → HTML tree lowering.
//!
//! Reference links and images are resolved here against the document's
//! definitions; an unresolvable reference degrades to its visible
//! content rather than failing the conversion. Front matter and
//! definitions themselves produce no output.

use std::collections::HashMap;

use crate::hast::{text, Element, HtmlDocument, HtmlNode};
use crate::mdast::{Block, CellAlignment, Document, Inline, List, TableCell};

/// Lowers the Markdown document to the HTML tree the style engine
/// operates on.
pub fn to_html_tree(doc: &Document) -> HtmlDocument {
    let mut definitions = HashMap::new();
    for block in &doc.children {
        if let Block::Definition(def) = block {
            definitions.insert(def.identifier.clone(), (def.url.clone(), def.title.clone()));
        }
    }
    let mut children = Vec::new();
    for block in &doc.children {
        lower_block(block, &definitions, &mut children);
    }
    HtmlDocument { children }
}

type Definitions = HashMap<String, (String, Option<String>)>;

fn lower_block(block: &Block, definitions: &Definitions, out: &mut Vec<HtmlNode>) {
    match block {
        Block::FrontMatter(_) | Block::Definition(_) => {}
        Block::Heading(heading) => {
            let tag = format!("h{}", heading.depth.min(6));
            out.push(HtmlNode::Element(Element::with_children(
                &tag,
                lower_inlines(&heading.children, definitions),
            )));
        }
        Block::Paragraph(inlines) => {
            out.push(HtmlNode::Element(Element::with_children(
                "p",
                lower_inlines(inlines, definitions),
            )));
        }
        Block::CodeBlock(code) => {
            let mut code_el = Element::with_children("code", vec![text(&code.literal)]);
            if let Some(language) = &code.language {
                code_el.set_attr("class", &format!("language-{language}"));
            }
            out.push(HtmlNode::Element(Element::with_children(
                "pre",
                vec![HtmlNode::Element(code_el)],
            )));
        }
        Block::BlockQuote(blocks) => {
            let mut children = Vec::new();
            for child in blocks {
                lower_block(child, definitions, &mut children);
            }
            out.push(HtmlNode::Element(Element::with_children(
                "blockquote",
                children,
            )));
        }
        Block::List(list) => out.push(HtmlNode::Element(lower_list(list, definitions))),
        Block::Table(table) => out.push(HtmlNode::Element(lower_table(table, definitions))),
        Block::ThematicBreak => out.push(HtmlNode::Element(Element::new("hr"))),
        Block::HtmlBlock(html) => out.push(HtmlNode::Raw(html.clone())),
    }
}

fn lower_list(list: &List, definitions: &Definitions) -> Element {
    let mut element = Element::new(if list.ordered { "ol" } else { "ul" });
    if list.ordered && list.start != 1 {
        element.set_attr("start", &list.start.to_string());
    }
    for item in &list.items {
        let mut children = Vec::new();
        if let Some(checked) = item.checked {
            let mut checkbox = Element::new("input");
            checkbox.set_attr("type", "checkbox");
            checkbox.set_attr("disabled", "");
            if checked {
                checkbox.set_attr("checked", "");
            }
            children.push(HtmlNode::Element(checkbox));
            children.push(text(" "));
        }
        for block in &item.children {
            // Tight lists inline their sole-paragraph items.
            if list.tight {
                if let Block::Paragraph(inlines) = block {
                    children.extend(lower_inlines(inlines, definitions));
                    continue;
                }
            }
            lower_block(block, definitions, &mut children);
        }
        element
            .children
            .push(HtmlNode::Element(Element::with_children("li", children)));
    }
    element
}

fn lower_table(table: &crate::mdast::Table, definitions: &Definitions) -> Element {
    let cell = |content: &TableCell, tag: &str, column: usize| {
        let mut element = Element::with_children(tag, lower_inlines(content, definitions));
        let align = match table.alignments.get(column) {
            Some(CellAlignment::Left) => Some("left"),
            Some(CellAlignment::Center) => Some("center"),
            Some(CellAlignment::Right) => Some("right"),
            _ => None,
        };
        if let Some(align) = align {
            element.append_style(&format!("text-align: {align};"));
        }
        HtmlNode::Element(element)
    };

    let header_cells = table
        .header
        .iter()
        .enumerate()
        .map(|(column, content)| cell(content, "th", column))
        .collect();
    let head = Element::with_children(
        "thead",
        vec![HtmlNode::Element(Element::with_children(
            "tr",
            header_cells,
        ))],
    );

    let mut body = Element::new("tbody");
    for row in &table.rows {
        let cells = row
            .iter()
            .enumerate()
            .map(|(column, content)| cell(content, "td", column))
            .collect();
        body.children
            .push(HtmlNode::Element(Element::with_children("tr", cells)));
    }

    Element::with_children(
        "table",
        vec![HtmlNode::Element(head), HtmlNode::Element(body)],
    )
}

fn lower_inlines(inlines: &[Inline], definitions: &Definitions) -> Vec<HtmlNode> {
    let mut out = Vec::with_capacity(inlines.len());
    for inline in inlines {
        lower_inline(inline, definitions, &mut out);
    }
    out
}

fn lower_inline(inline: &Inline, definitions: &Definitions, out: &mut Vec<HtmlNode>) {
    match inline {
        Inline::Text(value) => out.push(text(value)),
        Inline::SoftBreak => out.push(text("\n")),
        Inline::HardBreak => out.push(HtmlNode::Element(Element::new("br"))),
        Inline::Strong(children) => out.push(wrap("strong", children, definitions)),
        Inline::Emph(children) => out.push(wrap("em", children, definitions)),
        Inline::Strikethrough(children) => out.push(wrap("del", children, definitions)),
        Inline::Superscript(children) => out.push(wrap("sup", children, definitions)),
        Inline::Code(literal) => {
            out.push(HtmlNode::Element(Element::with_children(
                "code",
                vec![text(literal)],
            )));
        }
        Inline::Link(link) => {
            out.push(HtmlNode::Element(anchor(
                &link.url,
                &link.title,
                lower_inlines(&link.children, definitions),
            )));
        }
        Inline::Image(image) => {
            out.push(HtmlNode::Element(image_element(
                &image.url,
                &image.title,
                &image.alt,
            )));
        }
        Inline::LinkReference {
            identifier,
            children,
        } => match definitions.get(identifier) {
            Some((url, title)) => {
                out.push(HtmlNode::Element(anchor(
                    url,
                    title,
                    lower_inlines(children, definitions),
                )));
            }
            None => out.extend(lower_inlines(children, definitions)),
        },
        Inline::ImageReference { identifier, alt } => match definitions.get(identifier) {
            Some((url, title)) => {
                out.push(HtmlNode::Element(image_element(url, title, alt)));
            }
            None => out.push(text(alt)),
        },
        Inline::Html(html) => out.push(HtmlNode::Raw(html.clone())),
    }
}

fn wrap(tag: &str, children: &[Inline], definitions: &Definitions) -> HtmlNode {
    HtmlNode::Element(Element::with_children(
        tag,
        lower_inlines(children, definitions),
    ))
}

fn anchor(url: &str, title: &Option<String>, children: Vec<HtmlNode>) -> Element {
    let mut element = Element::with_children("a", children);
    element.set_attr("href", url);
    if let Some(title) = title {
        element.set_attr("title", title);
    }
    element
}

fn image_element(url: &str, title: &Option<String>, alt: &str) -> Element {
    let mut element = Element::new("img");
    element.set_attr("src", url);
    element.set_attr("alt", alt);
    if let Some(title) = title {
        element.set_attr("title", title);
    }
    element
}
