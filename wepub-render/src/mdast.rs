//! Core data structures for the Markdown intermediate representation.
//!
//! The pipeline owns this tree exclusively: each transform stage mutates
//! the document it receives and hands it on. Nothing here is shared.

/// Represents the root of a parsed Markdown document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Block>,
}

/// A block-level Markdown node.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Vec<Inline>),
    CodeBlock(CodeBlock),
    BlockQuote(Vec<Block>),
    List(List),
    Table(Table),
    ThematicBreak,
    /// Raw block-level HTML, passed through unchanged.
    HtmlBlock(String),
    /// A link-reference definition (`[id]: url "title"`).
    Definition(Definition),
    /// Leading metadata block, suppressed from rendered output.
    FrontMatter(String),
}

/// Represents a heading with a depth of 1–6.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub depth: u8,
    pub children: Vec<Inline>,
}

/// Represents a fenced or indented code block.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub literal: String,
}

/// Represents an ordered or unordered list.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub ordered: bool,
    pub start: u32,
    /// Tight lists render item paragraphs without `<p>` wrappers.
    pub tight: bool,
    pub items: Vec<ListItem>,
}

/// Represents a single list item.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    /// Set for GFM task-list items: Some(true) when checked.
    pub checked: Option<bool>,
    pub children: Vec<Block>,
}

/// Represents a GFM table. The header row is kept apart from body rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub alignments: Vec<CellAlignment>,
    pub header: Vec<TableCell>,
    pub rows: Vec<Vec<TableCell>>,
}

/// A single table cell's inline content.
pub type TableCell = Vec<Inline>;

/// Column alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellAlignment {
    None,
    Left,
    Center,
    Right,
}

/// A link-reference definition collected at document level.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub identifier: String,
    pub url: String,
    pub title: Option<String>,
}

/// An inline Markdown node.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emph(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Superscript(Vec<Inline>),
    Code(String),
    Link(Link),
    Image(Image),
    /// A link rewritten to point at a numbered definition.
    LinkReference {
        identifier: String,
        children: Vec<Inline>,
    },
    /// An image rewritten to point at a numbered definition.
    ImageReference {
        identifier: String,
        alt: String,
    },
    SoftBreak,
    HardBreak,
    /// Raw inline HTML, passed through unchanged.
    Html(String),
}

/// Represents an inline link.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub children: Vec<Inline>,
}

/// Represents an inline image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub alt: String,
}

/// Collect the plain text of a sequence of inline nodes.
pub fn inline_text(children: &[Inline]) -> String {
    let mut out = String::new();
    collect_inline_text(children, &mut out);
    out
}

fn collect_inline_text(children: &[Inline], out: &mut String) {
    for inline in children {
        match inline {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Strong(inner)
            | Inline::Emph(inner)
            | Inline::Strikethrough(inner)
            | Inline::Superscript(inner)
            | Inline::LinkReference {
                children: inner, ..
            } => collect_inline_text(inner, out),
            Inline::Link(link) => collect_inline_text(&link.children, out),
            Inline::Image(image) => out.push_str(&image.alt),
            Inline::ImageReference { alt, .. } => out.push_str(alt),
            Inline::SoftBreak | Inline::HardBreak => out.push(' '),
            Inline::Html(_) => {}
        }
    }
}
