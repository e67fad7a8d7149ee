//! Markdown parsing (Markdown text → Markdown IR)
//!
//! Converts CommonMark + GFM Markdown to the owned IR tree.
//! Pipeline: Markdown string → Comrak AST → IR

use crate::error::RenderError;
use crate::mdast::{
    Block, CellAlignment, CodeBlock, Definition, Document, Heading, Image, Inline, Link, List,
    ListItem, Table, TableCell,
};
use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, ComrakOptions};
use once_cell::sync::Lazy;
use regex::Regex;

static YAML_FRONTMATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---[ \t]*\n(.*?)\n---[ \t]*\n").expect("valid yaml pattern"));

static TOML_FRONTMATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A\+\+\+[ \t]*\n(.*?)\n\+\+\+[ \t]*\n").expect("valid toml pattern")
});

/// Parse a Markdown string into the IR document.
pub fn parse_markdown(source: &str) -> Result<Document, RenderError> {
    let arena = Arena::new();
    let options = default_comrak_options(source);
    let root = parse_document(&arena, source, &options);

    let mut children = Vec::new();
    for child in root.children() {
        collect_block(child, &mut children)?;
    }

    Ok(Document { children })
}

/// Extract the inner text of a leading YAML (`---`) or TOML (`+++`)
/// front-matter block, for informational display only. This never
/// affects parsing; the parser suppresses front matter on its own.
pub fn extract_frontmatter(source: &str) -> Option<String> {
    if let Some(captures) = YAML_FRONTMATTER.captures(source) {
        return Some(captures[1].to_string());
    }
    if let Some(captures) = TOML_FRONTMATTER.captures(source) {
        return Some(captures[1].to_string());
    }
    None
}

fn default_comrak_options(source: &str) -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    // Comrak takes a single delimiter; pick it from the document head so
    // both YAML and TOML blocks are suppressed from the body.
    let delimiter = if source.starts_with("+++") { "+++" } else { "---" };
    options.extension.front_matter_delimiter = Some(delimiter.to_string());
    options
}

fn collect_block<'a>(node: &'a AstNode<'a>, blocks: &mut Vec<Block>) -> Result<(), RenderError> {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::FrontMatter(content) => {
            blocks.push(Block::FrontMatter(content.clone()));
        }

        NodeValue::Heading(heading) => {
            blocks.push(Block::Heading(Heading {
                depth: heading.level,
                children: collect_inlines(node)?,
            }));
        }

        NodeValue::Paragraph => {
            blocks.push(Block::Paragraph(collect_inlines(node)?));
        }

        NodeValue::CodeBlock(code_block) => {
            let language = code_block
                .info
                .split_whitespace()
                .next()
                .map(str::to_string);
            blocks.push(Block::CodeBlock(CodeBlock {
                language,
                literal: code_block.literal.clone(),
            }));
        }

        NodeValue::BlockQuote => {
            let mut children = Vec::new();
            for child in node.children() {
                collect_block(child, &mut children)?;
            }
            blocks.push(Block::BlockQuote(children));
        }

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            let mut items = Vec::new();
            for item in node.children() {
                items.push(collect_list_item(item)?);
            }
            blocks.push(Block::List(List {
                ordered,
                start: list.start as u32,
                tight: list.tight,
                items,
            }));
        }

        NodeValue::Table(table) => {
            blocks.push(collect_table(node, &table.alignments)?);
        }

        NodeValue::ThematicBreak => {
            blocks.push(Block::ThematicBreak);
        }

        NodeValue::HtmlBlock(html) => {
            blocks.push(Block::HtmlBlock(html.literal.clone()));
        }

        _ => {
            // Unknown block type, skip
        }
    }

    Ok(())
}

fn collect_list_item<'a>(node: &'a AstNode<'a>) -> Result<ListItem, RenderError> {
    let checked = match &node.data.borrow().value {
        NodeValue::TaskItem(symbol) => Some(symbol.is_some()),
        _ => None,
    };

    let mut children = Vec::new();
    for child in node.children() {
        collect_block(child, &mut children)?;
    }

    Ok(ListItem { checked, children })
}

fn collect_table<'a>(
    node: &'a AstNode<'a>,
    alignments: &[TableAlignment],
) -> Result<Block, RenderError> {
    let alignments = alignments
        .iter()
        .map(|alignment| match alignment {
            TableAlignment::None => CellAlignment::None,
            TableAlignment::Left => CellAlignment::Left,
            TableAlignment::Center => CellAlignment::Center,
            TableAlignment::Right => CellAlignment::Right,
        })
        .collect();

    let mut header = Vec::new();
    let mut rows = Vec::new();

    for row in node.children() {
        let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        let mut cells: Vec<TableCell> = Vec::new();
        for cell in row.children() {
            cells.push(collect_inlines(cell)?);
        }
        if is_header {
            header = cells;
        } else {
            rows.push(cells);
        }
    }

    Ok(Block::Table(Table {
        alignments,
        header,
        rows,
    }))
}

/// Collect the inline children of a container node.
fn collect_inlines<'a>(node: &'a AstNode<'a>) -> Result<Vec<Inline>, RenderError> {
    let mut inlines = Vec::new();
    for child in node.children() {
        collect_inline(child, &mut inlines)?;
    }
    Ok(inlines)
}

fn collect_inline<'a>(node: &'a AstNode<'a>, inlines: &mut Vec<Inline>) -> Result<(), RenderError> {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Text(text) => inlines.push(Inline::Text(text.clone())),

        NodeValue::Strong => inlines.push(Inline::Strong(collect_inlines(node)?)),

        NodeValue::Emph => inlines.push(Inline::Emph(collect_inlines(node)?)),

        NodeValue::Strikethrough => inlines.push(Inline::Strikethrough(collect_inlines(node)?)),

        NodeValue::Superscript => inlines.push(Inline::Superscript(collect_inlines(node)?)),

        NodeValue::Code(code) => inlines.push(Inline::Code(code.literal.clone())),

        NodeValue::Link(link) => inlines.push(Inline::Link(Link {
            url: link.url.clone(),
            title: non_empty(&link.title),
            children: collect_inlines(node)?,
        })),

        NodeValue::Image(image) => {
            let alt = collect_text(node);
            inlines.push(Inline::Image(Image {
                url: image.url.clone(),
                title: non_empty(&image.title),
                alt,
            }));
        }

        NodeValue::SoftBreak => inlines.push(Inline::SoftBreak),

        NodeValue::LineBreak => inlines.push(Inline::HardBreak),

        NodeValue::HtmlInline(html) => inlines.push(Inline::Html(html.clone())),

        _ => {
            // Skip unknown inline types
        }
    }

    Ok(())
}

/// Collect the plain-text content of a node (for image alt text).
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text_into(node, &mut text);
    text
}

fn collect_text_into<'a>(node: &'a AstNode<'a>, output: &mut String) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => output.push_str(text),
            NodeValue::Code(code) => output.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
            _ => collect_text_into(child, output),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
