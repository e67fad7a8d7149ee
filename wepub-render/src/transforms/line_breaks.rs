//! Soft-to-hard line break promotion.
//!
//! Paste targets that strip CSS also ignore source newlines inside
//! paragraphs, so authors who rely on single newlines for layout can
//! opt into promoting every soft break to an explicit `<br>`.

use crate::mdast::{Block, Document, Inline};

/// Replaces every soft break in the document with a hard break.
pub fn force_line_breaks(doc: &mut Document) {
    visit_blocks(&mut doc.children);
}

fn visit_blocks(blocks: &mut [Block]) {
    for block in blocks {
        match block {
            Block::Paragraph(inlines) => visit_inlines(inlines),
            Block::Heading(heading) => visit_inlines(&mut heading.children),
            Block::BlockQuote(children) => visit_blocks(children),
            Block::List(list) => {
                for item in &mut list.items {
                    visit_blocks(&mut item.children);
                }
            }
            Block::Table(table) => {
                for cell in table.header.iter_mut().chain(table.rows.iter_mut().flatten()) {
                    visit_inlines(cell);
                }
            }
            _ => {}
        }
    }
}

fn visit_inlines(inlines: &mut [Inline]) {
    for inline in inlines {
        match inline {
            Inline::SoftBreak => *inline = Inline::HardBreak,
            Inline::Strong(children)
            | Inline::Emph(children)
            | Inline::Strikethrough(children)
            | Inline::Superscript(children) => visit_inlines(children),
            Inline::Link(link) => visit_inlines(&mut link.children),
            Inline::LinkReference { children, .. } => visit_inlines(children),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_breaks_become_hard_breaks() {
        let mut doc = Document {
            children: vec![Block::Paragraph(vec![
                Inline::Text("one".to_string()),
                Inline::SoftBreak,
                Inline::Text("two".to_string()),
            ])],
        };
        force_line_breaks(&mut doc);
        let Block::Paragraph(inlines) = &doc.children[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(inlines[1], Inline::HardBreak);
    }

    #[test]
    fn nested_emphasis_is_visited() {
        let mut doc = Document {
            children: vec![Block::Paragraph(vec![Inline::Emph(vec![
                Inline::Text("a".to_string()),
                Inline::SoftBreak,
                Inline::Text("b".to_string()),
            ])])],
        };
        force_line_breaks(&mut doc);
        let Block::Paragraph(inlines) = &doc.children[0] else {
            panic!("expected paragraph");
        };
        let Inline::Emph(children) = &inlines[0] else {
            panic!("expected emphasis");
        };
        assert_eq!(children[1], Inline::HardBreak);
    }

    #[test]
    fn existing_hard_breaks_are_preserved() {
        let mut doc = Document {
            children: vec![Block::Paragraph(vec![
                Inline::Text("one".to_string()),
                Inline::HardBreak,
                Inline::Text("two".to_string()),
            ])],
        };
        force_line_breaks(&mut doc);
        let Block::Paragraph(inlines) = &doc.children[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(inlines[1], Inline::HardBreak);
    }
}
