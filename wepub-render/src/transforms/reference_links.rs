//! Inline-to-reference link conversion.
//!
//! The paste target strips `href` attributes, so inline links and
//! images are rewritten into reference form with a numbered `[n]`
//! superscript marker, and a "References" appendix listing every
//! collected destination is appended to the document.

use std::collections::{HashMap, HashSet};

use crate::mdast::{
    inline_text, Block, Definition, Document, Heading, Inline, List, ListItem,
};

/// Links into the publishing platform itself survive pasting, so they
/// keep their inline form.
const PLATFORM_EXEMPT_PREFIX: &str = "https://mp.weixin.qq.com";

struct Collector {
    /// (url, title) to identifier, so repeated destinations share one
    /// reference number.
    by_destination: HashMap<(String, Option<String>), String>,
    /// Reference number per identifier, in first-seen order.
    numbers: HashMap<String, u32>,
    /// Identifiers already claimed, including author-written ones.
    taken: HashSet<String>,
    /// Every numbered definition, author-written ones included, in the
    /// order the appendix lists them.
    display: Vec<Definition>,
    /// Definitions created by this pass, appended to the document.
    created: Vec<Definition>,
    next_number: u32,
}

impl Collector {
    fn new(doc: &Document) -> Self {
        let mut collector = Collector {
            by_destination: HashMap::new(),
            numbers: HashMap::new(),
            taken: HashSet::new(),
            display: Vec::new(),
            created: Vec::new(),
            next_number: 0,
        };
        for block in &doc.children {
            if let Block::Definition(def) = block {
                collector.taken.insert(def.identifier.clone());
                collector.next_number += 1;
                collector
                    .numbers
                    .insert(def.identifier.clone(), collector.next_number);
                collector.by_destination.insert(
                    (def.url.clone(), def.title.clone()),
                    def.identifier.clone(),
                );
                collector.display.push(def.clone());
            }
        }
        collector
    }

    /// Returns the identifier and number for a destination, minting a
    /// new definition when the destination is unseen.
    fn reference(&mut self, url: &str, title: &Option<String>) -> (String, u32) {
        let key = (url.to_string(), title.clone());
        if let Some(identifier) = self.by_destination.get(&key) {
            return (identifier.clone(), self.numbers[identifier]);
        }
        let mut candidate = 0u32;
        let identifier = loop {
            candidate += 1;
            let id = candidate.to_string();
            if !self.taken.contains(&id) {
                break id;
            }
        };
        self.next_number += 1;
        self.taken.insert(identifier.clone());
        self.numbers.insert(identifier.clone(), self.next_number);
        self.by_destination.insert(key, identifier.clone());
        let definition = Definition {
            identifier: identifier.clone(),
            url: url.to_string(),
            title: title.clone(),
        };
        self.display.push(definition.clone());
        self.created.push(definition);
        (identifier, self.next_number)
    }
}

/// Rewrites inline links and images into reference form and appends the
/// definition list plus a rendered appendix.
pub fn convert_reference_links(doc: &mut Document) {
    let mut collector = Collector::new(doc);
    convert_blocks(&mut doc.children, &mut collector);
    if collector.display.is_empty() {
        return;
    }
    let mut entries: Vec<&Definition> = collector.display.iter().collect();
    entries.sort_by_key(|def| collector.numbers[&def.identifier]);
    let appendix = appendix_blocks(&entries);
    for def in &collector.created {
        doc.children.push(Block::Definition(def.clone()));
    }
    doc.children.extend(appendix);
}

fn convert_blocks(blocks: &mut [Block], collector: &mut Collector) {
    for block in blocks {
        match block {
            Block::Paragraph(inlines) => convert_inlines(inlines, collector),
            Block::Heading(heading) => convert_inlines(&mut heading.children, collector),
            Block::BlockQuote(children) => convert_blocks(children, collector),
            Block::List(list) => {
                for item in &mut list.items {
                    convert_blocks(&mut item.children, collector);
                }
            }
            Block::Table(table) => {
                for cell in table.header.iter_mut().chain(table.rows.iter_mut().flatten()) {
                    convert_inlines(cell, collector);
                }
            }
            _ => {}
        }
    }
}

fn convert_inlines(inlines: &mut Vec<Inline>, collector: &mut Collector) {
    for inline in inlines {
        match inline {
            Inline::Link(link) => {
                if link.url.starts_with(PLATFORM_EXEMPT_PREFIX)
                    || is_self_referential(&link.children, &link.url)
                {
                    convert_inlines(&mut link.children, collector);
                    continue;
                }
                let (identifier, number) = collector.reference(&link.url, &link.title);
                let mut children = std::mem::take(&mut link.children);
                children.push(Inline::Superscript(vec![Inline::Text(format!(
                    "[{number}]"
                ))]));
                *inline = Inline::LinkReference {
                    identifier,
                    children,
                };
            }
            Inline::Image(image) => {
                if image.url.starts_with(PLATFORM_EXEMPT_PREFIX) {
                    continue;
                }
                let (identifier, _) = collector.reference(&image.url, &image.title);
                *inline = Inline::ImageReference {
                    identifier,
                    alt: image.alt.clone(),
                };
            }
            Inline::Strong(children)
            | Inline::Emph(children)
            | Inline::Strikethrough(children)
            | Inline::Superscript(children) => convert_inlines(children, collector),
            _ => {}
        }
    }
}

/// A link whose visible text is its own destination carries no extra
/// information, so it stays inline. Scheme, `www.` prefix and trailing
/// slash are ignored for the comparison.
fn is_self_referential(children: &[Inline], url: &str) -> bool {
    let text = inline_text(children);
    text == url || normalize_url(&text) == normalize_url(url)
}

fn normalize_url(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.trim_end_matches('/').to_string()
}

fn appendix_blocks(entries: &[&Definition]) -> Vec<Block> {
    let items = entries
        .iter()
        .map(|def| {
            let label = match &def.title {
                Some(title) if !title.is_empty() => format!("{} ({})", title, def.url),
                _ => def.url.clone(),
            };
            ListItem {
                checked: None,
                children: vec![Block::Paragraph(vec![Inline::Link(crate::mdast::Link {
                    url: def.url.clone(),
                    title: None,
                    children: vec![Inline::Text(label)],
                })])],
            }
        })
        .collect();
    vec![
        Block::ThematicBreak,
        Block::Heading(Heading {
            depth: 2,
            children: vec![Inline::Text("References".to_string())],
        }),
        Block::List(List {
            ordered: true,
            start: 1,
            tight: true,
            items,
        }),
    ]
}
