//! Auto-numbering for h2/h3/h4 headings.
//!
//! The prefix is prepended as an extra text node, so existing heading
//! content and inline formatting is left untouched. h1 headings are
//! intentionally exempt: documents use a single h1 as the article title.

use crate::mdast::{Block, Document, Heading, Inline};
use crate::settings::{NUMBERING_CHINESE_DOT, NUMBERING_NUMBER_DOT};

/// Tracks the hierarchical counters across the document. A fresh h2
/// resets its h3 counter, a fresh h3 resets its h4 counter.
struct Counters {
    h2: u32,
    h3: u32,
    h4: u32,
}

/// Prepends hierarchical number prefixes to h2-h4 headings.
///
/// `style` selects the prefix scheme; an empty or unknown style leaves
/// the document unchanged. Running the stage twice produces double
/// prefixes, which is why the pipeline never re-enters it.
pub fn number_headings(doc: &mut Document, style: &str) {
    if style != NUMBERING_NUMBER_DOT && style != NUMBERING_CHINESE_DOT {
        return;
    }
    let mut counters = Counters { h2: 0, h3: 0, h4: 0 };
    number_blocks(&mut doc.children, style, &mut counters);
}

fn number_blocks(blocks: &mut [Block], style: &str, counters: &mut Counters) {
    for block in blocks {
        match block {
            Block::Heading(heading) => number_heading(heading, style, counters),
            Block::BlockQuote(children) => number_blocks(children, style, counters),
            Block::List(list) => {
                for item in &mut list.items {
                    number_blocks(&mut item.children, style, counters);
                }
            }
            _ => {}
        }
    }
}

fn number_heading(heading: &mut Heading, style: &str, counters: &mut Counters) {
    let prefix = match heading.depth {
        2 => {
            counters.h2 += 1;
            counters.h3 = 0;
            counters.h4 = 0;
            if style == NUMBERING_CHINESE_DOT {
                format!("{}\u{3001}", chinese_numeral(counters.h2))
            } else {
                format!("{}. ", counters.h2)
            }
        }
        3 => {
            counters.h3 += 1;
            counters.h4 = 0;
            format!("{}.{} ", counters.h2, counters.h3)
        }
        4 => {
            counters.h4 += 1;
            format!("{}.{}.{} ", counters.h2, counters.h3, counters.h4)
        }
        _ => return,
    };
    heading.children.insert(0, Inline::Text(prefix));
}

/// Renders a counter value as a CJK numeral below 100, composing the
/// ones and tens digits. Values of 100 and above fall back to Arabic
/// digits.
fn chinese_numeral(n: u32) -> String {
    const ONES: [&str; 10] = [
        "\u{96f6}", "\u{4e00}", "\u{4e8c}", "\u{4e09}", "\u{56db}", "\u{4e94}", "\u{516d}",
        "\u{4e03}", "\u{516b}", "\u{4e5d}",
    ];
    if n >= 100 {
        return n.to_string();
    }
    if n < 10 {
        return ONES[n as usize].to_string();
    }
    let tens = n / 10;
    let ones = n % 10;
    let mut out = String::new();
    if tens > 1 {
        out.push_str(ONES[tens as usize]);
    }
    out.push('\u{5341}');
    if ones > 0 {
        out.push_str(ONES[ones as usize]);
    }
    out
}
