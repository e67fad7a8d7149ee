//! Markdown front-end (Markdown text → Markdown IR)

pub mod parser;

pub use parser::{extract_frontmatter, parse_markdown};
