//! wepub-render: Markdown → inline-styled HTML for paste-only targets.
//!
//! Publishing platforms such as WeChat public accounts strip external
//! stylesheets, classes and most attributes on paste, keeping only
//! inline `style`. This crate renders Markdown into a single
//! self-contained HTML fragment with every style inlined from a
//! CSS-like theme.
//!
//! Pipeline: Markdown text → Markdown tree → structural rewrites
//! (reference links, forced line breaks, heading numbering) → HTML
//! tree → image normalization → style resolution → serialized
//! fragment.
//!
//! # Example
//!
//! ```no_run
//! use wepub_render::{parse_theme, render, Settings};
//!
//! let theme = parse_theme("h2 { color: #07c160; } p { line-height: 1.75; }");
//! let html = render("## Hello\n\nWorld.", &theme, &Settings::default()).unwrap();
//! assert!(html.starts_with("<section"));
//! ```

pub mod error;
pub mod hast;
pub mod html;
pub mod markdown;
pub mod mdast;
pub mod pipeline;
pub mod settings;
pub mod style;
pub mod theme;
pub mod transforms;

pub use error::RenderError;
pub use markdown::extract_frontmatter;
pub use pipeline::render;
pub use settings::{Settings, NUMBERING_CHINESE_DOT, NUMBERING_NUMBER_DOT};
pub use theme::{parse_theme, parse_theme_metadata, Theme, ThemeMetadata, ThemeStyles};
