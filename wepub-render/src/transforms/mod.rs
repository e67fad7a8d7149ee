//! Structural tree-rewriting stages.
//!
//! Each stage is a pure in-place rewrite of the tree it owns: the
//! Markdown IR for numbering, line breaks and reference links; the HTML
//! tree for image wrapping. Stage ordering is fixed by the pipeline
//! orchestrator.

pub mod images;
pub mod line_breaks;
pub mod numbering;
pub mod reference_links;

pub use images::transform_images;
pub use line_breaks::force_line_breaks;
pub use numbering::number_headings;
pub use reference_links::convert_reference_links;
