//! Lowering to the HTML tree and final string serialization.

pub mod convert;
pub mod serializer;

pub use convert::to_html_tree;
pub use serializer::serialize_fragment;
