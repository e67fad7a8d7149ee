//! Error types for rendering operations

use std::fmt;

/// Errors that can occur while converting a document
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Error during Markdown parsing
    ParseError(String),
    /// Error during HTML serialization
    SerializationError(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            RenderError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}
