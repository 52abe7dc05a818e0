//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while converting text to Tana Paste
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Input was rejected before processing (oversized, not convertible)
    InvalidInput(String),
    /// Renderer not found in registry
    RendererNotFound(String),
    /// Parent assignment violated an invariant (a programming error, surfaced loudly)
    Hierarchy(String),
    /// Chunk boundaries could not be computed (bad caller parameters)
    Chunking(String),
    /// A renderer could not produce output for well-formed input
    Render(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            ConvertError::RendererNotFound(name) => write!(f, "Renderer '{name}' not found"),
            ConvertError::Hierarchy(msg) => write!(f, "Hierarchy error: {msg}"),
            ConvertError::Chunking(msg) => write!(f, "Chunking error: {msg}"),
            ConvertError::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
