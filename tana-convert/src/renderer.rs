//! TanaRenderer trait definition
//!
//! This module defines the core trait every source-dialect renderer implements.
//! The trait pairs a cheap content fingerprint check with the rendering itself,
//! so the registry can run detection as a priority-ordered chain of total
//! boolean functions - a renderer's `matches` never errors and never panics.

use crate::error::ConvertError;

/// Trait for source dialects
///
/// Implementors turn one flavour of input text into a complete Tana Paste
/// document (header line included). Detection and rendering are separate so
/// the registry can pick a renderer without doing any real work.
///
/// # Examples
///
/// ```ignore
/// struct MyDialect;
///
/// impl TanaRenderer for MyDialect {
///     fn name(&self) -> &str {
///         "my-dialect"
///     }
///
///     fn matches(&self, input: &str) -> bool {
///         input.starts_with("my-fingerprint")
///     }
///
///     fn render(&self, input: &str) -> Result<String, ConvertError> {
///         // Emit %%tana%% plus bullets
///         todo!()
///     }
/// }
/// ```
pub trait TanaRenderer: Send + Sync {
    /// The name of this renderer (e.g., "standard", "pendant")
    fn name(&self) -> &str;

    /// Optional description of this renderer
    fn description(&self) -> &str {
        ""
    }

    /// Whether this renderer claims the given input.
    ///
    /// Must be total: any string returns true or false, never an error.
    /// A fingerprint that fails to apply is simply "does not match".
    fn matches(&self, input: &str) -> bool;

    /// Render the input into a complete Tana Paste document.
    ///
    /// The first output line is always the `%%tana%%` header, exactly once.
    fn render(&self, input: &str) -> Result<String, ConvertError>;
}
