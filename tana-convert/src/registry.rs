//! Renderer registry for dialect discovery and selection
//!
//! This module provides a centralized registry for all available renderers.
//! Renderers can be registered, retrieved by name, or selected by sniffing
//! the input. Registration order is detection order: the first renderer
//! whose `matches` accepts the input wins, and the standard renderer is
//! registered last as the catch-all.

use crate::error::ConvertError;
use crate::renderer::TanaRenderer;
use crate::ConvertOptions;

/// Registry of output renderers
///
/// # Examples
///
/// ```ignore
/// let registry = RendererRegistry::with_defaults();
/// let renderer = registry.detect("# Notes\n- item").unwrap();
/// assert_eq!(renderer.name(), "standard");
/// ```
pub struct RendererRegistry {
    renderers: Vec<Box<dyn TanaRenderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RendererRegistry {
            renderers: Vec::new(),
        }
    }

    /// Register a renderer at the end of the detection order
    ///
    /// If a renderer with the same name already exists, it is replaced in
    /// place, keeping its position in the detection order.
    pub fn register<R: TanaRenderer + 'static>(&mut self, renderer: R) {
        match self
            .renderers
            .iter()
            .position(|r| r.name() == renderer.name())
        {
            Some(i) => self.renderers[i] = Box::new(renderer),
            None => self.renderers.push(Box::new(renderer)),
        }
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Result<&dyn TanaRenderer, ConvertError> {
        self.renderers
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.as_ref())
            .ok_or_else(|| ConvertError::RendererNotFound(name.to_string()))
    }

    /// Check if a renderer exists
    pub fn has(&self, name: &str) -> bool {
        self.renderers.iter().any(|r| r.name() == name)
    }

    /// List all renderer names in detection order
    pub fn list_renderers(&self) -> Vec<String> {
        self.renderers.iter().map(|r| r.name().to_string()).collect()
    }

    /// Select the first renderer whose detector accepts the input
    pub fn detect(&self, input: &str) -> Option<&dyn TanaRenderer> {
        self.renderers
            .iter()
            .find(|r| r.matches(input))
            .map(|r| r.as_ref())
    }

    /// Detect the input's dialect and render it
    pub fn convert(&self, input: &str) -> Result<String, ConvertError> {
        let renderer = self.detect(input).ok_or_else(|| {
            ConvertError::RendererNotFound("no renderer matched the input".to_string())
        })?;
        renderer.render(input)
    }

    /// Create a registry with the built-in renderers in detection order
    pub fn with_defaults() -> Self {
        Self::with_options(&ConvertOptions::default())
    }

    /// Create a registry with the built-in renderers, tuned by `options`
    pub fn with_options(options: &ConvertOptions) -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::pendant::PendantRenderer::new(options));
        registry.register(crate::formats::app::AppRenderer::new(options));
        registry.register(crate::formats::youtube::YoutubeRenderer::new(options));
        registry.register(crate::formats::standard::StandardRenderer);

        registry
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
