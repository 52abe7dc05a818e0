//! Shared configuration loader for the tana toolchain.
//!
//! `defaults/tana.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`TanaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tana_convert::{ChunkerLimits, ConvertOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/tana.default.toml");

/// Top-level configuration consumed by tana applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TanaConfig {
    pub chunking: ChunkingConfig,
    pub detection: DetectionConfig,
    pub paste: PasteConfig,
}

/// Mirrors the transcript chunker's size bounds.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChunkingConfig {
    pub max_size: usize,
    pub min_size: usize,
}

/// Detector thresholds for the transcript dialects.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DetectionConfig {
    pub pendant_min_lines: usize,
    pub app_min_timestamps: usize,
}

/// Output-splitting knobs for the command layer.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PasteConfig {
    pub split_size: usize,
}

impl From<ChunkingConfig> for ChunkerLimits {
    fn from(config: ChunkingConfig) -> Self {
        ChunkerLimits {
            max_size: config.max_size,
            min_size: config.min_size,
        }
    }
}

impl From<&TanaConfig> for ConvertOptions {
    fn from(config: &TanaConfig) -> Self {
        ConvertOptions {
            chunking: config.chunking.into(),
            pendant_min_lines: config.detection.pendant_min_lines,
            app_min_timestamps: config.detection.app_min_timestamps,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TanaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TanaConfig, ConfigError> {
    Loader::new().build()
}
