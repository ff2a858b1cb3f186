//! Shared configuration loader for the prosedown toolchain.
//!
//! `defaults/prosedown.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`ProsedownConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use prosedown::PrintStyle;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/prosedown.default.toml");

/// Top-level configuration consumed by prosedown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ProsedownConfig {
    pub style: StyleConfig,
    pub convert: ConvertConfig,
}

/// Mirrors the knobs exposed by the Markdown printer.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    pub bullet: char,
    pub fence: char,
    pub rule_repetition: usize,
    pub increment_ordered: bool,
}

impl From<StyleConfig> for PrintStyle {
    fn from(config: StyleConfig) -> Self {
        PrintStyle {
            bullet: config.bullet,
            fence: config.fence,
            rule_repetition: config.rule_repetition,
            increment_ordered: config.increment_ordered,
        }
    }
}

impl From<&StyleConfig> for PrintStyle {
    fn from(config: &StyleConfig) -> Self {
        PrintStyle {
            bullet: config.bullet,
            fence: config.fence,
            rule_repetition: config.rule_repetition,
            increment_ordered: config.increment_ordered,
        }
    }
}

/// Conversion behavior of the command-line front end.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub pretty_json: bool,
    pub warn_on_gaps: bool,
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
    pub fn build(self) -> Result<ProsedownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ProsedownConfig, ConfigError> {
    Loader::new().build()
}
