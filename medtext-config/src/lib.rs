//! Shared configuration loader for the medtext tools.
//!
//! `defaults/medtext.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MedtextConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use medtext::builder::BuilderOptions;
use medtext::formats::html::BodyStyle;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/medtext.default.toml");

/// Top-level configuration consumed by medtext applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MedtextConfig {
    pub document: DocumentConfig,
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Target document settings shared by the builder and validation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DocumentConfig {
    pub line_length: usize,
    pub supports_local_escape_codes: bool,
}

impl From<DocumentConfig> for BuilderOptions {
    fn from(config: DocumentConfig) -> Self {
        BuilderOptions {
            line_length: config.line_length,
            supports_local_escape_codes: config.supports_local_escape_codes,
        }
    }
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub style: HtmlStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HtmlStyle {
    #[serde(rename = "fixed")]
    Fixed,
    #[serde(rename = "proportional")]
    Proportional,
}

impl From<HtmlStyle> for BodyStyle {
    fn from(style: HtmlStyle) -> Self {
        match style {
            HtmlStyle::Fixed => BodyStyle::Fixed,
            HtmlStyle::Proportional => BodyStyle::Proportional,
        }
    }
}

/// Controls node inspection output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub show_index: bool,
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
    pub fn build(self) -> Result<MedtextConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MedtextConfig, ConfigError> {
    Loader::new().build()
}
