//! Configuration loading
//!
//! `defaults/markstyle.default.toml` is embedded into the library so that the
//! documented defaults and runtime behavior stay in sync. Callers layer their own
//! files and overrides on top via [`Loader`] before deserializing into
//! [`MarkstyleConfig`].

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/markstyle.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkstyleConfig {
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

/// How strictly stylesheets are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub require_semicolon: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default processing spec, e.g. `ast-css`.
    pub format: String,
    pub indent: String,
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

    /// Apply a single key/value override, e.g. from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MarkstyleConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkstyleConfig, ConfigError> {
    Loader::new().build()
}
