//! Configuration for rendering GIFT documents.
//!
//! The defaults live in `defaults/gift.default.toml` and are compiled in with
//! `include_str!`. A [`Loader`] starts from them, applies user layers and deserializes
//! the result into [`GiftConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/gift.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GiftConfig {
    pub render: RenderConfig,
}

/// Rendering knobs shared by the CLI and the text formatter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderConfig {
    /// Format used when none is requested explicitly
    pub format: String,
    pub unescape: bool,
    pub labels: LabelConfig,
}

/// Labels printed by the text formatter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelConfig {
    pub correct: String,
    pub incorrect: String,
    pub short_answer: String,
    pub multiple_choice: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            correct: "OK".to_string(),
            incorrect: "ERROR".to_string(),
            short_answer: "short-answer".to_string(),
            multiple_choice: "multiple-choice".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            unescape: false,
            labels: LabelConfig::default(),
        }
    }
}

/// Builds a [`GiftConfig`] from the embedded defaults plus any user layers.
///
/// Later layers win: an explicit `--config` file overrides the defaults, and
/// command-line flags applied through [`Loader::set_override`] override both.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        self
    }

    /// Set one dotted key, e.g. `render.format`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<GiftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with no user layers
pub fn load_defaults() -> Result<GiftConfig, ConfigError> {
    Loader::new().build()
}
