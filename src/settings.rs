//! Configuration loading
//!
//! `defaults/richpost.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults
//! via [`Loader`] before deserializing into [`RichpostConfig`].

use crate::options::{LinkOptions, ParseOptions, RenderOptions};
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use ::config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/richpost.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RichpostConfig {
    pub parsing: ParsingConfig,
    pub links: LinksConfig,
    pub excerpt: ExcerptConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParsingConfig {
    pub fenced_code_blocks: bool,
}

/// Href templates and external link attributes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinksConfig {
    pub profile_path: String,
    pub tag_path: String,
    #[serde(default)]
    pub internal_hosts: Vec<String>,
    pub external_rel: String,
    pub external_new_tab: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExcerptConfig {
    pub max_chars: usize,
}

impl RichpostConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            parse: ParseOptions {
                fenced_code_blocks: self.parsing.fenced_code_blocks,
            },
            links: LinkOptions {
                profile_path: self.links.profile_path.clone(),
                tag_path: self.links.tag_path.clone(),
                internal_hosts: self.links.internal_hosts.clone(),
                external_rel: self.links.external_rel.clone(),
                external_new_tab: self.links.external_new_tab,
            },
            excerpt_max_chars: self.excerpt.max_chars,
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
        log::info!("layering config file {}", path.as_ref().display());
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a site-local `richpost.toml` that may or may not exist.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            log::info!("layering config file {}", path.display());
        } else {
            log::debug!("no config file at {}, skipping", path.display());
        }
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
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
    pub fn build(self) -> Result<RichpostConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RichpostConfig, ConfigError> {
    Loader::new().build()
}
