//! Content loading
//!
//! [ContentLoader] holds a post body (from a string or a file) together with the render
//! options to apply, and exposes each stage of the pipeline: classified lines, the built
//! document, or serialized output in any registered format.

use crate::ast::{Document, ParsedLine};
use crate::building::build_document;
use crate::error::{FormatError, LoadError};
use crate::formats::FormatRegistry;
use crate::lexing::classify_lines;
use crate::options::RenderOptions;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ContentLoader {
    source: String,
    options: RenderOptions,
}

impl ContentLoader {
    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            options: RenderOptions::default(),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        log::debug!("reading content from {}", path.display());
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_string(source))
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn lines(&self) -> Vec<ParsedLine> {
        classify_lines(&self.source, &self.options.parse)
    }

    pub fn document(&self) -> Document {
        build_document(&self.lines(), &self.options.links)
    }

    /// Serialize with one of the built-in formats.
    pub fn serialize(&self, format: &str) -> Result<String, LoadError> {
        Ok(self.serialize_with(&FormatRegistry::with_defaults(), format)?)
    }

    pub fn serialize_with(
        &self,
        registry: &FormatRegistry,
        format: &str,
    ) -> Result<String, FormatError> {
        registry.serialize(&self.lines(), format, &self.options)
    }
}
