//! Output formats
//!
//!     Every output is a [Format]: a named serializer from classified lines to text. The
//!     [FormatRegistry] holds them by name so the CLI and the loader can pick one at runtime.
//!
//!     Built-in formats:
//!
//!         - html: escaped HTML fragment, one block per line
//!         - json: the parsed lines as JSON
//!         - tag: XML-like tree of the render model, for debugging
//!         - text: plain text excerpt, for thread previews
//!
//!     Formats take the parsed lines rather than the built document because some (json) want
//!     the parse layer and the rest build the document themselves with the given options.

mod html;
mod json;
mod tag;
mod text;

pub use html::{render_html, HtmlFormat};
pub use json::JsonFormat;
pub use tag::{serialize_document, TagFormat};
pub use text::{excerpt, TextFormat};

use crate::ast::ParsedLine;
use crate::error::FormatError;
use crate::options::RenderOptions;
use std::collections::HashMap;

/// Trait for output formats.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Serialize classified lines into this format.
    fn serialize(&self, lines: &[ParsedLine], options: &RenderOptions) -> Result<String, FormatError>;
}

/// Registry of output formats, keyed by name.
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any format of the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize lines using the named format
    pub fn serialize(
        &self,
        lines: &[ParsedLine],
        format: &str,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        self.get(format)?.serialize(lines, options)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormat);
        registry.register(JsonFormat);
        registry.register(TagFormat);
        registry.register(TextFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
