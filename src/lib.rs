//! # richpost
//!
//! Parser and renderer for forum post markup.
//!
//! Post bodies use a small markdown-like syntax: `#` headings (three levels), `>` quotes,
//! `-`/`*`/`•`/`1.` list items, `---` rules, and inline `***bold italic***`, `**bold**`,
//! `*italic*`/`_italic_`, `` `code` ``, `[label](url)`, `@mentions` and `#hashtags`.
//!
//! File Layout
//!
//!     The pipeline runs in three stages, one module each:
//!
//!     src
//!       ├── lexing       Split the body into lines and classify each one
//!       ├── inlines      Cut a line's text into typed segments
//!       ├── building     Group list items, map segments to inline constructs
//!       └── formats      Serialize the result (html, json, tag, text)
//!
//!     The data model for both the parsed lines and the built document lives in [ast].
//!     [settings] loads configuration, [loader] wraps the whole pipeline for a file or string.
//!
//!     Parsing is total: every input produces output, and malformed markup degrades to plain
//!     text. Nothing in the pipeline keeps state between calls.
//!
//! For testing helpers, see the [testing module](testing).

pub mod ast;
pub mod building;
pub mod error;
pub mod formats;
pub mod inlines;
pub mod lexing;
pub mod loader;
pub mod options;
pub mod settings;
pub mod testing;

use ast::{Document, ParsedLine};
use options::{ParseOptions, RenderOptions};

/// Classify every line of a post body, with default options.
pub fn parse(source: &str) -> Vec<ParsedLine> {
    parse_with(source, &ParseOptions::default())
}

pub fn parse_with(source: &str, options: &ParseOptions) -> Vec<ParsedLine> {
    lexing::classify_lines(source, options)
}

/// Parse and build a post body, with default options.
pub fn render(source: &str) -> Document {
    render_with(source, &RenderOptions::default())
}

pub fn render_with(source: &str, options: &RenderOptions) -> Document {
    let lines = parse_with(source, &options.parse);
    building::build_document(&lines, &options.links)
}

/// Render a post body straight to an HTML fragment, with default options.
pub fn to_html(source: &str) -> String {
    let options = RenderOptions::default();
    formats::render_html(&render_with(source, &options), &options.links)
}
