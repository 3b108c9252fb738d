//! Line classification
//!
//!     Post bodies are split on line breaks and every line is classified on its own, with no
//!     state carried from one line to the next: empty, horizontal rule, heading, quote, list
//!     item or paragraph, first match wins. The text left after the block prefix is handed to
//!     the inline parser.
//!
//!     The one exception is fenced code, which spans lines by nature. It is opt-in through
//!     [ParseOptions::fenced_code_blocks] and lives in its own stateful pass, see
//!     [fences](fences).
//!
//! [ParseOptions::fenced_code_blocks]: crate::options::ParseOptions::fenced_code_blocks

pub mod fences;
mod line_classification;

pub use line_classification::classify_line;

use crate::ast::ParsedLine;
use crate::options::ParseOptions;
use fences::FenceGrouper;

/// Classify every line of `source`.
pub fn classify_lines(source: &str, options: &ParseOptions) -> Vec<ParsedLine> {
    if !options.fenced_code_blocks {
        return source.lines().map(classify_line).collect();
    }

    let mut grouper = FenceGrouper::new();
    let mut lines = Vec::new();
    for raw in source.lines() {
        lines.extend(grouper.process_line(raw));
    }
    lines.extend(grouper.flush());
    lines
}
