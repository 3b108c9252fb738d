//! Inline parsing
//!
//!     A line of post text (with its block prefix already stripped by the classifier) is cut
//!     into an ordered, gap-free sequence of [ParsedSegment]s: bold-italic, bold, italic,
//!     inline code, links, mentions, hashtags and the plain text between them.
//!
//!     Parsing is flat. Every pattern is run over the whole line independently, then the
//!     overlaps are resolved in one place: earliest start wins, and at the same start the
//!     longest match wins. Running the patterns globally keeps one pattern from corrupting the
//!     offsets of another, which sequential substitution would do on input such as
//!     `**bold with *nested* text**`.
//!
//!     Link labels are not parsed again for nested formatting.
//!
//!     Mention and hashtag names are `\w+` in the regex crate's Unicode sense, so `@josé` and
//!     `#pokémon` are whole names.
//!
//!     See [parser](parser) for the resolution walk and [patterns](patterns) for the pattern
//!     table.
//!
//! [ParsedSegment]: crate::ast::ParsedSegment

mod parser;
mod patterns;

pub use parser::parse_segments;
