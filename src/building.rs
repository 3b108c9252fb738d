//! Document building
//!
//!     Turns the flat sequence of classified lines into the render model. Two things happen
//!     here and nothing else:
//!
//!         1. Block mapping and grouping: each line kind maps to a block, empty lines are
//!            dropped, and consecutive list item lines collapse into one list.
//!         2. Inline mapping: each segment maps to an inline construct through a stateless
//!            lookup. Links get an internal/external/unsafe target, mentions and hashtags get
//!            hrefs from the configured templates.
//!
//!     See [blocks](blocks) and [inline](inline).

mod blocks;
mod inline;

pub use blocks::build_document;
pub use inline::{build_inline, classify_link};
