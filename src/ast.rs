//! Data model for parsed post content
//!
//!     Two layers live here. The parse layer ([ParsedLine], [ParsedSegment]) is what the line
//!     classifier and the segment tokenizer produce: flat, one entry per source line, with the
//!     inline runs typed but not yet interpreted. The render layer ([Document], [Block],
//!     [Inline]) is what the builder produces from it: list items grouped, links classified,
//!     mentions and hashtags resolved to hrefs.
//!
//!     Both layers are ephemeral. They are rebuilt on every parse call from the content string
//!     and have no identity beyond it.

mod block;
mod line;
mod segment;

pub use block::{Block, Document, Inline, LinkTarget};
pub use line::{LineKind, ParsedLine};
pub use segment::{ParsedSegment, SegmentKind};
