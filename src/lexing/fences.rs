//! Fenced code grouping
//!
//! A stateful pass in front of the line classifier. Lines between a ```` ``` ```` opener and a
//! bare ```` ``` ```` closer are buffered and emitted as one code block line; every other line
//! goes straight to [classify_line].
use super::classify_line;
use crate::ast::{LineKind, ParsedLine, ParsedSegment, SegmentKind};

const FENCE: &str = "```";

struct OpenFence {
    opener: String,
    language: Option<String>,
    body: Vec<String>,
}

/// Groups fenced code into [LineKind::CodeBlock] lines.
pub struct FenceGrouper {
    open: Option<OpenFence>,
}

impl FenceGrouper {
    pub fn new() -> Self {
        Self { open: None }
    }

    /// Processes one raw line.
    ///
    /// Returns the lines that are complete after it: empty while inside a fence, the single
    /// code block line when the fence closes, or the classified line otherwise.
    pub fn process_line(&mut self, raw: &str) -> Vec<ParsedLine> {
        let trimmed = raw.trim();
        match self.open.take() {
            None => {
                // An info string with a backtick is an inline span such as ```x```, not a fence.
                if let Some(info) = trimmed
                    .strip_prefix(FENCE)
                    .map(str::trim)
                    .filter(|info| !info.contains('`'))
                {
                    self.open = Some(OpenFence {
                        opener: raw.to_string(),
                        language: (!info.is_empty()).then(|| info.to_string()),
                        body: Vec::new(),
                    });
                    Vec::new()
                } else {
                    vec![classify_line(raw)]
                }
            }
            Some(fence) if trimmed == FENCE => {
                log::trace!("closed code fence after {} lines", fence.body.len());
                let code = ParsedSegment::new(SegmentKind::Code, fence.body.join("\n"));
                vec![ParsedLine::new(LineKind::CodeBlock, vec![code]).with_language(fence.language)]
            }
            Some(mut fence) => {
                fence.body.push(raw.to_string());
                self.open = Some(fence);
                Vec::new()
            }
        }
    }

    /// Flushes a fence left open at end of input.
    ///
    /// An unclosed fence is not code: the buffered lines are classified as ordinary lines.
    pub fn flush(&mut self) -> Vec<ParsedLine> {
        match self.open.take() {
            Some(fence) => std::iter::once(fence.opener.as_str())
                .chain(fence.body.iter().map(String::as_str))
                .map(classify_line)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for FenceGrouper {
    fn default() -> Self {
        Self::new()
    }
}
