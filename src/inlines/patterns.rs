//! Inline pattern table
//!
//! Each entry pairs a regex with the segment kind it yields and a precedence rank. The rank
//! only breaks ties between matches that start at the same offset and have the same length;
//! position and length decide everything else.

use crate::ast::{ParsedSegment, SegmentKind};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A pattern match waiting for overlap resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Candidate {
    pub start: usize,
    pub end: usize,
    pub precedence: usize,
    pub segment: ParsedSegment,
}

impl Candidate {
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Context checks the regex crate cannot express without lookaround.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guard {
    None,
    /// `*text*`: no `*` touching either delimiter from outside, no whitespace just inside.
    LoneStar,
    /// `_text_`: no word character touching either delimiter from outside.
    WordBoundary,
}

impl Guard {
    fn accepts(self, line: &str, start: usize, end: usize, inner: &str) -> bool {
        let before = line[..start].chars().next_back();
        let after = line[end..].chars().next();
        match self {
            Guard::None => true,
            Guard::LoneStar => {
                before != Some('*')
                    && after != Some('*')
                    && !inner.starts_with(char::is_whitespace)
                    && !inner.ends_with(char::is_whitespace)
            }
            Guard::WordBoundary => !is_word(before) && !is_word(after),
        }
    }
}

fn is_word(ch: Option<char>) -> bool {
    ch.map(|c| c.is_alphanumeric() || c == '_').unwrap_or(false)
}

pub(super) struct InlinePattern {
    kind: SegmentKind,
    precedence: usize,
    regex: Regex,
    guard: Guard,
}

pub(super) static PATTERNS: Lazy<Vec<InlinePattern>> = Lazy::new(|| {
    vec![
        InlinePattern::new(SegmentKind::BoldItalic, 0, r"\*\*\*(.+?)\*\*\*", Guard::None),
        InlinePattern::new(SegmentKind::Bold, 1, r"\*\*(.+?)\*\*", Guard::None),
        InlinePattern::new(SegmentKind::Italic, 2, r"\*([^*]+)\*", Guard::LoneStar),
        InlinePattern::new(SegmentKind::Italic, 2, r"_([^_]+)_", Guard::WordBoundary),
        InlinePattern::new(SegmentKind::Code, 3, r"`([^`]+)`", Guard::None),
        InlinePattern::new(SegmentKind::Link, 4, r"\[([^\]]+)\]\(([^)\s]+)\)", Guard::None),
        InlinePattern::new(SegmentKind::Mention, 5, r"@\w+", Guard::None),
        InlinePattern::new(SegmentKind::Hashtag, 6, r"#\w+", Guard::None),
    ]
});

impl InlinePattern {
    fn new(kind: SegmentKind, precedence: usize, pattern: &str, guard: Guard) -> Self {
        Self {
            kind,
            precedence,
            regex: Regex::new(pattern).expect("inline pattern should compile"),
            guard,
        }
    }

    /// Every accepted match of this pattern in `line`, left to right, non-overlapping.
    ///
    /// A match rejected by the guard does not consume input; the scan resumes one character
    /// after its start so a valid match sharing its closing delimiter is still found.
    pub fn find_all(&self, line: &str) -> Vec<Candidate> {
        let mut found = Vec::new();
        let mut pos = 0;
        while pos < line.len() {
            let Some(caps) = self.regex.captures_at(line, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let inner = caps.get(1).map_or("", |m| m.as_str());
            if self.guard.accepts(line, whole.start(), whole.end(), inner) {
                found.push(Candidate {
                    start: whole.start(),
                    end: whole.end(),
                    precedence: self.precedence,
                    segment: self.segment(&caps),
                });
                pos = whole.end();
            } else {
                pos = whole.start() + line[whole.start()..].chars().next().map_or(1, char::len_utf8);
            }
        }
        found
    }

    fn segment(&self, caps: &Captures<'_>) -> ParsedSegment {
        match self.kind {
            SegmentKind::Link => ParsedSegment::link(&caps[1], &caps[2]),
            SegmentKind::Mention | SegmentKind::Hashtag => ParsedSegment::new(self.kind, &caps[0]),
            kind => ParsedSegment::new(kind, &caps[1]),
        }
    }
}
