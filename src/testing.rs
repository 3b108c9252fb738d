//! Fluent assertions for parsed lines
//!
//!     Tests that walk `ParsedLine` and `ParsedSegment` fields by hand are verbose and break
//!     whenever the model gains a field. These helpers let a test state only what it cares
//!     about, in reading order:
//!
//!     ```rust,ignore
//!     use richpost::testing::assert_lines;
//!
//!     let lines = richpost::parse("# Hello\n- @alice");
//!     assert_lines(&lines)
//!         .line_count(2)
//!         .line(0, |line| {
//!             line.kind(LineKind::Heading).level(1).text("Hello");
//!         })
//!         .line(1, |line| {
//!             line.kind(LineKind::ListItem)
//!                 .segment(0, |seg| {
//!                     seg.kind(SegmentKind::Mention).content("@alice");
//!                 });
//!         });
//!     ```
//!
//!     Every failure message names the line and segment index it came from.

use crate::ast::{LineKind, ParsedLine, ParsedSegment, SegmentKind};

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        match self {
            TextMatch::Exact(expected) => {
                assert_eq!(
                    actual, expected,
                    "{}: Expected text to be '{}', but got '{}'",
                    context, expected, actual
                );
            }
            TextMatch::StartsWith(prefix) => {
                assert!(
                    actual.starts_with(prefix),
                    "{}: Expected text to start with '{}', but got '{}'",
                    context,
                    prefix,
                    actual
                );
            }
            TextMatch::Contains(substring) => {
                assert!(
                    actual.contains(substring),
                    "{}: Expected text to contain '{}', but got '{}'",
                    context,
                    substring,
                    actual
                );
            }
        }
    }
}

/// Entry point for assertions over a parsed body.
pub fn assert_lines(lines: &[ParsedLine]) -> LinesAssertion<'_> {
    LinesAssertion { lines }
}

/// Entry point for assertions over the segments of a single line.
pub fn assert_segments(segments: &[ParsedSegment]) -> SegmentsAssertion<'_> {
    SegmentsAssertion {
        segments,
        context: "segments".to_string(),
    }
}

pub struct LinesAssertion<'a> {
    lines: &'a [ParsedLine],
}

impl<'a> LinesAssertion<'a> {
    pub fn line_count(self, expected: usize) -> Self {
        assert_eq!(
            self.lines.len(),
            expected,
            "Expected {} lines, found {}: {:?}",
            expected,
            self.lines.len(),
            self.lines.iter().map(|l| l.kind).collect::<Vec<_>>()
        );
        self
    }

    pub fn kinds(self, expected: &[LineKind]) -> Self {
        let actual: Vec<_> = self.lines.iter().map(|l| l.kind).collect();
        assert_eq!(actual, expected, "Line kinds differ");
        self
    }

    pub fn line<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(LineAssertion<'a>),
    {
        let line = self.lines.get(index).unwrap_or_else(|| {
            panic!(
                "Line index {} out of bounds ({} lines)",
                index,
                self.lines.len()
            )
        });
        check(LineAssertion {
            line,
            context: format!("line[{}]", index),
        });
        self
    }
}

pub struct LineAssertion<'a> {
    line: &'a ParsedLine,
    context: String,
}

impl<'a> LineAssertion<'a> {
    pub fn kind(self, expected: LineKind) -> Self {
        assert_eq!(
            self.line.kind, expected,
            "{}: Expected kind {:?}, found {:?}",
            self.context, expected, self.line.kind
        );
        self
    }

    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.line.level,
            Some(expected),
            "{}: Expected level {}",
            self.context,
            expected
        );
        self
    }

    pub fn no_level(self) -> Self {
        assert_eq!(self.line.level, None, "{}: Expected no level", self.context);
        self
    }

    pub fn language(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.line.language.as_deref(),
            expected,
            "{}: Unexpected language",
            self.context
        );
        self
    }

    /// Display text of the line (segment contents concatenated).
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.line.text(), &self.context);
        self
    }

    pub fn text_contains(self, expected: &str) -> Self {
        TextMatch::Contains(expected.to_string()).assert(&self.line.text(), &self.context);
        self
    }

    pub fn segment_count(self, expected: usize) -> Self {
        assert_eq!(
            self.line.segments.len(),
            expected,
            "{}: Expected {} segments, found {:?}",
            self.context,
            expected,
            self.line.segments
        );
        self
    }

    pub fn segment<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(SegmentAssertion<'a>),
    {
        let line: &'a ParsedLine = self.line;
        let segments = SegmentsAssertion {
            segments: &line.segments,
            context: self.context.clone(),
        };
        segments.segment(index, check);
        self
    }
}

pub struct SegmentsAssertion<'a> {
    segments: &'a [ParsedSegment],
    context: String,
}

impl<'a> SegmentsAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.segments.len(),
            expected,
            "{}: Expected {} segments, found {:?}",
            self.context,
            expected,
            self.segments
        );
        self
    }

    /// Kinds and contents of every segment, in order.
    pub fn exactly(self, expected: &[(SegmentKind, &str)]) -> Self {
        let actual: Vec<_> = self
            .segments
            .iter()
            .map(|s| (s.kind, s.content.as_str()))
            .collect();
        assert_eq!(actual, expected, "{}: Segments differ", self.context);
        self
    }

    pub fn segment<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(SegmentAssertion<'a>),
    {
        let segment = self.segments.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Segment index {} out of bounds ({} segments)",
                self.context,
                index,
                self.segments.len()
            )
        });
        check(SegmentAssertion {
            segment,
            context: format!("{}.segment[{}]", self.context, index),
        });
        self
    }
}

pub struct SegmentAssertion<'a> {
    segment: &'a ParsedSegment,
    context: String,
}

impl SegmentAssertion<'_> {
    pub fn kind(self, expected: SegmentKind) -> Self {
        assert_eq!(
            self.segment.kind, expected,
            "{}: Expected kind {:?}, found {:?}",
            self.context, expected, self.segment.kind
        );
        self
    }

    pub fn content(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.segment.content, &self.context);
        self
    }

    pub fn content_starts_with(self, expected: &str) -> Self {
        TextMatch::StartsWith(expected.to_string()).assert(&self.segment.content, &self.context);
        self
    }

    pub fn url(self, expected: &str) -> Self {
        assert_eq!(
            self.segment.url.as_deref(),
            Some(expected),
            "{}: Unexpected url",
            self.context
        );
        self
    }

    pub fn no_url(self) -> Self {
        assert_eq!(self.segment.url, None, "{}: Expected no url", self.context);
        self
    }
}
