use serde::Serialize;

use super::segment::ParsedSegment;

/// Block type assigned to a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Paragraph,
    Quote,
    Heading,
    ListItem,
    CodeBlock,
    Hr,
    Empty,
}

impl LineKind {
    pub fn name(self) -> &'static str {
        match self {
            LineKind::Paragraph => "paragraph",
            LineKind::Quote => "quote",
            LineKind::Heading => "heading",
            LineKind::ListItem => "listitem",
            LineKind::CodeBlock => "codeblock",
            LineKind::Hr => "hr",
            LineKind::Empty => "empty",
        }
    }
}

/// A classified line of post content.
///
/// `level` is the heading level (1-3) or the quote nesting depth; `None` for every other kind.
/// `language` is only set on fenced code blocks that declared one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub segments: Vec<ParsedSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ParsedLine {
    pub fn new(kind: LineKind, segments: Vec<ParsedSegment>) -> Self {
        Self {
            kind,
            segments,
            level: None,
            language: None,
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn empty() -> Self {
        Self::new(LineKind::Empty, Vec::new())
    }

    pub fn rule() -> Self {
        Self::new(LineKind::Hr, Vec::new())
    }

    /// Display text of the line: segment contents concatenated, markers already stripped.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.content.as_str())
            .collect()
    }
}
