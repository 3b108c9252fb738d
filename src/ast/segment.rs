use serde::Serialize;

/// The inline element a segment was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Text,
    Bold,
    Italic,
    BoldItalic,
    Link,
    Code,
    Mention,
    Hashtag,
}

impl SegmentKind {
    /// Serialized name, as used by the JSON and tag formats.
    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::Text => "text",
            SegmentKind::Bold => "bold",
            SegmentKind::Italic => "italic",
            SegmentKind::BoldItalic => "bolditalic",
            SegmentKind::Link => "link",
            SegmentKind::Code => "code",
            SegmentKind::Mention => "mention",
            SegmentKind::Hashtag => "hashtag",
        }
    }
}

/// A classified run of inline text.
///
/// `content` is the display text with syntax markers consumed. Mentions and hashtags keep
/// their leading `@` / `#`. `url` is only set for links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSegment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ParsedSegment {
    pub fn new(kind: SegmentKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            url: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(SegmentKind::Text, content)
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Link,
            content: label.into(),
            url: Some(url.into()),
        }
    }
}
