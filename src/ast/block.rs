use std::borrow::Cow;

/// Where a link points, decided from its URL scheme and host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// Relative URLs and absolute URLs on a configured forum host.
    Internal,
    External,
    /// Script-capable schemes. Serializers emit the label only.
    Unsafe,
}

/// Inline output construct, one per parsed segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Emphasis(String),
    StrongEmphasis(String),
    Code(String),
    Link {
        label: String,
        href: String,
        target: LinkTarget,
    },
    ProfileLink {
        username: String,
        href: String,
    },
    TagLink {
        tag: String,
        href: String,
    },
}

impl Inline {
    /// Text a reader sees for this inline, with mention and hashtag sigils restored.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Inline::Text(text)
            | Inline::Strong(text)
            | Inline::Emphasis(text)
            | Inline::StrongEmphasis(text)
            | Inline::Code(text) => Cow::Borrowed(text),
            Inline::Link { label, .. } => Cow::Borrowed(label),
            Inline::ProfileLink { username, .. } => Cow::Owned(format!("@{}", username)),
            Inline::TagLink { tag, .. } => Cow::Owned(format!("#{}", tag)),
        }
    }
}

/// Block-level output construct.
///
/// Lines map one to one onto blocks, except list items: a run of consecutive list item lines
/// becomes a single [Block::List].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: usize,
        content: Vec<Inline>,
    },
    Quote {
        level: usize,
        content: Vec<Inline>,
    },
    Paragraph {
        content: Vec<Inline>,
    },
    List {
        items: Vec<Vec<Inline>>,
    },
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    Rule,
}

impl Block {
    /// The inline runs held by this block; one per list item for lists.
    pub fn inline_runs(&self) -> Vec<&[Inline]> {
        match self {
            Block::Heading { content, .. }
            | Block::Quote { content, .. }
            | Block::Paragraph { content } => vec![content.as_slice()],
            Block::List { items } => items.iter().map(Vec::as_slice).collect(),
            Block::CodeBlock { .. } | Block::Rule => Vec::new(),
        }
    }
}

/// Rendered post body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every inline in document order.
    pub fn inlines(&self) -> impl Iterator<Item = &Inline> + '_ {
        self.blocks
            .iter()
            .flat_map(|block| block.inline_runs())
            .flat_map(|run| run.iter())
    }

    /// Distinct mentioned usernames, in order of first appearance.
    pub fn mentions(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for inline in self.inlines() {
            if let Inline::ProfileLink { username, .. } = inline {
                if !seen.contains(&username.as_str()) {
                    seen.push(username.as_str());
                }
            }
        }
        seen
    }

    /// Distinct hashtags, in order of first appearance.
    pub fn hashtags(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for inline in self.inlines() {
            if let Inline::TagLink { tag, .. } = inline {
                if !seen.contains(&tag.as_str()) {
                    seen.push(tag.as_str());
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(name: &str) -> Inline {
        Inline::ProfileLink {
            username: name.to_string(),
            href: format!("/profile/{}", name),
        }
    }

    #[test]
    fn mentions_are_distinct_and_ordered() {
        let doc = Document::new(vec![
            Block::Paragraph {
                content: vec![mention("bob"), Inline::Text(" and ".into()), mention("alice")],
            },
            Block::List {
                items: vec![vec![mention("bob")], vec![mention("carol")]],
            },
        ]);
        assert_eq!(doc.mentions(), vec!["bob", "alice", "carol"]);
        assert!(doc.hashtags().is_empty());
    }

    #[test]
    fn code_blocks_hold_no_inlines() {
        let doc = Document::new(vec![
            Block::CodeBlock {
                language: None,
                content: "#notatag".into(),
            },
            Block::Rule,
        ]);
        assert_eq!(doc.inlines().count(), 0);
    }

    #[test]
    fn display_text_restores_sigils() {
        let tag = Inline::TagLink {
            tag: "pokemon".into(),
            href: "/tags/pokemon".into(),
        };
        assert_eq!(tag.display_text(), "#pokemon");
        assert_eq!(mention("ash").display_text(), "@ash");
    }
}
