use super::Format;
use crate::ast::{Block, Document, Inline, ParsedLine};
use crate::building::build_document;
use crate::error::FormatError;
use crate::options::RenderOptions;

/// Plain text of a document, cut to `max_chars` characters (0 keeps everything).
///
/// Blocks are joined with newlines, list items are prefixed with `- `, rules are dropped. A
/// cut excerpt ends with `…`.
pub fn excerpt(doc: &Document, max_chars: usize) -> String {
    let text = doc
        .blocks
        .iter()
        .filter_map(block_text)
        .collect::<Vec<_>>()
        .join("\n");

    if max_chars == 0 || text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

fn block_text(block: &Block) -> Option<String> {
    match block {
        Block::Heading { content, .. }
        | Block::Quote { content, .. }
        | Block::Paragraph { content } => Some(inline_text(content)),
        Block::List { items } => Some(
            items
                .iter()
                .map(|item| format!("- {}", inline_text(item)))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        Block::CodeBlock { content, .. } => Some(content.clone()),
        Block::Rule => None,
    }
}

fn inline_text(inlines: &[Inline]) -> String {
    inlines.iter().map(|inline| inline.display_text()).collect()
}

/// Plain text excerpt for thread previews
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text excerpt with markup removed"
    }

    fn serialize(&self, lines: &[ParsedLine], options: &RenderOptions) -> Result<String, FormatError> {
        let doc = build_document(lines, &options.links);
        Ok(excerpt(&doc, options.excerpt_max_chars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markup() {
        let doc = crate::render("# **Grading** tips\n\n> ask @bob\n- one\n- *two*\n---\nsee [guide](/g) #psa");
        assert_eq!(
            excerpt(&doc, 0),
            "Grading tips\nask @bob\n- one\n- two\nsee guide #psa"
        );
    }

    #[test]
    fn truncates_on_characters() {
        let doc = crate::render("ñandú ñandú ñandú");
        assert_eq!(excerpt(&doc, 6), "ñandú…");
        assert_eq!(excerpt(&doc, 100), "ñandú ñandú ñandú");
    }
}
