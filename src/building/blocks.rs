use super::inline::build_inline;
use crate::ast::{Block, Document, Inline, LineKind, ParsedLine, ParsedSegment};
use crate::options::LinkOptions;

/// Build the render model from classified lines.
///
/// Consecutive list items are accumulated and flushed as one [Block::List] before the next
/// non-list line (empty lines included) and at the end of input.
pub fn build_document(lines: &[ParsedLine], links: &LinkOptions) -> Document {
    let mut blocks = Vec::new();
    let mut pending_items: Vec<Vec<Inline>> = Vec::new();

    for line in lines {
        if line.kind == LineKind::ListItem {
            pending_items.push(build_inlines(&line.segments, links));
            continue;
        }
        flush_list(&mut pending_items, &mut blocks);

        let block = match line.kind {
            LineKind::Empty => continue,
            LineKind::Hr => Block::Rule,
            LineKind::Heading => Block::Heading {
                level: line.level.unwrap_or(1),
                content: build_inlines(&line.segments, links),
            },
            LineKind::Quote => Block::Quote {
                level: line.level.unwrap_or(1),
                content: build_inlines(&line.segments, links),
            },
            LineKind::Paragraph => Block::Paragraph {
                content: build_inlines(&line.segments, links),
            },
            LineKind::CodeBlock => Block::CodeBlock {
                language: line.language.clone(),
                content: line.text(),
            },
            LineKind::ListItem => unreachable!("list items are grouped above"),
        };
        blocks.push(block);
    }
    flush_list(&mut pending_items, &mut blocks);

    log::debug!("built {} blocks from {} lines", blocks.len(), lines.len());
    Document::new(blocks)
}

fn build_inlines(segments: &[ParsedSegment], links: &LinkOptions) -> Vec<Inline> {
    segments
        .iter()
        .map(|segment| build_inline(segment, links))
        .collect()
}

fn flush_list(pending_items: &mut Vec<Vec<Inline>>, blocks: &mut Vec<Block>) {
    if pending_items.is_empty() {
        return;
    }
    let items = std::mem::take(pending_items);
    blocks.push(Block::List { items });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::classify_line;

    fn build(source: &str) -> Document {
        let lines: Vec<_> = source.lines().map(classify_line).collect();
        build_document(&lines, &LinkOptions::default())
    }

    fn text(s: &str) -> Vec<Inline> {
        vec![Inline::Text(s.into())]
    }

    #[test]
    fn consecutive_items_form_one_list() {
        let doc = build("- item one\n- item two");
        assert_eq!(
            doc.blocks,
            vec![Block::List {
                items: vec![text("item one"), text("item two")]
            }]
        );
    }

    #[test]
    fn any_other_line_splits_lists() {
        let doc = build("- a\n\n1. b\nbetween\n* c");
        assert_eq!(
            doc.blocks,
            vec![
                Block::List { items: vec![text("a")] },
                Block::List { items: vec![text("b")] },
                Block::Paragraph { content: text("between") },
                Block::List { items: vec![text("c")] },
            ]
        );
    }

    #[test]
    fn empty_lines_are_skipped_and_rules_kept() {
        let doc = build("\n# Title\n\n---\n\n> quoted");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading {
                    level: 1,
                    content: text("Title")
                },
                Block::Rule,
                Block::Quote {
                    level: 1,
                    content: text("quoted")
                },
            ]
        );
    }

    #[test]
    fn code_block_keeps_language_and_raw_text() {
        let line = ParsedLine::new(
            LineKind::CodeBlock,
            vec![ParsedSegment::new(crate::ast::SegmentKind::Code, "a\nb")],
        )
        .with_language(Some("toml".into()));
        let doc = build_document(&[line], &LinkOptions::default());
        assert_eq!(
            doc.blocks,
            vec![Block::CodeBlock {
                language: Some("toml".into()),
                content: "a\nb".into()
            }]
        );
    }
}
