use super::patterns::{Candidate, PATTERNS};
use crate::ast::ParsedSegment;

/// Parse one line of text into inline segments.
///
/// The result covers the whole input with no gaps: untouched spans become text segments. An
/// input with no recognised pattern yields a single text segment; an empty input yields none.
pub fn parse_segments(text: &str) -> Vec<ParsedSegment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_all(text))
        .collect();
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| a.precedence.cmp(&b.precedence))
    });

    let mut segments = Vec::new();
    let mut cursor = 0;
    for candidate in candidates {
        if candidate.start < cursor {
            continue;
        }
        if candidate.start > cursor {
            segments.push(ParsedSegment::text(&text[cursor..candidate.start]));
        }
        cursor = candidate.end;
        segments.push(candidate.segment);
    }
    if cursor < text.len() {
        segments.push(ParsedSegment::text(&text[cursor..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SegmentKind;

    fn seg(kind: SegmentKind, content: &str) -> ParsedSegment {
        ParsedSegment::new(kind, content)
    }

    #[test]
    fn parses_plain_text() {
        let segments = parse_segments("hello world");
        assert_eq!(segments, vec![ParsedSegment::text("hello world")]);
    }

    #[test]
    fn empty_input_has_no_segments() {
        assert!(parse_segments("").is_empty());
    }

    #[test]
    fn triple_star_is_bold_italic() {
        assert_eq!(
            parse_segments("***x***"),
            vec![seg(SegmentKind::BoldItalic, "x")]
        );
    }

    #[test]
    fn bold_and_italic_do_not_cofire() {
        assert_eq!(parse_segments("**x**"), vec![seg(SegmentKind::Bold, "x")]);
        assert_eq!(parse_segments("*x*"), vec![seg(SegmentKind::Italic, "x")]);
        assert_eq!(parse_segments("_x_"), vec![seg(SegmentKind::Italic, "x")]);
    }

    #[test]
    fn nested_italic_inside_bold_stays_in_bold() {
        let segments = parse_segments("**bold with *nested* text**");
        assert_eq!(
            segments,
            vec![seg(SegmentKind::Bold, "bold with *nested* text")]
        );
    }

    #[test]
    fn text_fills_gaps_between_matches() {
        let segments = parse_segments("a **b** c `d` e");
        assert_eq!(
            segments,
            vec![
                ParsedSegment::text("a "),
                seg(SegmentKind::Bold, "b"),
                ParsedSegment::text(" c "),
                seg(SegmentKind::Code, "d"),
                ParsedSegment::text(" e"),
            ]
        );
    }

    #[test]
    fn code_span_shadows_mention() {
        let segments = parse_segments("`@notareference`");
        assert_eq!(segments, vec![seg(SegmentKind::Code, "@notareference")]);
    }

    #[test]
    fn link_label_is_not_retokenized() {
        let segments = parse_segments("[see **@bob**](/u/bob)");
        assert_eq!(segments, vec![ParsedSegment::link("see **@bob**", "/u/bob")]);
    }

    #[test]
    fn marker_only_line_is_text() {
        assert_eq!(parse_segments("**"), vec![ParsedSegment::text("**")]);
        assert_eq!(parse_segments("``"), vec![ParsedSegment::text("``")]);
    }

    #[test]
    fn multibyte_text_keeps_boundaries() {
        let segments = parse_segments("¡hola @josé! **ñ**");
        assert_eq!(
            segments,
            vec![
                ParsedSegment::text("¡hola "),
                seg(SegmentKind::Mention, "@josé"),
                ParsedSegment::text("! "),
                seg(SegmentKind::Bold, "ñ"),
            ]
        );
    }
}
