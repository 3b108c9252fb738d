//! Line Classification
//!
//! Determines the block type of a single line and strips its prefix. Checks run in a fixed
//! order on the trimmed line; a prefix with nothing after it fails its check and the line
//! falls through to paragraph.
use crate::ast::{LineKind, ParsedLine};
use crate::inlines::parse_segments;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,3})\s+(.+)$").expect("heading pattern should compile"));
static UNORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•]\s+(.+)$").expect("list pattern should compile"));
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s+(.+)$").expect("list pattern should compile"));

/// Classify one source line.
pub fn classify_line(raw: &str) -> ParsedLine {
    let line = raw.trim();
    let parsed = classify_trimmed(line);
    log::trace!("classified {:?} as {}", line, parsed.kind.name());
    parsed
}

fn classify_trimmed(line: &str) -> ParsedLine {
    if line.is_empty() {
        return ParsedLine::empty();
    }
    if is_rule(line) {
        return ParsedLine::rule();
    }
    if let Some(caps) = HEADING.captures(line) {
        let level = caps[1].len();
        return ParsedLine::new(LineKind::Heading, parse_segments(&caps[2])).with_level(level);
    }
    if let Some((level, rest)) = strip_quote(line) {
        return ParsedLine::new(LineKind::Quote, parse_segments(rest)).with_level(level);
    }
    if let Some(caps) = UNORDERED_ITEM
        .captures(line)
        .or_else(|| ORDERED_ITEM.captures(line))
    {
        // The ordinal of numbered items is not kept.
        return ParsedLine::new(LineKind::ListItem, parse_segments(&caps[1]));
    }
    ParsedLine::new(LineKind::Paragraph, parse_segments(line))
}

/// Three or more of the same rule character and nothing else.
fn is_rule(line: &str) -> bool {
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    matches!(first, '-' | '*' | '_') && line.chars().count() >= 3 && chars.all(|c| c == first)
}

/// Strip leading `>` markers, one nesting level each. `None` when nothing is quoted.
fn strip_quote(line: &str) -> Option<(usize, &str)> {
    let mut rest = line;
    let mut level = 0;
    while let Some(stripped) = rest.strip_prefix('>') {
        level += 1;
        rest = stripped.trim_start();
    }
    if level == 0 || rest.is_empty() {
        None
    } else {
        Some((level, rest))
    }
}
