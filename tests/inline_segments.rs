//! Inline segment tests
//!
//! Each case is one line of text and the exact segments it must produce.

use richpost::ast::SegmentKind::{self, *};
use richpost::inlines::parse_segments;
use richpost::testing::assert_segments;
use rstest::rstest;

#[rstest]
#[case::plain("just some words", &[(Text, "just some words")])]
#[case::bold_italic("***x***", &[(BoldItalic, "x")])]
#[case::bold("**x**", &[(Bold, "x")])]
#[case::italic_star("*x*", &[(Italic, "x")])]
#[case::italic_underscore("_x_", &[(Italic, "x")])]
#[case::code("`let x`", &[(Code, "let x")])]
#[case::mention_and_hashtag(
    "Hey @alice see #pokemon",
    &[(Text, "Hey "), (Mention, "@alice"), (Text, " see "), (Hashtag, "#pokemon")]
)]
#[case::bold_wraps_italic(
    "**bold with *nested* text**",
    &[(Bold, "bold with *nested* text")]
)]
#[case::mixed(
    "a *b* and **c** then ***d***",
    &[(Text, "a "), (Italic, "b"), (Text, " and "), (Bold, "c"), (Text, " then "), (BoldItalic, "d")]
)]
#[case::unclosed_bold("**open ended", &[(Text, "**open ended")])]
#[case::markers_only("**", &[(Text, "**")])]
#[case::snake_case("use snake_case_names", &[(Text, "use snake_case_names")])]
#[case::code_hides_mention("`@notareference`", &[(Code, "@notareference")])]
#[case::email_is_mention("mail me@example.com", &[(Text, "mail me"), (Mention, "@example"), (Text, ".com")])]
#[case::unicode_names("@josé likes #pokémon", &[(Mention, "@josé"), (Text, " likes "), (Hashtag, "#pokémon")])]
#[case::hashtag_needs_word("# alone", &[(Text, "# alone")])]
fn test_segments(#[case] line: &str, #[case] expected: &[(SegmentKind, &str)]) {
    let segments = parse_segments(line);
    assert_segments(&segments).exactly(expected);
}

#[test]
fn test_link_segment() {
    let segments = parse_segments("Check [this link](https://example.com) now");
    assert_segments(&segments)
        .count(3)
        .segment(0, |seg| {
            seg.kind(Text).content("Check ").no_url();
        })
        .segment(1, |seg| {
            seg.kind(Link)
                .content_starts_with("this")
                .content("this link")
                .url("https://example.com");
        })
        .segment(2, |seg| {
            seg.kind(Text).content(" now");
        });
}

#[test]
fn test_link_label_wins_over_inner_patterns() {
    let segments = parse_segments("[#1 by @ash](/t/1) **after**");
    assert_segments(&segments).exactly(&[
        (Link, "#1 by @ash"),
        (Text, " "),
        (Bold, "after"),
    ]);
}

#[test]
fn test_earliest_start_wins_over_longer_later_match() {
    // The code span starts first, so the bold starting inside it is dropped.
    let segments = parse_segments("`a **b**` c");
    assert_segments(&segments).exactly(&[(Code, "a **b**"), (Text, " c")]);
}

#[test]
fn test_star_next_to_space_does_not_open_italic() {
    let segments = parse_segments("*a **b** c*");
    assert_segments(&segments).exactly(&[(Text, "*a "), (Bold, "b"), (Text, " c*")]);
}
