//! End-to-end rendering tests: source text through every built-in format.

use richpost::ast::{Block, Inline, LinkTarget};
use richpost::loader::ContentLoader;
use richpost::options::{LinkOptions, RenderOptions};
use rstest::rstest;

const THREAD_POST: &str = "# Grading question\n\
                           Got my **PSA 10** back, thanks @oak_lab!\n\
                           - check [the guide](/guides/grading)\n\
                           - and [PSA](https://www.psacard.com)\n\
                           ---\n\
                           > is it worth it?\n\
                           #pokemon #grading";

#[test]
fn test_list_items_group_into_one_list() {
    let doc = richpost::render("- item one\n- item two");
    assert_eq!(
        doc.blocks,
        vec![Block::List {
            items: vec![
                vec![Inline::Text("item one".into())],
                vec![Inline::Text("item two".into())],
            ]
        }]
    );
}

#[test]
fn test_thread_post_html() {
    let html = ContentLoader::from_string(THREAD_POST)
        .serialize("html")
        .unwrap();
    insta::assert_snapshot!(html, @r#"
    <h1>Grading question</h1>
    <p>Got my <strong>PSA 10</strong> back, thanks <a class="mention" href="/profile/oak_lab">@oak_lab</a>!</p>
    <ul><li>check <a href="/guides/grading">the guide</a></li><li>and <a href="https://www.psacard.com" rel="nofollow noopener noreferrer" target="_blank">PSA</a></li></ul>
    <hr>
    <blockquote>is it worth it?</blockquote>
    <p><a class="hashtag" href="/tags/pokemon">#pokemon</a> <a class="hashtag" href="/tags/grading">#grading</a></p>
    "#);
}

#[test]
fn test_thread_post_tag_tree() {
    let tags = ContentLoader::from_string("## Trades\n- @misty wants *holos*\n***")
        .serialize("tag")
        .unwrap();
    insta::assert_snapshot!(tags, @r#"
    <document>
      <heading level="2">
        <text>Trades</text>
      </heading>
      <list>
        <item>
          <mention href="/profile/misty">misty</mention>
          <text> wants </text>
          <emphasis>holos</emphasis>
        </item>
      </list>
      <rule></rule>
    </document>
    "#);
}

#[test]
fn test_thread_post_references() {
    let doc = richpost::render(THREAD_POST);
    assert_eq!(doc.mentions(), vec!["oak_lab"]);
    assert_eq!(doc.hashtags(), vec!["pokemon", "grading"]);
}

#[test]
fn test_thread_post_excerpt() {
    let options = RenderOptions {
        excerpt_max_chars: 40,
        ..RenderOptions::default()
    };
    let text = ContentLoader::from_string(THREAD_POST)
        .with_options(options)
        .serialize("text")
        .unwrap();
    assert_eq!(text, "Grading question\nGot my PSA 10 back, tha…");
}

#[rstest]
#[case("/t/99", LinkTarget::Internal)]
#[case("https://forum.example/t/99", LinkTarget::Internal)]
#[case("https://www.psacard.com", LinkTarget::External)]
#[case("data:text/html,hi", LinkTarget::Unsafe)]
#[case("//elsewhere.example/x", LinkTarget::External)]
#[case("/\\elsewhere.example/x", LinkTarget::External)]
#[case("\\\\elsewhere.example/x", LinkTarget::External)]
fn test_link_targets(#[case] url: &str, #[case] expected: LinkTarget) {
    let options = RenderOptions {
        links: LinkOptions {
            internal_hosts: vec!["forum.example".into()],
            ..LinkOptions::default()
        },
        ..RenderOptions::default()
    };
    let doc = richpost::render_with(&format!("[x]({})", url), &options);
    match &doc.blocks[..] {
        [Block::Paragraph { content }] => match &content[..] {
            [Inline::Link { target, href, .. }] => {
                assert_eq!(*target, expected);
                assert_eq!(href, url);
            }
            other => panic!("Unexpected inlines: {:?}", other),
        },
        other => panic!("Unexpected blocks: {:?}", other),
    }
}

#[test]
fn test_custom_routes() {
    let options = RenderOptions {
        links: LinkOptions {
            profile_path: "/u/{username}".into(),
            tag_path: "/search?tag={tag}".into(),
            ..LinkOptions::default()
        },
        ..RenderOptions::default()
    };
    let html = ContentLoader::from_string("@ash #mtg")
        .with_options(options)
        .serialize("html")
        .unwrap();
    insta::assert_snapshot!(html, @r#"<p><a class="mention" href="/u/ash">@ash</a> <a class="hashtag" href="/search?tag=mtg">#mtg</a></p>"#);
}

#[test]
fn test_backslash_host_link_gets_external_attributes() {
    insta::assert_snapshot!(
        richpost::to_html("[x](/\\elsewhere.example)"),
        @r#"<p><a href="/\elsewhere.example" rel="nofollow noopener noreferrer" target="_blank">x</a></p>"#
    );
}
