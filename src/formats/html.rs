//! HTML fragment serialization
//!
//! One block per output line. All text and attribute values are escaped; links with a
//! script-capable scheme lose their anchor and keep only the label.

use super::Format;
use crate::ast::{Block, Document, Inline, LinkTarget, ParsedLine};
use crate::building::build_document;
use crate::error::FormatError;
use crate::options::{LinkOptions, RenderOptions};

/// Render a built document as an HTML fragment.
pub fn render_html(doc: &Document, links: &LinkOptions) -> String {
    doc.blocks
        .iter()
        .map(|block| render_block(block, links))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(block: &Block, links: &LinkOptions) -> String {
    match block {
        Block::Heading { level, content } => {
            format!("<h{level}>{}</h{level}>", render_inlines(content, links))
        }
        Block::Quote { level, content } => format!(
            "{}{}{}",
            "<blockquote>".repeat(*level),
            render_inlines(content, links),
            "</blockquote>".repeat(*level)
        ),
        Block::Paragraph { content } => format!("<p>{}</p>", render_inlines(content, links)),
        Block::List { items } => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_inlines(item, links)))
                .collect();
            format!("<ul>{}</ul>", items)
        }
        Block::CodeBlock { language, content } => match language {
            Some(language) => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                escape_html(language),
                escape_html(content)
            ),
            None => format!("<pre><code>{}</code></pre>", escape_html(content)),
        },
        Block::Rule => "<hr>".to_string(),
    }
}

fn render_inlines(inlines: &[Inline], links: &LinkOptions) -> String {
    inlines
        .iter()
        .map(|inline| render_inline(inline, links))
        .collect()
}

fn render_inline(inline: &Inline, links: &LinkOptions) -> String {
    match inline {
        Inline::Text(text) => escape_html(text),
        Inline::Strong(text) => format!("<strong>{}</strong>", escape_html(text)),
        Inline::Emphasis(text) => format!("<em>{}</em>", escape_html(text)),
        Inline::StrongEmphasis(text) => format!("<strong><em>{}</em></strong>", escape_html(text)),
        Inline::Code(text) => format!("<code>{}</code>", escape_html(text)),
        Inline::Link {
            label,
            href,
            target,
        } => match target {
            LinkTarget::Internal => {
                format!("<a href=\"{}\">{}</a>", escape_html(href), escape_html(label))
            }
            LinkTarget::External => {
                let mut attrs = format!("href=\"{}\"", escape_html(href));
                if !links.external_rel.is_empty() {
                    attrs.push_str(&format!(" rel=\"{}\"", escape_html(&links.external_rel)));
                }
                if links.external_new_tab {
                    attrs.push_str(" target=\"_blank\"");
                }
                format!("<a {}>{}</a>", attrs, escape_html(label))
            }
            LinkTarget::Unsafe => escape_html(label),
        },
        Inline::ProfileLink { username, href } => format!(
            "<a class=\"mention\" href=\"{}\">@{}</a>",
            escape_html(href),
            escape_html(username)
        ),
        Inline::TagLink { tag, href } => format!(
            "<a class=\"hashtag\" href=\"{}\">#{}</a>",
            escape_html(href),
            escape_html(tag)
        ),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format implementation for HTML fragments
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Escaped HTML fragment, one block per line"
    }

    fn serialize(&self, lines: &[ParsedLine], options: &RenderOptions) -> Result<String, FormatError> {
        let doc = build_document(lines, &options.links);
        Ok(render_html(&doc, &options.links))
    }
}
