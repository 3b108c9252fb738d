//! XML-like tag serialization of the render model
//!
//! ## Format
//!
//! - Block or inline kind → tag name
//! - Level, href and link target → attributes
//! - Text → text content
//! - Children → nested tags (no wrapper)
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <heading level="1">
//!     <text>Hello</text>
//!   </heading>
//!   <list>
//!     <item>
//!       <mention href="/profile/alice">alice</mention>
//!     </item>
//!   </list>
//!   <rule></rule>
//! </document>
//! ```

use super::Format;
use crate::ast::{Block, Document, Inline, LinkTarget, ParsedLine};
use crate::building::build_document;
use crate::error::FormatError;
use crate::options::RenderOptions;

struct TagNode {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    label: String,
    children: Vec<TagNode>,
}

impl TagNode {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            label: String::new(),
            children: Vec::new(),
        }
    }

    fn leaf(name: &'static str, label: &str) -> Self {
        let mut node = Self::new(name);
        node.label = label.to_string();
        node
    }

    fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }

    fn with_children(mut self, children: Vec<TagNode>) -> Self {
        self.children = children;
        self
    }
}

/// Tag serializer with indentation tracking
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn serialize_node(&mut self, node: &TagNode) {
        let mut open = format!("<{}", node.name);
        for (key, value) in &node.attrs {
            open.push_str(&format!(" {}=\"{}\"", key, escape_xml(value)));
        }
        open.push('>');

        self.push_indent(&open);
        self.output.push_str(&escape_xml(&node.label));

        if node.children.is_empty() {
            self.output.push_str(&format!("</{}>", node.name));
            self.output.push('\n');
        } else {
            self.output.push('\n');
            self.indent_level += 1;
            for child in &node.children {
                self.serialize_node(child);
            }
            self.indent_level -= 1;
            self.push_indent(&format!("</{}>", node.name));
            self.output.push('\n');
        }
    }
}

fn block_node(block: &Block) -> TagNode {
    match block {
        Block::Heading { level, content } => TagNode::new("heading")
            .attr("level", level)
            .with_children(inline_nodes(content)),
        Block::Quote { level, content } => TagNode::new("quote")
            .attr("level", level)
            .with_children(inline_nodes(content)),
        Block::Paragraph { content } => {
            TagNode::new("paragraph").with_children(inline_nodes(content))
        }
        Block::List { items } => TagNode::new("list").with_children(
            items
                .iter()
                .map(|item| TagNode::new("item").with_children(inline_nodes(item)))
                .collect(),
        ),
        Block::CodeBlock { language, content } => {
            let node = TagNode::leaf("code-block", content);
            match language {
                Some(language) => node.attr("language", language),
                None => node,
            }
        }
        Block::Rule => TagNode::new("rule"),
    }
}

fn inline_nodes(inlines: &[Inline]) -> Vec<TagNode> {
    inlines.iter().map(inline_node).collect()
}

fn inline_node(inline: &Inline) -> TagNode {
    match inline {
        Inline::Text(text) => TagNode::leaf("text", text),
        Inline::Strong(text) => TagNode::leaf("strong", text),
        Inline::Emphasis(text) => TagNode::leaf("emphasis", text),
        Inline::StrongEmphasis(text) => TagNode::leaf("strong-emphasis", text),
        Inline::Code(text) => TagNode::leaf("code", text),
        Inline::Link {
            label,
            href,
            target,
        } => TagNode::leaf("link", label)
            .attr("href", href)
            .attr("target", target_name(*target)),
        Inline::ProfileLink { username, href } => {
            TagNode::leaf("mention", username).attr("href", href)
        }
        Inline::TagLink { tag, href } => TagNode::leaf("hashtag", tag).attr("href", href),
    }
}

fn target_name(target: LinkTarget) -> &'static str {
    match target {
        LinkTarget::Internal => "internal",
        LinkTarget::External => "external",
        LinkTarget::Unsafe => "unsafe",
    }
}

/// Serialize a document to the tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");

    let mut serializer = TagSerializer::new();
    serializer.indent_level = 1;
    for block in &doc.blocks {
        serializer.serialize_node(&block_node(block));
    }

    result.push_str(&serializer.output);
    result.push_str("</document>");
    result
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format implementation for XML-like tag format
pub struct TagFormat;

impl Format for TagFormat {
    fn name(&self) -> &str {
        "tag"
    }

    fn description(&self) -> &str {
        "XML-like tag tree of the rendered document"
    }

    fn serialize(&self, lines: &[ParsedLine], options: &RenderOptions) -> Result<String, FormatError> {
        let doc = build_document(lines, &options.links);
        Ok(serialize_document(&doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_empty_document() {
        assert_eq!(serialize_document(&Document::default()), "<document>\n</document>");
    }

    #[test]
    fn test_serialize_nested_blocks() {
        let doc = crate::render("# Hello\n- @alice\n---");
        let expected = "<document>\n  <heading level=\"1\">\n    <text>Hello</text>\n  </heading>\n  <list>\n    <item>\n      <mention href=\"/profile/alice\">alice</mention>\n    </item>\n  </list>\n  <rule></rule>\n</document>";
        assert_eq!(serialize_document(&doc), expected);
    }

    #[test]
    fn test_link_attributes_are_escaped() {
        let doc = crate::render("[q](/s?a=1&b=2)");
        let output = serialize_document(&doc);
        assert!(output.contains("<link href=\"/s?a=1&amp;b=2\" target=\"internal\">q</link>"));
    }
}
