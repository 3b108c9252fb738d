use crate::ast::{Inline, LinkTarget, ParsedSegment, SegmentKind};
use crate::options::LinkOptions;
use url::{ParseError, Url};

/// Map one parsed segment to its inline output construct.
pub fn build_inline(segment: &ParsedSegment, links: &LinkOptions) -> Inline {
    let content = segment.content.clone();
    match segment.kind {
        SegmentKind::Text => Inline::Text(content),
        SegmentKind::Bold => Inline::Strong(content),
        SegmentKind::Italic => Inline::Emphasis(content),
        SegmentKind::BoldItalic => Inline::StrongEmphasis(content),
        SegmentKind::Code => Inline::Code(content),
        SegmentKind::Link => {
            let href = segment.url.clone().unwrap_or_default();
            let target = classify_link(&href, &links.internal_hosts);
            Inline::Link {
                label: content,
                href,
                target,
            }
        }
        SegmentKind::Mention => {
            let username = content.trim_start_matches('@').to_string();
            Inline::ProfileLink {
                href: links.profile_href(&username),
                username,
            }
        }
        SegmentKind::Hashtag => {
            let tag = content.trim_start_matches('#').to_string();
            Inline::TagLink {
                href: links.tag_href(&tag),
                tag,
            }
        }
    }
}

/// Decide where a link URL points.
///
/// URLs that only parse relative to a base are internal, except protocol-relative ones.
/// Browsers treat `\` like `/` at the start of a URL, so `\\host` and `/\host` count as
/// protocol-relative too.
pub fn classify_link(href: &str, internal_hosts: &[String]) -> LinkTarget {
    match Url::parse(href) {
        Ok(url) => match url.scheme() {
            "javascript" | "data" | "vbscript" => LinkTarget::Unsafe,
            "http" | "https" if is_internal_host(url.host_str(), internal_hosts) => {
                LinkTarget::Internal
            }
            _ => LinkTarget::External,
        },
        Err(ParseError::RelativeUrlWithoutBase) if !is_protocol_relative(href) => {
            LinkTarget::Internal
        }
        Err(_) => LinkTarget::External,
    }
}

fn is_protocol_relative(href: &str) -> bool {
    let mut chars = href.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('/' | '\\'), Some('/' | '\\'))
    )
}

fn is_internal_host(host: Option<&str>, internal_hosts: &[String]) -> bool {
    host.map(|host| {
        internal_hosts
            .iter()
            .any(|internal| internal.eq_ignore_ascii_case(host))
    })
    .unwrap_or(false)
}
