//! Parse and render options
//!
//! Plain structs with defaults that match the embedded configuration file. Applications
//! usually get them from [RichpostConfig::render_options](crate::settings::RichpostConfig::render_options).

/// Options for the line classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Group ```` ``` ```` fenced lines into code blocks. Off by default, which keeps every
    /// line classified on its own.
    pub fenced_code_blocks: bool,
}

/// How mentions, hashtags and links are turned into hrefs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    /// Profile URL template; `{username}` is replaced with the encoded username.
    pub profile_path: String,
    /// Tag page URL template; `{tag}` is replaced with the encoded tag.
    pub tag_path: String,
    /// Hosts whose absolute URLs still count as internal links.
    pub internal_hosts: Vec<String>,
    /// `rel` attribute for external links. Empty means no attribute.
    pub external_rel: String,
    pub external_new_tab: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            profile_path: "/profile/{username}".to_string(),
            tag_path: "/tags/{tag}".to_string(),
            internal_hosts: Vec::new(),
            external_rel: "nofollow noopener noreferrer".to_string(),
            external_new_tab: true,
        }
    }
}

impl LinkOptions {
    pub fn profile_href(&self, username: &str) -> String {
        self.profile_path.replace("{username}", &encode(username))
    }

    pub fn tag_href(&self, tag: &str) -> String {
        self.tag_path.replace("{tag}", &encode(tag))
    }
}

fn encode(name: &str) -> String {
    url::form_urlencoded::byte_serialize(name.as_bytes()).collect()
}

/// Everything needed to go from source text to serialized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub parse: ParseOptions,
    pub links: LinkOptions,
    /// Character budget of the plain text excerpt; 0 disables truncation.
    pub excerpt_max_chars: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            links: LinkOptions::default(),
            excerpt_max_chars: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_fill_templates() {
        let links = LinkOptions::default();
        assert_eq!(links.profile_href("alice"), "/profile/alice");
        assert_eq!(links.tag_href("pokemon"), "/tags/pokemon");
    }

    #[test]
    fn hrefs_encode_non_ascii_names() {
        let links = LinkOptions {
            tag_path: "https://cards.example/t/{tag}".into(),
            ..LinkOptions::default()
        };
        assert_eq!(links.profile_href("josé"), "/profile/jos%C3%A9");
        assert_eq!(links.tag_href("mtg"), "https://cards.example/t/mtg");
    }
}
