//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single URL path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/") // -> "/EvenNewerPersonalWebsite/blog/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Site-relative path of a post page. The site is exported with trailing slashes.
pub fn post_path(slug: &str) -> String {
    format!("blog/{}/", encode_segment(slug))
}

/// Absolute URL of a post, as shared by the "Share" link
pub fn permalink(config: &SiteConfig, slug: &str) -> String {
    full_url_for(config, &post_path(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            root: "/EvenNewerPersonalWebsite/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/blog/"), "/EvenNewerPersonalWebsite/blog/");
        assert_eq!(url_for(&config, ""), "/EvenNewerPersonalWebsite/");
    }

    #[test]
    fn test_url_for_default_root() {
        let config = SiteConfig::default();
        assert_eq!(url_for(&config, "blog/"), "/blog/");
    }

    #[test]
    fn test_permalink() {
        let config = test_config();
        assert_eq!(
            permalink(&config, "welcome-to-my-blog"),
            "https://example.com/EvenNewerPersonalWebsite/blog/welcome-to-my-blog/"
        );
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("a b?c"), "a%20b%3Fc");
        assert_eq!(encode_segment("plain-slug_1"), "plain-slug_1");
    }
}
