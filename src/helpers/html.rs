//! HTML helper functions

use serde::Serialize;

use super::date::{format_display_date, time_tag};
use super::url::{full_url_for, permalink, post_path, url_for};
use crate::config::SiteConfig;
use crate::content::{BlogPost, BlogPostSummary};

/// Page metadata for a blog page's <head>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    /// Document title
    pub title: String,
    pub description: String,
    /// Title used for social cards
    pub card_title: String,
    pub url: String,
    /// "article" for posts, "website" for listings
    pub og_type: &'static str,
}

impl PostMeta {
    /// Metadata of a post detail page
    pub fn for_post(post: &BlogPost, config: &SiteConfig) -> Self {
        let fm = &post.front_matter;
        Self {
            title: format!("{} — Blog", fm.title),
            description: fm.subtitle.clone(),
            card_title: fm.title.clone(),
            url: permalink(config, &post.slug),
            og_type: "article",
        }
    }

    /// Metadata of the blog index page
    pub fn for_listing(config: &SiteConfig) -> Self {
        let title = if config.author.is_empty() {
            "Blog".to_string()
        } else {
            format!("Blog — {}", config.author)
        };
        Self {
            card_title: title.clone(),
            title,
            description: config.description.clone(),
            url: full_url_for(config, "blog/"),
            og_type: "website",
        }
    }

    /// Render <title>, description, Open Graph and Twitter card tags
    pub fn to_html(&self) -> String {
        let mut tags = vec![
            format!("<title>{}</title>", html_escape(&self.title)),
            format!(
                r#"<meta property="og:type" content="{}">"#,
                self.og_type
            ),
            format!(
                r#"<meta property="og:title" content="{}">"#,
                html_escape(&self.card_title)
            ),
            format!(
                r#"<meta property="og:url" content="{}">"#,
                html_escape(&self.url)
            ),
        ];

        if !self.description.is_empty() {
            let description = html_escape(&self.description);
            tags.push(format!(
                r#"<meta name="description" content="{}">"#,
                description
            ));
            tags.push(format!(
                r#"<meta property="og:description" content="{}">"#,
                description
            ));
        }

        if self.og_type == "article" {
            tags.push(r#"<meta name="twitter:card" content="summary_large_image">"#.to_string());
            tags.push(format!(
                r#"<meta name="twitter:title" content="{}">"#,
                html_escape(&self.card_title)
            ));
            if !self.description.is_empty() {
                tags.push(format!(
                    r#"<meta name="twitter:description" content="{}">"#,
                    html_escape(&self.description)
                ));
            }
        }

        tags.join("\n")
    }
}

/// Full HTML document of a post page around its rendered body
pub fn post_page(post: &BlogPost, body_html: &str, config: &SiteConfig) -> String {
    let fm = &post.front_matter;
    let tags: String = fm
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
        .collect();

    let header = format!(
        r#"<header class="bg-gradient-to-br {accent}">
<div class="tags">{tags}</div>
{time}
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
<span class="reading-time">{minutes} minute read</span>
</header>"#,
        accent = html_escape(&fm.accent),
        tags = tags,
        time = time_tag(&fm.date),
        title = html_escape(&fm.title),
        subtitle = html_escape(&fm.subtitle),
        minutes = fm.reading_minutes,
    );

    document(
        &PostMeta::for_post(post, config),
        &format!(
            "<article>\n{}\n<div class=\"post-body\">\n{}</div>\n</article>",
            header, body_html
        ),
    )
}

/// Full HTML document of the blog index, posts in the given order
pub fn listing_page(posts: &[BlogPostSummary], config: &SiteConfig) -> String {
    let cards: Vec<String> = posts
        .iter()
        .map(|post| {
            let fm = &post.front_matter;
            format!(
                r#"<li><a href="{href}"><span class="date">{date}</span> <strong>{title}</strong></a><p>{summary}</p></li>"#,
                href = html_escape(&url_for(config, &post_path(&post.slug))),
                date = format_display_date(&fm.date),
                title = html_escape(&fm.title),
                summary = html_escape(&fm.summary),
            )
        })
        .collect();

    let list = if cards.is_empty() {
        "<p>No posts yet.</p>".to_string()
    } else {
        format!("<ul class=\"posts\">\n{}\n</ul>", cards.join("\n"))
    };

    document(
        &PostMeta::for_listing(config),
        &format!("<main>\n<h1>Blog</h1>\n{}\n</main>", list),
    )
}

fn document(meta: &PostMeta, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n{}\n</head>\n<body>\n{}\n</body>\n</html>\n",
        meta.to_html(),
        body
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
