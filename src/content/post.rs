//! Post and summary models

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{BlogFrontMatter, MarkdownRenderer};

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Slug (filename stem), the lookup key and URL path segment
    pub slug: String,

    /// Front-matter fields
    #[serde(flatten)]
    pub front_matter: BlogFrontMatter,

    /// Markdown after the front-matter block, trimmed
    pub body: String,
}

impl BlogPost {
    pub fn new(slug: impl Into<String>, front_matter: BlogFrontMatter, body: &str) -> Self {
        Self {
            slug: slug.into(),
            front_matter,
            body: body.trim().to_string(),
        }
    }

    /// Render the markdown body to HTML
    pub fn render_html(&self, renderer: &MarkdownRenderer) -> Result<String> {
        renderer.render(&self.body)
    }

    /// Body-less view for listings
    pub fn summary(&self) -> BlogPostSummary {
        BlogPostSummary::from(self)
    }
}

/// A post without its body, used for listings, search and filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub slug: String,

    #[serde(flatten)]
    pub front_matter: BlogFrontMatter,
}

impl BlogPostSummary {
    /// Parsed publication date
    pub fn published_on(&self) -> Option<NaiveDate> {
        self.front_matter.published_on()
    }
}

impl From<&BlogPost> for BlogPostSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            slug: post.slug.clone(),
            front_matter: post.front_matter.clone(),
        }
    }
}

impl From<BlogPost> for BlogPostSummary {
    fn from(post: BlogPost) -> Self {
        Self {
            slug: post.slug,
            front_matter: post.front_matter,
        }
    }
}

/// Project a collection of posts, keeping their order
pub fn summarize(posts: &[BlogPost]) -> Vec<BlogPostSummary> {
    posts.iter().map(BlogPostSummary::from).collect()
}

/// Newest first; equal dates fall back to slug order
pub fn newest_first(
    a_date: Option<NaiveDate>,
    a_slug: &str,
    b_date: Option<NaiveDate>,
    b_slug: &str,
) -> Ordering {
    b_date.cmp(&a_date).then_with(|| a_slug.cmp(b_slug))
}

/// Sort posts newest first
pub fn sort_posts(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| {
        newest_first(
            a.front_matter.published_on(),
            &a.slug,
            b.front_matter.published_on(),
            &b.slug,
        )
    });
}
