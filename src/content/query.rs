//! Listing queries - search, tag filtering and ordering of post summaries

use std::collections::HashMap;

use super::post::{newest_first, BlogPostSummary};

/// Order of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

/// Filter and order applied to a listing of summaries
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Case-insensitive text matched against title, subtitle and summary
    pub search: Option<String>,
    /// Case-insensitive exact tag match
    pub tag: Option<String>,
    pub order: SortOrder,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Whether a single summary passes the filters
    pub fn matches(&self, post: &BlogPostSummary) -> bool {
        let fm = &post.front_matter;

        let text_match = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let q = q.to_lowercase();
                [&fm.title, &fm.subtitle, &fm.summary]
                    .iter()
                    .any(|s| s.to_lowercase().contains(&q))
            }
        };

        let tag_match = match self.tag.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(t) => fm.tags.iter().any(|tag| tag.eq_ignore_ascii_case(t)),
        };

        text_match && tag_match
    }

    /// Filter and order a listing
    pub fn apply(&self, posts: &[BlogPostSummary]) -> Vec<BlogPostSummary> {
        let mut result: Vec<_> = posts.iter().filter(|p| self.matches(p)).cloned().collect();

        result.sort_by(|a, b| {
            let (a_date, b_date) = (a.published_on(), b.published_on());
            match self.order {
                SortOrder::Newest => newest_first(a_date, &a.slug, b_date, &b.slug),
                SortOrder::Oldest => a_date.cmp(&b_date).then_with(|| a.slug.cmp(&b.slug)),
            }
        });

        result
    }
}

/// Number of posts per tag, most used first, then by name
pub fn tag_counts(posts: &[BlogPostSummary]) -> Vec<(String, usize)> {
    let mut tags: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.front_matter.tags {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<_> = tags
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}
