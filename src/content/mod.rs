//! Content module - handles blog posts, front-matter and markdown rendering

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod query;

pub use error::{ContentError, ContentResult};
pub use frontmatter::{parse_date, BlogFrontMatter, REQUIRED_FIELDS};
pub use loader::{ContentLoader, LoadReport};
pub use markdown::MarkdownRenderer;
pub use post::{newest_first, sort_posts, summarize, BlogPost, BlogPostSummary};
