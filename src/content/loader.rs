//! Content loader - loads blog posts from the content directory

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, ContentResult};
use super::post::{sort_posts, summarize};
use super::{BlogFrontMatter, BlogPost, BlogPostSummary};
use crate::Folio;

/// Extension of post files
const POST_EXTENSION: &str = "md";

/// Outcome of a load that skips malformed posts
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Posts that loaded, newest first
    pub posts: Vec<BlogPost>,
    /// Slug and error of every post that failed
    pub failures: Vec<(String, ContentError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Loads blog posts from a content root.
///
/// Every call reads from disk; nothing is cached between calls.
pub struct ContentLoader {
    root: PathBuf,
    exclude: Vec<String>,
}

impl ContentLoader {
    /// Create a loader for a content root, excluding `README.md`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: vec!["README.md".to_string()],
        }
    }

    /// Create a loader from site configuration
    pub fn from_site(folio: &Folio) -> Self {
        Self::new(&folio.content_dir).with_exclude(folio.config.exclude.clone())
    }

    /// Replace the list of excluded file names
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Create the content root if it does not exist yet
    pub fn ensure_content_root(&self) -> ContentResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|source| ContentError::Io {
                path: self.root.clone(),
                source,
            })?;
            tracing::info!("Created content directory {:?}", self.root);
        }
        Ok(())
    }

    /// Slugs of every post file, in lexical order
    pub fn list_slugs(&self) -> ContentResult<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut slugs = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Unreadable entries only matter for the root itself or a post
                    let fatal = e.depth() == 0
                        || e.path()
                            .and_then(Path::file_name)
                            .and_then(|n| n.to_str())
                            .map_or(false, |n| self.slug_for(n).is_some());
                    if !fatal {
                        tracing::debug!("Skipping unreadable entry {:?}: {}", e.path(), e);
                        continue;
                    }
                    return Err(ContentError::Io {
                        path: e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone()),
                        source: e.into(),
                    });
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                tracing::debug!("Skipping non UTF-8 file name {:?}", entry.path());
                continue;
            };

            if let Some(slug) = self.slug_for(name) {
                slugs.push(slug.to_string());
            }
        }

        slugs.sort();
        Ok(slugs)
    }

    /// Load a single post. Returns `Ok(None)` when no file exists for the slug.
    pub fn post_by_slug(&self, slug: &str) -> ContentResult<Option<BlogPost>> {
        let file_name = format!("{}.{}", slug, POST_EXTENSION);
        if !is_plain_slug(slug) || self.slug_for(&file_name).is_none() {
            return Ok(None);
        }

        let path = self.root.join(&file_name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ContentError::Io { path, source }),
        };

        let (fm, body) = BlogFrontMatter::parse(slug, &content)?;
        tracing::debug!("Loaded post {} ({})", slug, fm.date);

        Ok(Some(BlogPost::new(slug, fm, body)))
    }

    /// Load a post that must exist
    pub fn require_post(&self, slug: &str) -> ContentResult<BlogPost> {
        self.post_by_slug(slug)?.ok_or_else(|| ContentError::NotFound {
            slug: slug.to_string(),
        })
    }

    /// Load every post, newest first.
    ///
    /// The first malformed post aborts the whole load; see
    /// [`ContentLoader::load_all_lenient`] for a partial result instead.
    pub fn all_posts(&self) -> ContentResult<Vec<BlogPost>> {
        let mut posts = Vec::new();

        for slug in self.list_slugs()? {
            // A file removed between listing and loading is not an error
            if let Some(post) = self.post_by_slug(&slug)? {
                posts.push(post);
            }
        }

        sort_posts(&mut posts);
        Ok(posts)
    }

    /// Load every post, skipping and reporting the ones that fail
    pub fn load_all_lenient(&self) -> ContentResult<LoadReport> {
        let mut report = LoadReport::default();

        for slug in self.list_slugs()? {
            match self.post_by_slug(&slug) {
                Ok(Some(post)) => report.posts.push(post),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Skipping post {}: {}", slug, e);
                    report.failures.push((slug, e));
                }
            }
        }

        sort_posts(&mut report.posts);
        Ok(report)
    }

    /// Summaries of every post, in the same order as [`ContentLoader::all_posts`]
    pub fn post_summaries(&self) -> ContentResult<Vec<BlogPostSummary>> {
        Ok(summarize(&self.all_posts()?))
    }

    /// Newest posts other than `slug`, at most `limit`
    pub fn other_posts(&self, slug: &str, limit: usize) -> ContentResult<Vec<BlogPostSummary>> {
        Ok(self
            .post_summaries()?
            .into_iter()
            .filter(|post| post.slug != slug)
            .take(limit)
            .collect())
    }

    /// Slug for a file name, or `None` if the file is not a post
    fn slug_for<'n>(&self, file_name: &'n str) -> Option<&'n str> {
        if file_name.starts_with('_') || self.exclude.iter().any(|e| e == file_name) {
            return None;
        }
        file_name
            .strip_suffix(POST_EXTENSION)
            .and_then(|stem| stem.strip_suffix('.'))
            .filter(|stem| !stem.is_empty())
    }
}

/// A slug must name a file directly inside the content root
fn is_plain_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
        && !slug.contains('\0')
}
