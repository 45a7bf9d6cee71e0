//! folio-rs: markdown-backed blog content for a personal portfolio site
//!
//! Posts live as `<slug>.md` files with YAML front-matter in a content
//! directory. This crate loads and validates them, projects listing
//! summaries and renders post bodies to HTML.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, MarkdownRenderer};

/// The site: configuration plus resolved directories
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the post files
    pub content_dir: PathBuf,
    /// Output directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Create the content directory if missing. Run once at startup.
    pub fn ensure_content_root(&self) -> Result<()> {
        self.loader().ensure_content_root()?;
        Ok(())
    }

    /// Content loader for this site
    pub fn loader(&self) -> ContentLoader {
        ContentLoader::from_site(self)
    }

    /// Markdown renderer using the site's highlight settings
    pub fn renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::from_config(&self.config.highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.content_dir, dir.path().join("content/blog"));
        assert_eq!(folio.public_dir, dir.path().join("public"));
    }

    #[test]
    fn test_reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "content_dir: posts\n").unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.content_dir, dir.path().join("posts"));
    }

    #[test]
    fn test_ensure_content_root() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(!folio.content_dir.exists());
        folio.ensure_content_root().unwrap();
        assert!(folio.content_dir.is_dir());
    }
}
