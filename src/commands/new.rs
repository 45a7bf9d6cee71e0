//! Create a new post

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::BlogFrontMatter;
use crate::Folio;

/// Accent used for posts created from the command line
const DEFAULT_ACCENT: &str = "from-blue-400 to-purple-400";

/// Scaffold `<slug>.md` with every required field filled in
pub fn create_post(
    folio: &Folio,
    title: &str,
    slug: Option<&str>,
    tags: &[String],
) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        bail!("Cannot derive a slug from title {:?}", title);
    }

    folio.ensure_content_root()?;
    let file_path = folio.content_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let front_matter = BlogFrontMatter {
        title: title.to_string(),
        subtitle: String::new(),
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        tags: tags.to_vec(),
        reading_minutes: 1,
        accent: DEFAULT_ACCENT.to_string(),
        summary: String::new(),
    };

    let content = format!(
        "---\n{}---\n\nWrite your post here.\n",
        serde_yaml::to_string(&front_matter)?
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_created_post_loads_back() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_post(&folio, "Hello: \"World\"", None, &["meta".to_string()]).unwrap();
        assert_eq!(path, folio.content_dir.join("hello-world.md"));

        let post = folio.loader().require_post("hello-world").unwrap();
        assert_eq!(post.front_matter.title, "Hello: \"World\"");
        assert_eq!(post.front_matter.tags, vec!["meta"]);
        assert_eq!(post.front_matter.reading_minutes, 1);
        assert_eq!(post.body, "Write your post here.");
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        create_post(&folio, "Twice", None, &[]).unwrap();
        assert!(create_post(&folio, "Twice", None, &[]).is_err());
    }

    #[test]
    fn test_explicit_slug() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_post(&folio, "Anything", Some("My Slug"), &[]).unwrap();
        assert!(path.ends_with("my-slug.md"));
    }
}
