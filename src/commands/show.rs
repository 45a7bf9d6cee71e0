//! Show a single post

use anyhow::Result;

use crate::helpers::{format_display_date, long_date, permalink};
use crate::Folio;

/// Print a post with its metadata and the "keep reading" list
pub fn run(folio: &Folio, slug: &str, html: bool) -> Result<()> {
    let loader = folio.loader();
    let post = loader.require_post(slug)?;
    let fm = &post.front_matter;

    println!("{}", fm.title);
    println!("{}", fm.subtitle);
    println!(
        "{} · {} min read · {}",
        long_date(&fm.date),
        fm.reading_minutes,
        fm.tags.join(", ")
    );
    println!("{}", permalink(&folio.config, &post.slug));
    println!();

    if html {
        println!("{}", post.render_html(&folio.renderer())?);
    } else {
        println!("{}", post.body);
    }

    let others = loader.other_posts(&post.slug, folio.config.related_posts)?;
    if !others.is_empty() {
        println!();
        println!("Keep reading:");
        for other in others {
            println!(
                "  {} - {} [{}]",
                format_display_date(&other.front_matter.date),
                other.front_matter.title,
                other.slug
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentError;
    use std::fs;
    use tempfile::TempDir;

    const POST: &str = "---\ntitle: Hi\nsubtitle: s\ndate: 2024-06-10\ntags: [a]\nreadingMinutes: 1\naccent: a\nsummary: x\n---\n# Heading\n";

    #[test]
    fn test_show_missing_post() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        folio.ensure_content_root().unwrap();

        let err = run(&folio, "ghost", false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ContentError>(),
            Some(ContentError::NotFound { slug }) if slug == "ghost"
        ));
    }

    #[test]
    fn test_show_post() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        folio.ensure_content_root().unwrap();
        fs::write(folio.content_dir.join("hi.md"), POST).unwrap();
        fs::write(folio.content_dir.join("next.md"), POST).unwrap();

        assert!(run(&folio, "hi", false).is_ok());
        assert!(run(&folio, "hi", true).is_ok());
    }
}
