//! Build rendered post pages and the listing index

use anyhow::Result;
use std::fs;

use crate::content::summarize;
use crate::helpers::{listing_page, post_page};
use crate::Folio;

/// Name of the JSON listing index
pub const INDEX_FILE: &str = "index.json";

/// Name of the HTML page written for the listing and for each post directory
pub const PAGE_FILE: &str = "index.html";

/// Rebuild `<public_dir>/blog/` from scratch: one page per post at
/// `<slug>/index.html`, the listing page and the JSON summaries.
/// Returns the post count.
pub fn run(folio: &Folio) -> Result<usize> {
    let start = std::time::Instant::now();
    let loader = folio.loader();

    let posts = if folio.config.skip_invalid_posts {
        let report = loader.load_all_lenient()?;
        if !report.is_clean() {
            tracing::warn!("Skipped {} invalid posts", report.failures.len());
        }
        report.posts
    } else {
        loader.all_posts()?
    };

    let out_dir = folio.public_dir.join("blog");
    if out_dir.exists() {
        fs::remove_dir_all(&out_dir)?;
        tracing::debug!("Deleted: {:?}", out_dir);
    }
    fs::create_dir_all(&out_dir)?;

    let renderer = folio.renderer();
    for post in &posts {
        let body = post.render_html(&renderer)?;
        let post_dir = out_dir.join(&post.slug);
        fs::create_dir_all(&post_dir)?;
        fs::write(post_dir.join(PAGE_FILE), post_page(post, &body, &folio.config))?;
        tracing::debug!("Rendered {}", post.slug);
    }

    let summaries = summarize(&posts);
    fs::write(out_dir.join(PAGE_FILE), listing_page(&summaries, &folio.config))?;
    fs::write(out_dir.join(INDEX_FILE), serde_json::to_string_pretty(&summaries)?)?;

    tracing::info!(
        "Built {} posts in {:.2}s",
        posts.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(posts.len())
}
