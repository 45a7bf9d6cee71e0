//! Validate every post in the content directory

use anyhow::{bail, Result};

use crate::Folio;

/// Load all posts leniently and report each failure
pub fn run(folio: &Folio) -> Result<()> {
    let report = folio.loader().load_all_lenient()?;

    for (slug, err) in &report.failures {
        println!("  x {}: {}", slug, err);
    }

    let total = report.posts.len() + report.failures.len();
    if !report.is_clean() {
        bail!("{} of {} posts failed to load", report.failures.len(), total);
    }

    println!("All {} posts are valid", total);
    Ok(())
}
