//! List site content

use anyhow::Result;

use crate::content::query::{tag_counts, ListingQuery};
use crate::content::BlogPostSummary;
use crate::helpers::format_display_date;
use crate::Folio;

/// Summaries matching a query, in the query's order
pub fn listing(folio: &Folio, query: &ListingQuery) -> Result<Vec<BlogPostSummary>> {
    let summaries = folio.loader().post_summaries()?;
    Ok(query.apply(&summaries))
}

/// List posts matching a query
pub fn run(folio: &Folio, query: &ListingQuery) -> Result<()> {
    let posts = listing(folio, query)?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        let fm = &post.front_matter;
        println!(
            "  {} - {} [{}] {} min",
            format_display_date(&fm.date),
            fm.title,
            post.slug,
            fm.reading_minutes
        );
        if !fm.tags.is_empty() {
            println!("      tags: {}", fm.tags.join(", "));
        }
    }

    Ok(())
}

/// List tags with their post counts
pub fn tags(folio: &Folio) -> Result<()> {
    let summaries = folio.loader().post_summaries()?;
    let tags = tag_counts(&summaries);

    println!("Tags ({}):", tags.len());
    for (tag, count) in tags {
        println!("  {} ({})", tag, count);
    }

    Ok(())
}
