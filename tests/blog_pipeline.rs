//! End-to-end tests of the blog content pipeline against a temporary content root

use std::fs;
use std::path::Path;

use folio_rs::content::{summarize, ContentError, ContentLoader};
use tempfile::TempDir;

fn post_file(title: &str, date: &str, tags: &str) -> String {
    format!(
        r#"---
title: "{title}"
subtitle: "Subtitle of {title}"
date: "{date}"
tags: {tags}
readingMinutes: 5
accent: "from-emerald-400 to-cyan-400"
summary: "Summary of {title}"
---

Body of **{title}**.

"#
    )
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn post_fields_match_frontmatter() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "welcome.md",
        r#"---
title: "Welcome to My Blog"
subtitle: "First post"
date: "2024-06-10"
tags: ["meta"]
readingMinutes: 2
accent: "from-blue-400 to-purple-400"
summary: "Kickoff post."
---
This is the **body** in markdown.
"#,
    );

    let loader = ContentLoader::new(dir.path());
    let post = loader.post_by_slug("welcome").unwrap().unwrap();
    let fm = &post.front_matter;

    assert_eq!(post.slug, "welcome");
    assert_eq!(fm.title, "Welcome to My Blog");
    assert_eq!(fm.subtitle, "First post");
    assert_eq!(fm.date, "2024-06-10");
    assert_eq!(fm.tags, vec!["meta"]);
    assert_eq!(fm.reading_minutes, 2);
    assert_eq!(fm.accent, "from-blue-400 to-purple-400");
    assert_eq!(fm.summary, "Kickoff post.");
    assert_eq!(post.body, "This is the **body** in markdown.");
}

#[test]
fn unknown_slug_is_not_found() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "real.md", &post_file("Real", "2024-01-01", "[]"));

    let loader = ContentLoader::new(dir.path());
    assert!(loader.post_by_slug("imaginary").unwrap().is_none());
}

#[test]
fn missing_tags_names_field_and_slug() {
    let dir = TempDir::new().unwrap();
    let content = post_file("No Tags", "2024-01-01", "[]").replace("tags: []\n", "");
    write(dir.path(), "no-tags.md", &content);

    let loader = ContentLoader::new(dir.path());
    match loader.post_by_slug("no-tags") {
        Err(ContentError::MissingField { slug, field }) => {
            assert_eq!(slug, "no-tags");
            assert_eq!(field, "tags");
        }
        other => panic!("expected missing field error, got {other:?}"),
    }
}

#[test]
fn all_posts_newest_first() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "january.md", &post_file("January", "2024-01-01", "[]"));
    write(dir.path(), "june.md", &post_file("June", "2024-06-10", "[\"a\"]"));
    write(dir.path(), "march.md", &post_file("March", "2024-03-15", "[]"));

    let loader = ContentLoader::new(dir.path());
    let posts = loader.all_posts().unwrap();
    let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["june", "march", "january"]);

    let dates: Vec<_> = posts
        .iter()
        .map(|p| p.front_matter.published_on().unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn same_date_posts_ordered_by_slug() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "beta.md", &post_file("Beta", "2024-06-10", "[]"));
    write(dir.path(), "alpha.md", &post_file("Alpha", "2024-06-10", "[]"));

    let loader = ContentLoader::new(dir.path());
    let slugs: Vec<_> = loader
        .all_posts()
        .unwrap()
        .into_iter()
        .map(|p| p.slug)
        .collect();
    assert_eq!(slugs, vec!["alpha", "beta"]);
}

#[test]
fn summaries_match_posts_without_body() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "one.md", &post_file("One", "2024-01-01", "[\"x\"]"));
    write(dir.path(), "two.md", &post_file("Two", "2024-02-01", "[\"y\"]"));

    let loader = ContentLoader::new(dir.path());
    let posts = loader.all_posts().unwrap();
    let summaries = loader.post_summaries().unwrap();

    assert_eq!(summaries, summarize(&posts));
    for (summary, post) in summaries.iter().zip(&posts) {
        assert_eq!(summary.slug, post.slug);
        assert_eq!(summary.front_matter, post.front_matter);
    }

    let json = serde_json::to_value(&summaries).unwrap();
    for item in json.as_array().unwrap() {
        assert!(item.get("body").is_none());
    }
}

#[test]
fn one_malformed_post_fails_the_whole_load() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "good.md", &post_file("Good", "2024-01-01", "[]"));
    write(dir.path(), "broken.md", "---\ntitle: \"unterminated\nsubtitle: [\n---\nBody\n");

    let loader = ContentLoader::new(dir.path());
    let err = loader.all_posts().unwrap_err();
    assert!(matches!(err, ContentError::Parse { ref slug, .. } if slug == "broken"));

    // the lenient variant keeps the valid post
    let report = loader.load_all_lenient().unwrap();
    assert_eq!(report.posts.len(), 1);
    assert_eq!(report.posts[0].slug, "good");
    assert_eq!(report.failures.len(), 1);
}

#[test]
fn drafts_and_readme_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "post.md", &post_file("Post", "2024-01-01", "[]"));
    write(dir.path(), "_draft.md", &post_file("Draft", "2024-02-01", "[]"));
    write(dir.path(), "README.md", "# About this folder\n");
    write(dir.path(), "image.png", "not markdown");

    let loader = ContentLoader::new(dir.path());
    assert_eq!(loader.list_slugs().unwrap(), vec!["post"]);
    assert_eq!(loader.all_posts().unwrap().len(), 1);
}
