//! Content error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading a single post
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Blog post not found: {slug}")]
    NotFound { slug: String },

    #[error("Malformed front-matter in blog post {slug}: {message}")]
    Parse { slug: String, message: String },

    #[error("Missing \"{field}\" in blog post frontmatter: {slug}")]
    MissingField { slug: String, field: &'static str },

    #[error("Invalid \"{field}\" in blog post frontmatter: {slug} ({reason})")]
    InvalidField {
        slug: String,
        field: &'static str,
        reason: String,
    },

    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Slug of the post the error belongs to, if any
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::NotFound { slug }
            | Self::Parse { slug, .. }
            | Self::MissingField { slug, .. }
            | Self::InvalidField { slug, .. } => Some(slug),
            Self::Io { .. } => None,
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ContentError::MissingField {
            slug: "hello".to_string(),
            field: "tags",
        };
        assert_eq!(err.to_string(), "Missing \"tags\" in blog post frontmatter: hello");
        assert_eq!(err.slug(), Some("hello"));
    }

    #[test]
    fn test_io_has_no_slug() {
        let err = ContentError::Io {
            path: PathBuf::from("content/blog"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.slug(), None);
        assert!(err.to_string().contains("denied"));
    }
}
