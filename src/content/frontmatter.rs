//! Front-matter parsing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::error::{ContentError, ContentResult};

/// Line that opens and closes a front-matter block
pub const DELIMITER: &str = "---";

/// Format of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Front-matter keys every post must define, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 7] = [
    "title",
    "subtitle",
    "date",
    "tags",
    "readingMinutes",
    "accent",
    "summary",
];

/// Front-matter data of a blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogFrontMatter {
    pub title: String,
    pub subtitle: String,
    /// ISO 8601 calendar date, kept as written
    pub date: String,
    pub tags: Vec<String>,
    pub reading_minutes: u32,
    /// Decorative style token, opaque to the pipeline
    pub accent: String,
    pub summary: String,
}

impl BlogFrontMatter {
    /// Parse front-matter from a post file.
    /// Returns (front_matter, remaining_content)
    pub fn parse<'a>(slug: &str, content: &'a str) -> ContentResult<(Self, &'a str)> {
        let (data, body) = split(slug, content)?;
        let fm = Self::from_mapping(slug, &data)?;
        Ok((fm, body))
    }

    /// Build typed front-matter from an already parsed key-value block
    pub fn from_mapping(slug: &str, data: &Mapping) -> ContentResult<Self> {
        for field in REQUIRED_FIELDS {
            required(slug, data, field)?;
        }

        let title = scalar_string(slug, "title", required(slug, data, "title")?)?;
        if title.trim().is_empty() {
            return Err(invalid(slug, "title", "must not be empty"));
        }

        let date = scalar_string(slug, "date", required(slug, data, "date")?)?;
        if parse_date(&date).is_none() {
            return Err(invalid(slug, "date", "expected a YYYY-MM-DD date"));
        }

        Ok(Self {
            title,
            subtitle: scalar_string(slug, "subtitle", required(slug, data, "subtitle")?)?,
            date,
            tags: string_list(slug, "tags", required(slug, data, "tags")?)?,
            reading_minutes: positive_int(
                slug,
                "readingMinutes",
                required(slug, data, "readingMinutes")?,
            )?,
            accent: scalar_string(slug, "accent", required(slug, data, "accent")?)?,
            summary: scalar_string(slug, "summary", required(slug, data, "summary")?)?,
        })
    }

    /// Parse the date string into a calendar date
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Split the YAML block from the body.
///
/// Content without an opening delimiter has no front-matter and yields an
/// empty mapping. An opening delimiter without a closing one is malformed.
fn split<'a>(slug: &str, content: &'a str) -> ContentResult<(Mapping, &'a str)> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    let Some(after_open) = content.strip_prefix(DELIMITER) else {
        return Ok((Mapping::new(), content));
    };
    let (open_rest, rest) = after_open.split_once('\n').unwrap_or((after_open, ""));
    if !open_rest.trim().is_empty() {
        // "----" or "--- text" is markdown, not a front-matter fence
        return Ok((Mapping::new(), content));
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let data = parse_yaml(slug, &rest[..offset])?;
            return Ok((data, &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(ContentError::Parse {
        slug: slug.to_string(),
        message: "unterminated front-matter block".to_string(),
    })
}

fn parse_yaml(slug: &str, yaml: &str) -> ContentResult<Mapping> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let value: Value = serde_yaml::from_str(yaml).map_err(|e| ContentError::Parse {
        slug: slug.to_string(),
        message: e.to_string(),
    })?;

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(ContentError::Parse {
            slug: slug.to_string(),
            message: "front-matter is not a key-value mapping".to_string(),
        }),
    }
}

/// Look up a required key; `null` counts as absent
fn required<'m>(slug: &str, data: &'m Mapping, field: &'static str) -> ContentResult<&'m Value> {
    match data.get(field) {
        Some(Value::Null) | None => Err(ContentError::MissingField {
            slug: slug.to_string(),
            field,
        }),
        Some(value) => Ok(value),
    }
}

fn invalid(slug: &str, field: &'static str, reason: &str) -> ContentError {
    ContentError::InvalidField {
        slug: slug.to_string(),
        field,
        reason: reason.to_string(),
    }
}

/// Scalars are accepted as text; collections are not
fn scalar_string(slug: &str, field: &'static str, value: &Value) -> ContentResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(invalid(slug, field, "expected a string")),
    }
}

/// A list of scalars, or a single string as a one-element list
fn string_list(slug: &str, field: &'static str, value: &Value) -> ContentResult<Vec<String>> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(|item| scalar_string(slug, field, item))
            .collect(),
        Value::String(s) => Ok(vec![s.clone()]),
        _ => Err(invalid(slug, field, "expected a list of strings")),
    }
}

fn positive_int(slug: &str, field: &'static str, value: &Value) -> ContentResult<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n > 0 => Ok(n),
        _ => Err(invalid(slug, field, "expected a positive integer")),
    }
}
