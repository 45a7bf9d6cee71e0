//! Date helper functions

use crate::content::parse_date;

/// Short date shown on listing cards, like "Jun 10, 2024".
/// Unparseable input is returned unchanged.
pub fn format_display_date(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Long date shown in a post header, like "Mon Jun 10 2024"
pub fn long_date(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%a %b %d %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Generate a <time> HTML element
pub fn time_tag(date: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date.trim(),
        long_date(date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-06-10"), "Jun 10, 2024");
        assert_eq!(format_display_date("2024-06-01"), "Jun 1, 2024");
        assert_eq!(format_display_date("someday"), "someday");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date("2024-06-10"), "Mon Jun 10 2024");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(time_tag("2024-06-10"), r#"<time datetime="2024-06-10">Mon Jun 10 2024</time>"#);
    }
}
