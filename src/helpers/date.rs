//! Date helper functions

use chrono::{DateTime, Local, NaiveDate};

/// Format a date with a chrono format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "%b %-d, %Y") // -> "Feb 11, 2026"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Parse a date in the formats post metadata commonly uses
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Display form of a post's `pubDate`: today when absent, the raw text
/// when it cannot be parsed
pub fn display_date(raw: Option<&str>, format: &str) -> String {
    match raw {
        None => format_date(&Local::now().date_naive(), format),
        Some(raw) => match parse_date(raw) {
            Some(date) => format_date(&date, format),
            None => raw.to_string(),
        },
    }
}

/// Generate a <time> HTML element
pub fn time_tag(date: &NaiveDate, format: &str) -> String {
    format!(
        r#"<time datetime="{}">{}</time>"#,
        date.format("%Y-%m-%d"),
        format_date(date, format)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: &str = "%b %-d, %Y";

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
        assert_eq!(format_date(&date, FORMAT), "Feb 11, 2026");
        let date = NaiveDate::from_ymd_opt(2024, 5, 9).unwrap();
        assert_eq!(format_date(&date, FORMAT), "May 9, 2024");
    }

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15);
        assert_eq!(parse_date("2024-01-15"), expected);
        assert_eq!(parse_date(" 2024/01/15 "), expected);
        assert_eq!(parse_date("2024-01-15T10:30:00+02:00"), expected);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(Some("2024-06-05"), FORMAT), "Jun 5, 2024");
        assert_eq!(display_date(Some("soon"), FORMAT), "soon");
        let today = format_date(&Local::now().date_naive(), FORMAT);
        assert_eq!(display_date(None, FORMAT), today);
    }

    #[test]
    fn test_time_tag() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(
            time_tag(&date, FORMAT),
            r#"<time datetime="2024-06-05">Jun 5, 2024</time>"#
        );
    }
}
