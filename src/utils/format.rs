//! Display formatting for fetched content.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Human-readable publish date, e.g. "January 5, 2026".
///
/// The API serves `2026-01-05T12:34:56`; date-only strings are accepted
/// too. Unparseable input is displayed as-is rather than dropped.
pub fn display_date(raw: &str) -> String {
    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|datetime| datetime.date())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => format!("{} {}, {}", date.format("%B"), date.day(), date.year()),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_from_api_timestamp() {
        assert_eq!(display_date("2026-01-05T12:34:56"), "January 5, 2026");
        assert_eq!(display_date("2023-12-31T00:00:00"), "December 31, 2023");
    }

    #[test]
    fn test_display_date_from_date_only() {
        assert_eq!(display_date("2026-07-04"), "July 4, 2026");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        assert_eq!(display_date("yesterday"), "yesterday");
        assert_eq!(display_date(""), "");
    }
}
