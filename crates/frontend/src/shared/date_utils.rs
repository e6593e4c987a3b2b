/// Utilities for date formatting
///
/// Backend dates arrive either as a bare ISO date ("2023-01-01") or as a
/// full timestamp ("2023-03-05T00:00:00Z"). The calendar date is taken as
/// written in the value, without converting to the browser time zone.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an ISO date or timestamp into its calendar date
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format to "Month DD, YYYY"
/// Example: "2023-03-05T00:00:00Z" -> "March 05, 2023"
pub fn format_long_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => date.format("%B %d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// Format to "YYYY-MM-DD"
/// Example: "2023-03-05T00:00:00Z" -> "2023-03-05"
pub fn format_iso_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2023-03-05T00:00:00Z"), "March 05, 2023");
        assert_eq!(format_long_date("2024-12-31"), "December 31, 2024");
        assert_eq!(format_long_date("2024-01-09T14:02:26.123"), "January 09, 2024");
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2023-03-05T00:00:00Z"), "2023-03-05");
        assert_eq!(format_iso_date("2023-01-01"), "2023-01-01");
        assert_eq!(format_iso_date("2023-03-05T23:30:00-05:00"), "2023-03-05");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_long_date("invalid"), "invalid");
        assert_eq!(format_iso_date(""), "");
    }
}
