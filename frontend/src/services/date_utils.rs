use chrono::{DateTime, NaiveDate, NaiveDateTime};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse the calendar date out of a backend timestamp.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS`
/// and plain `YYYY-MM-DD`. The date is taken as written; no timezone shifting.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// "January 15, 2025". Unparseable input is returned verbatim.
pub fn format_long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "1/15/2025". Unparseable input is returned verbatim.
pub fn format_short_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Chart axis labels: one month abbreviation per data point, starting at January
pub fn month_labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| MONTH_ABBREVIATIONS[i % MONTH_ABBREVIATIONS.len()].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2025-01-15"), "January 15, 2025");
        assert_eq!(format_long_date("2024-03-05T14:30:00Z"), "March 5, 2024");
        assert_eq!(format_long_date("2024-12-31T23:59:59-05:00"), "December 31, 2024");
        assert_eq!(format_long_date("2024-07-04T09:00:00"), "July 4, 2024");
        assert_eq!(format_long_date("2024-07-04 09:00:00"), "July 4, 2024");
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2025-01-15"), "1/15/2025");
        assert_eq!(format_short_date("2023-11-02T08:15:00.250Z"), "11/2/2023");
    }

    #[test]
    fn test_invalid_dates_pass_through() {
        assert_eq!(format_long_date("yesterday"), "yesterday");
        assert_eq!(format_short_date(""), "");
        assert!(parse_date("2025-13-01").is_none());
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(month_labels(6), vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(month_labels(13).last().map(String::as_str), Some("Jan"));
        assert!(month_labels(0).is_empty());
    }
}
