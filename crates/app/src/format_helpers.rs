//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};

/// Format a timestamp as "Jan 20, 2026" (date-only, human-readable).
pub fn format_date_human(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as "Jan 20, 2026 9:35 PM" (with 12-hour time).
pub fn format_datetime_human(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn formats_date_without_zero_padding() {
        assert_eq!(format_date_human(&ts("2026-01-05T00:00:00Z")), "Jan 5, 2026");
        assert_eq!(
            format_date_human(&ts("2026-12-31T23:59:59Z")),
            "Dec 31, 2026"
        );
    }

    #[test]
    fn formats_datetime_with_twelve_hour_clock() {
        assert_eq!(
            format_datetime_human(&ts("2026-01-20T21:35:00Z")),
            "Jan 20, 2026 9:35 PM"
        );
        assert_eq!(
            format_datetime_human(&ts("2026-01-20T00:05:00Z")),
            "Jan 20, 2026 12:05 AM"
        );
    }
}
