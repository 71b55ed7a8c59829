//! Calendar date formatting for upstream timestamps
//!
//! Renders `YYYY/M/D`, e.g. "2025-06-30T08:00:00+08:00" -> "2025/6/30".
//! Timestamps keep the calendar date of their own offset; epoch
//! milliseconds are read as UTC.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Shortest digit string read as epoch milliseconds rather than a date
const EPOCH_MILLIS_MIN_LEN: usize = 11;

pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.len() >= EPOCH_MILLIS_MIN_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
        let millis: i64 = raw.parse().ok()?;
        return DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    // drop fractional seconds before trying the naive layouts
    let without_fraction = raw.split('.').next().unwrap_or(raw);
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(without_fraction, f).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        })
}

/// `YYYY/M/D`, or "" when the input is missing or not a date
pub fn format_calendar_date(raw: Option<&str>) -> String {
    raw.and_then(parse_calendar_date)
        .map(|d| format!("{}/{}/{}", d.year(), d.month(), d.day()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_calendar_date(Some("2025-06-30")), "2025/6/30");
        assert_eq!(format_calendar_date(Some("2025/01/05")), "2025/1/5");
    }

    #[test]
    fn test_format_datetime_variants() {
        assert_eq!(format_calendar_date(Some("2025-06-30 18:30:00")), "2025/6/30");
        assert_eq!(format_calendar_date(Some("2025-06-30T18:30:00.123")), "2025/6/30");
        assert_eq!(
            format_calendar_date(Some("2025-06-30T23:30:00+08:00")),
            "2025/6/30"
        );
        assert_eq!(format_calendar_date(Some("2024-12-31T10:00:00Z")), "2024/12/31");
    }

    #[test]
    fn test_format_epoch_millis() {
        // 2025-06-30T00:00:00Z
        assert_eq!(format_calendar_date(Some("1751241600000")), "2025/6/30");
    }

    #[test]
    fn test_missing_or_invalid_is_empty() {
        assert_eq!(format_calendar_date(None), "");
        assert_eq!(format_calendar_date(Some("")), "");
        assert_eq!(format_calendar_date(Some("   ")), "");
        assert_eq!(format_calendar_date(Some("next week")), "");
        assert_eq!(format_calendar_date(Some("2025-13-40")), "");
    }
}
