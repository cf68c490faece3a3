//! Date parsing for date-valued fields (booking dates).
//!
//! The API is not consistent about the shape of dates: the same field may come
//! back as `2024-03-15`, `2024-03-15T10:00:00` or a full RFC 3339 timestamp.
//! Ordering must be done on parsed values, string order breaks across
//! month/day boundaries as soon as formats mix.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date or datetime string into a naive UTC datetime.
///
/// Returns `None` for blank or unrecognised input.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
