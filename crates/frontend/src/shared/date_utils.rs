/// Utilities for date formatting
///
/// Booking dates arrive either as plain dates or as full timestamps, these
/// helpers turn both into what the tables and the date inputs expect.
use chrono::{Datelike, Weekday};
use contracts::shared::date::parse_date;

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

/// Format a date as a long Indonesian date
/// Example: "2024-03-15T00:00:00.000Z" -> "Jumat, 15 Maret 2024"
pub fn format_date_long(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(dt) => format!(
            "{}, {} {} {}",
            weekday_name(dt.weekday()),
            dt.day(),
            MONTHS[dt.month0() as usize],
            dt.year()
        ),
        None => date_str.to_string(),
    }
}

/// Value for an `<input type="date">`
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15"
pub fn to_input_date(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or(date_str).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_long("2024-03-15"), "Jumat, 15 Maret 2024");
        assert_eq!(
            format_date_long("2024-12-01T09:30:00.000Z"),
            "Minggu, 1 Desember 2024"
        );
    }

    #[test]
    fn test_to_input_date() {
        assert_eq!(to_input_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(to_input_date("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date_long("invalid"), "invalid");
        assert_eq!(to_input_date(""), "");
    }
}
