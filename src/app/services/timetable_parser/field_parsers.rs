//! Field parsing utilities for timetable rows
//!
//! This module provides helper functions for reading named fields from a
//! mapped row and combining date and time columns into timestamps.

use super::row_mapping::CsvRow;
use crate::constants::{TIMETABLE_DATETIME_FORMAT, TIMETABLE_DATETIME_FORMAT_SECONDS};
use crate::{Error, Result};
use chrono::NaiveDateTime;

/// Get a field value, or an empty string when the column is absent
pub fn get_field<'a>(row: &'a CsvRow, field_name: &str) -> &'a str {
    row.get(field_name).map(String::as_str).unwrap_or_default()
}

/// Get a field value only when the column exists
pub fn get_optional_field<'a>(row: &'a CsvRow, field_name: &str) -> Option<&'a str> {
    row.get(field_name).map(String::as_str)
}

/// Check that a field exists and holds a non-empty value
pub fn has_value(row: &CsvRow, field_name: &str) -> bool {
    !get_field(row, field_name).is_empty()
}

/// Parse `"{date} {time}"` with the fixed `YYYY-MM-DD HH:mm` format
///
/// Times with a seconds component are accepted too.
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime> {
    let value = format!("{} {}", date.trim(), time.trim());

    NaiveDateTime::parse_from_str(&value, TIMETABLE_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&value, TIMETABLE_DATETIME_FORMAT_SECONDS))
        .map_err(|e| {
            Error::datetime_parsing(
                format!(
                    "Invalid timestamp '{}' (expected 'YYYY-MM-DD HH:MM')",
                    value
                ),
                e,
            )
        })
}

/// Parse a timestamp from a pair of named date and time columns
pub fn parse_required_timestamp(
    row: &CsvRow,
    date_field: &str,
    time_field: &str,
) -> Result<NaiveDateTime> {
    parse_timestamp(get_field(row, date_field), get_field(row, time_field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2025-09-22", "09:05").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 9, 22));
        assert_eq!((ts.hour(), ts.minute()), (9, 5));
    }

    #[test]
    fn test_parse_timestamp_with_seconds_and_padding() {
        let ts = parse_timestamp(" 2025-09-22 ", "14:00:00").unwrap();
        assert_eq!(ts.hour(), 14);
    }

    #[test]
    fn test_parse_timestamp_rejects_other_formats() {
        assert!(parse_timestamp("22/09/2025", "09:00").is_err());
        assert!(parse_timestamp("2025-09-22", "").is_err());
        assert!(matches!(
            parse_timestamp("2025-13-01", "09:00"),
            Err(Error::DateTimeParsing { .. })
        ));
    }

    #[test]
    fn test_field_lookup() {
        let mut row = CsvRow::new();
        row.insert("Type".to_string(), "Lecture".to_string());
        row.insert("Room(s)".to_string(), String::new());

        assert_eq!(get_field(&row, "Type"), "Lecture");
        assert_eq!(get_field(&row, "Missing"), "");
        assert_eq!(get_optional_field(&row, "Room(s)"), Some(""));
        assert_eq!(get_optional_field(&row, "Missing"), None);
        assert!(has_value(&row, "Type"));
        assert!(!has_value(&row, "Room(s)"));
    }
}
