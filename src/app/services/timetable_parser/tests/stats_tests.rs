//! Tests for parsing statistics functionality

use super::super::stats::ParseStats;
use super::*;
use crate::app::services::timetable_parser::TimetableParser;

#[test]
fn test_parse_stats_from_document() {
    let parser = TimetableParser::standard();
    let result = parser
        .parse_document("level4.csv", &create_test_timetable_csv())
        .unwrap();
    let stats = &result.stats;

    assert_eq!(stats.header_line, 3);
    assert_eq!(stats.total_rows, 6);
    assert_eq!(stats.items_parsed, 4);
    assert_eq!(stats.incomplete_rows, 1);
    assert_eq!(stats.rows_skipped, 1);
    assert_eq!(stats.errors.len(), 1);
    assert!(stats.errors[0].starts_with("Line 9:"));
    assert!(!stats.is_clean());
    assert!((stats.success_rate() - 66.7).abs() < 0.1);
}

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_rows: 8,
        items_parsed: 6,
        incomplete_rows: 2,
        ..ParseStats::new()
    };

    assert_eq!(stats.success_rate(), 75.0);
    assert!(stats.is_clean());
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::default();

    assert_eq!(empty_stats.total_rows, 0);
    assert_eq!(empty_stats.items_parsed, 0);
    assert!(empty_stats.errors.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(empty_stats.is_clean());
}
