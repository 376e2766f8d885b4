//! Parsing statistics and result structures for timetable documents
//!
//! This module provides types for tracking how many rows of a document became
//! schedule items and why the others were dropped.

use crate::app::models::ScheduleItem;

/// Parsing result with schedule items and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed schedule items in document order
    pub items: Vec<ScheduleItem>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Zero-based line index of the detected header row
    pub header_line: usize,

    /// Non-blank data rows after the header
    pub total_rows: usize,

    /// Rows converted into schedule items
    pub items_parsed: usize,

    /// Rows without a start date or start time (dropped silently)
    pub incomplete_rows: usize,

    /// Rows with unusable values
    pub rows_skipped: usize,

    /// Row errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            header_line: 0,
            total_rows: 0,
            items_parsed: 0,
            incomplete_rows: 0,
            rows_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage of data rows
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.items_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if every row that had a start date and time was parsed
    pub fn is_clean(&self) -> bool {
        self.rows_skipped == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
