//! Timetable CSV parser for schedule exports
//!
//! This module turns a timetable export (a CSV document with a preamble of
//! arbitrary lines before the real header row) into normalized
//! [`ScheduleItem`](crate::app::models::ScheduleItem) records.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`line_splitter`] - Quote-aware splitting of one line into fields
//! - [`row_mapping`] - Header row analysis and header-to-value row mapping
//! - [`contract`] - Format-coupled heuristics (header detection, columns, lecturer formatting)
//! - [`field_parsers`] - Field lookup and timestamp parsing
//! - [`record_parser`] - Individual row to schedule item conversion
//! - [`parser`] - Document orchestration and fetch integration
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use valdi_timetable::app::services::timetable_parser::TimetableParser;
//!
//! let text = "Timetable export\n\"Description\",\"Module code\",\"Start date\",\"Start time\",\"End date\",\"End time\"\n\
//!             \"Programming (Lecture)\",\"CI4100\",\"2025-09-22\",\"09:00\",\"2025-09-22\",\"11:00\"";
//!
//! let parser = TimetableParser::standard();
//! let result = parser.parse_document("level4.csv", text).unwrap();
//!
//! assert_eq!(result.items.len(), 1);
//! assert_eq!(result.items[0].id, "CI4100-2");
//! ```

pub mod contract;
pub mod field_parsers;
pub mod line_splitter;
pub mod parser;
pub mod record_parser;
pub mod row_mapping;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use contract::{ParsingContract, StandardContract};
pub use line_splitter::parse_line;
pub use parser::TimetableParser;
pub use row_mapping::{CsvRow, HeaderRow, map_row};
pub use stats::{ParseResult, ParseStats};
