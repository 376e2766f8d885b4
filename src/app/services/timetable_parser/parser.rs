//! Core timetable parser implementation
//!
//! This module provides the main parser orchestration: locating the header
//! row by content, walking the data rows, and coordinating row mapping and
//! record parsing. It also wires the parser to a [`DocumentSource`] with the
//! degrade-to-empty failure policy callers rely on.

use tracing::{debug, error, info};

use super::contract::{ParsingContract, StandardContract};
use super::record_parser::parse_schedule_record;
use super::row_mapping::HeaderRow;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::ScheduleItem;
use crate::app::services::document_source::DocumentSource;
use crate::config::FormatConfig;
use crate::{Error, Result};

/// Timetable parser for CSV schedule exports
///
/// The parser is generic over its [`ParsingContract`] so header detection,
/// column names and lecturer formatting can be swapped without changing the
/// pipeline.
#[derive(Debug, Clone)]
pub struct TimetableParser<C = StandardContract> {
    contract: C,
}

impl TimetableParser<StandardContract> {
    /// Parser for the standard export format with default column names
    pub fn standard() -> Self {
        Self::new(StandardContract::default())
    }

    /// Parser for the standard export format with configured columns
    pub fn from_format(format: FormatConfig) -> Self {
        Self::new(StandardContract::new(format))
    }
}

impl Default for TimetableParser<StandardContract> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<C: ParsingContract> TimetableParser<C> {
    /// Create a new parser with the given contract
    pub fn new(contract: C) -> Self {
        Self { contract }
    }

    pub fn contract(&self) -> &C {
        &self.contract
    }

    /// Parse a whole document
    ///
    /// The document is split on line feeds and the first line the contract
    /// recognises as a header row anchors the parse. A document without one
    /// is an error. Item ids use the zero-based line index within the
    /// document, so they are stable across repeated parses of the same text.
    pub fn parse_document(&self, location: &str, text: &str) -> Result<ParseResult> {
        let lines: Vec<&str> = text.split('\n').collect();

        let header_index = lines
            .iter()
            .position(|line| self.contract.is_header_row(line))
            .ok_or_else(|| Error::format(location, "Could not find header row"))?;

        let header = HeaderRow::from_line(lines[header_index]);
        debug!(
            "Header row at line {} with {} columns in {}",
            header_index,
            header.len(),
            location
        );

        let mut stats = ParseStats {
            header_line: header_index,
            ..ParseStats::new()
        };
        let mut items = Vec::new();

        for (line_index, raw_line) in lines.iter().enumerate().skip(header_index + 1) {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            stats.total_rows += 1;
            let row = header.map_line(line);

            match parse_schedule_record(&row, line_index, &self.contract) {
                Ok(Some(item)) => {
                    items.push(item);
                    stats.items_parsed += 1;
                }
                Ok(None) => stats.incomplete_rows += 1,
                Err(e) => {
                    stats.rows_skipped += 1;
                    debug!("Skipped line {} of {}: {}", line_index, location, e);
                    stats.errors.push(format!("Line {}: {}", line_index, e));
                }
            }
        }

        Ok(ParseResult { items, stats })
    }

    /// Fetch a document and parse it, degrading every failure to an empty result
    ///
    /// Fetch and header failures are logged here and never reach the caller,
    /// so an empty vector means "no data" rather than "zero events".
    pub async fn fetch_and_parse<S: DocumentSource>(
        &self,
        source: &S,
        location: &str,
    ) -> Vec<ScheduleItem> {
        let text = match source.fetch(location).await {
            Ok(text) => text,
            Err(e) => {
                error!("Error fetching timetable {}: {}", location, e);
                return Vec::new();
            }
        };

        match self.parse_document(location, &text) {
            Ok(result) => {
                info!(
                    "Parsed {} schedule items from {} rows in {} ({:.1}% usable)",
                    result.stats.items_parsed,
                    result.stats.total_rows,
                    location,
                    result.stats.success_rate()
                );
                if !result.stats.is_clean() {
                    debug!(
                        "{} rows in {} had unusable values",
                        result.stats.rows_skipped, location
                    );
                }
                result.items
            }
            Err(e) => {
                error!("{}", e);
                Vec::new()
            }
        }
    }
}
