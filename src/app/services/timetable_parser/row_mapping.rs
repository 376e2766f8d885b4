//! Header row analysis and row mapping
//!
//! This module pairs the trimmed column names of a header row with the
//! positional values of each data row.

use super::line_splitter::parse_line;
use std::collections::HashMap;

/// One data row keyed by header name
pub type CsvRow = HashMap<String, String>;

/// Map header names to the value at the same position
///
/// Positions missing from a short data row map to an empty string. Extra
/// values beyond the header width are ignored. When a header name repeats,
/// the right-most column wins.
pub fn map_row(headers: &[String], values: &[String]) -> CsvRow {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let value = values.get(index).cloned().unwrap_or_default();
            (header.trim().to_string(), value)
        })
        .collect()
}

/// Parsed header row of a timetable document
#[derive(Debug, Clone)]
pub struct HeaderRow {
    /// Trimmed column names in document order
    pub names: Vec<String>,

    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl HeaderRow {
    /// Split a header line and trim each column name
    pub fn from_line(line: &str) -> Self {
        let names: Vec<String> = parse_line(line)
            .into_iter()
            .map(|name| name.trim().to_string())
            .collect();

        let name_to_index = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();

        Self {
            names,
            name_to_index,
        }
    }

    /// Build a header-keyed row from a data line
    pub fn map_line(&self, line: &str) -> CsvRow {
        map_row(&self.names, &parse_line(line))
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the header
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
