//! Parsing contract for timetable exports
//!
//! The export format is recognised by heuristics: the header row is found by
//! a literal substring, columns are addressed by name, and the staff column is
//! assumed to hold "LAST, FIRST" pairs. These assumptions live behind
//! [`ParsingContract`] so a different export layout can be supported without
//! touching the parser pipeline.

use crate::app::services::staff_names::format_staff_names;
use crate::config::{ColumnNames, FormatConfig, StaffNameStyle};

/// Format-coupled decisions the parser delegates
pub trait ParsingContract {
    /// Whether a raw document line is the header row
    fn is_header_row(&self, line: &str) -> bool;

    /// Column names used to build schedule items
    fn columns(&self) -> &ColumnNames;

    /// Turn a raw staff column value into a lecturer string
    ///
    /// Returns `None` when no lecturer should be recorded.
    fn format_lecturer(&self, raw: &str) -> Option<String>;
}

/// Contract for the standard timetable export, driven by [`FormatConfig`]
#[derive(Debug, Clone, Default)]
pub struct StandardContract {
    format: FormatConfig,
}

impl StandardContract {
    pub fn new(format: FormatConfig) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &FormatConfig {
        &self.format
    }
}

impl ParsingContract for StandardContract {
    fn is_header_row(&self, line: &str) -> bool {
        line.contains(&self.format.header_marker)
    }

    fn columns(&self) -> &ColumnNames {
        &self.format.columns
    }

    fn format_lecturer(&self, raw: &str) -> Option<String> {
        let formatted = match self.format.staff_names {
            StaffNameStyle::Pairwise => format_staff_names(raw),
            StaffNameStyle::Raw => raw.trim().to_string(),
            StaffNameStyle::Omit => return None,
        };

        if formatted.is_empty() {
            None
        } else {
            Some(formatted)
        }
    }
}
