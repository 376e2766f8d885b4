//! Test utilities and fixtures for timetable parser testing
//!
//! This module provides sample export documents, an in-memory document
//! source and helper functions used across the parser test modules.

use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::Error;
use crate::Result;
use crate::app::services::document_source::DocumentSource;

mod stats_tests;

pub const HEADER_LINE: &str = r#""Description","Module code","Start date","Start time","End date","End time","Room(s)","Type","Staff member(s)""#;

/// In-memory document source keyed by location
#[derive(Debug, Clone, Default)]
pub struct MockDocumentSource {
    documents: HashMap<String, String>,
}

impl MockDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, location: &str, text: &str) -> Self {
        self.documents
            .insert(location.to_string(), text.to_string());
        self
    }
}

impl DocumentSource for MockDocumentSource {
    async fn fetch(&self, location: &str) -> Result<String> {
        self.documents
            .get(location)
            .cloned()
            .ok_or_else(|| Error::fetch(location, "404 Not Found"))
    }
}

/// A level-4 export with a preamble, blank lines, quoted commas, escaped
/// quotes, one incomplete row and one row with an unusable start time
///
/// Line indices: header at 3; items at 4, 5, 7 and 10; incomplete row at 8;
/// unusable row at 9.
pub fn create_test_timetable_csv() -> String {
    let lines = [
        "Kingston University - Computer Science Level 4",
        "Generated,2025-09-01",
        "",
        HEADER_LINE,
        r#""Programming (Lecture)","CI4100","2025-09-22","09:00","2025-09-22","11:00","JG.1003","Lecture","SMITH, JOHN""#,
        r#""Programming (Lab), Group A","CI4100","2025-09-23","14:00","2025-09-23","16:00","SB2025","Practical","SMITH, JOHN, DOE, JANE""#,
        "",
        r#""Maths for Computing","CI4200","2025-09-24","10:00","2025-09-24","11:00","MB1001","Seminar","""#,
        r#""Placeholder","CI4200","","","","","","","""#,
        r#""Broken time","CI4200","2025-09-25","25:99","2025-09-25","11:00","MB1001","Lecture","""#,
        r#""The ""Big"" Workshop","CI4300","2025-09-26","09:00:00","2025-09-26","10:30","TB.0012","Workshop","PATEL, PRIYA""#,
        "",
    ];
    lines.join("\n")
}

/// A minimal document without staff column
pub fn create_minimal_timetable_csv() -> String {
    [
        r#""Description","Module code","Start date","Start time","End date","End time","Room(s)","Type""#,
        r#""Databases (Lecture)","CI5100","2025-10-01","12:00","2025-10-01","13:00","SB3001","Lecture""#,
    ]
    .join("\n")
}

/// Helper to create a temporary file with content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
