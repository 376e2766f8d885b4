//! Application constants for the timetable viewer
//!
//! This module contains the timetable export format markers, default source
//! documents, persisted storage keys and user-facing messages used throughout
//! the crate.

// =============================================================================
// Timetable Export Format
// =============================================================================

/// Literal substring identifying the header row of a timetable export
pub const HEADER_ROW_MARKER: &str = r#""Description","Module code""#;

/// Date and time format of the combined start/end columns ("YYYY-MM-DD HH:mm")
pub const TIMETABLE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Same as above with seconds, accepted for exports that include them
pub const TIMETABLE_DATETIME_FORMAT_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

/// Standard column names in timetable exports
pub mod columns {
    pub const DESCRIPTION: &str = "Description";
    pub const MODULE_CODE: &str = "Module code";
    pub const START_DATE: &str = "Start date";
    pub const START_TIME: &str = "Start time";
    pub const END_DATE: &str = "End date";
    pub const END_TIME: &str = "End time";
    pub const ROOMS: &str = "Room(s)";
    pub const TYPE: &str = "Type";
    pub const STAFF: &str = "Staff member(s)";
}

// =============================================================================
// Default Sources
// =============================================================================

/// Timetable documents loaded when none are configured, one per academic level
pub const DEFAULT_DOCUMENTS: &[&str] = &[
    "data/specific/CompSci-Level4_timetable_2526.csv",
    "data/specific/CompSci-Level5_timetable_2526.csv",
    "data/specific/CompSci-Level6_timetable_2526.csv",
];

/// Default timeout for HTTP document sources
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Persisted State
// =============================================================================

/// Key-value store keys
pub mod storage_keys {
    pub const TOKEN: &str = "valdi_token";
    pub const USERNAME: &str = "valdi_username";
    pub const SELECTED_MODULES: &str = "selected_modules";
    pub const SELECTED_EVENT_TYPES: &str = "selected_event_types";
}

/// Application directory name under the platform config/data directories
pub const APP_DIR_NAME: &str = "valdi";

/// Configuration filename
pub const CONFIG_FILENAME: &str = "config.toml";

/// Key-value state filename
pub const STATE_FILENAME: &str = "state.json";

// =============================================================================
// Session
// =============================================================================

/// Placeholder token issued by the mock login
pub const MOCK_SESSION_TOKEN: &str = "mock-token-123";

/// Shown when login is attempted with a blank username
pub const EMPTY_USERNAME_MESSAGE: &str = "Please enter a username";

// =============================================================================
// Event Progress
// =============================================================================

/// Width of the "starting" and "finishing" windows in minutes
pub const STATUS_WINDOW_MINUTES: i64 = 10;

// =============================================================================
// Room Directions
// =============================================================================

/// Returned when a room code does not match the expected pattern
pub const INVALID_ROOM_CODE_MESSAGE: &str =
    "Please enter a valid room code (e.g., SB2025 or JG.1003).";

/// Base URL for outbound map searches
pub const MAP_SEARCH_BASE_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Prefix added to map search queries
pub const MAP_SEARCH_PREFIX: &str = "Kingston University";
