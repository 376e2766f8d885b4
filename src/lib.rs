//! Valdi Timetable Library
//!
//! A Rust library for turning university timetable CSV exports into a
//! browsable, filterable schedule.
//!
//! This library provides tools for:
//! - Splitting and mapping quoted CSV rows with header detection by content
//! - Normalizing rows into dated schedule items with human-readable staff names
//! - Grouping schedule items into modules in first-seen order
//! - Persisting module and event-type selections in a key-value store
//! - Classifying events as starting, ongoing or finishing
//! - Resolving campus room codes into walking directions

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod document_source;
        pub mod event_progress;
        pub mod map_link;
        pub mod module_aggregator;
        pub mod room_directions;
        pub mod selection;
        pub mod session;
        pub mod staff_names;
        pub mod timetable_parser;
        pub mod timetable_service;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{EventStatus, EventStatusInfo, Module, ScheduleItem, User};
pub use config::Config;

/// Result type alias for timetable operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for timetable loading, selection storage and the CLI
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A timetable document could not be retrieved
    #[error("Failed to fetch '{location}': {message}")]
    Fetch { location: String, message: String },

    /// A timetable document was retrieved but is not usable
    #[error("Timetable format error in '{location}': {message}")]
    Format { location: String, message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Key-value store error
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Login rejected
    #[error("{message}")]
    Authentication { message: String },

    /// No session token present
    #[error("Not signed in. Run `valdi login` first.")]
    NotAuthenticated,

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a fetch error for a document location
    pub fn fetch(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a document format error
    pub fn format(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Storage {
            message: format!("JSON serialization failed: {}", error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML: {}", error),
        }
    }
}
