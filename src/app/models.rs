//! Data models for the timetable viewer
//!
//! This module contains the core data structures for schedule occurrences,
//! the modules that group them, the signed-in user and derived event status.

use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Schedule Item
// =============================================================================

/// One concrete timetabled occurrence (lecture, seminar, lab, ...)
///
/// Timestamps carry no timezone; they are interpreted in the local timezone
/// of whoever renders them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    /// `{module code}-{line index}`, unique within one parse run
    pub id: String,

    /// Human-readable description of the occurrence
    pub title: String,

    pub start: NaiveDateTime,

    pub end: NaiveDateTime,

    /// Raw room/building code as given in the source (e.g. "SB2025", "PR.JG.1003")
    pub location: String,

    /// Free-text category such as "Lecture" or "Seminar"
    #[serde(rename = "type")]
    pub event_type: String,

    pub module_code: String,

    /// Human-formatted staff name(s)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lecturer: Option<String>,
}

impl ScheduleItem {
    /// Create a new ScheduleItem, rejecting occurrences that end before they start
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: String,
        event_type: String,
        module_code: String,
        lecturer: Option<String>,
    ) -> Result<Self> {
        if start > end {
            return Err(Error::data_validation(format!(
                "Event '{}' ends ({}) before it starts ({})",
                id, end, start
            )));
        }

        Ok(Self {
            id,
            title,
            start,
            end,
            location,
            event_type,
            module_code,
            lecturer,
        })
    }

    /// Check whether the occurrence starts on the given calendar day
    pub fn starts_on(&self, date: chrono::NaiveDate) -> bool {
        self.start.date() == date
    }

    /// Building code used to group events on the campus map
    ///
    /// Everything after the first run of digits is dropped, then the result is
    /// trimmed and uppercased: "PR.JG.1003 (Lab)" becomes "PR.JG.1003".
    pub fn building_key(&self) -> String {
        let location = self.location.as_str();
        let cut = location
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit())
            .map(|(start, _)| {
                location[start..]
                    .char_indices()
                    .find(|(_, c)| !c.is_ascii_digit())
                    .map(|(offset, _)| start + offset)
                    .unwrap_or(location.len())
            })
            .unwrap_or(location.len());

        location[..cut].trim().to_uppercase()
    }
}

// =============================================================================
// Module
// =============================================================================

/// A university course unit with every occurrence sharing its code
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Module {
    /// Same as `code`
    pub id: String,

    /// Title of the first-seen occurrence up to its first "(", trimmed
    pub name: String,

    pub code: String,

    /// Occurrences in encounter order
    pub schedule: Vec<ScheduleItem>,
}

impl Module {
    /// Create an empty module named after its first occurrence's title
    pub fn from_first_occurrence(item: &ScheduleItem) -> Self {
        Self {
            id: item.module_code.clone(),
            name: module_name_from_title(&item.title),
            code: item.module_code.clone(),
            schedule: Vec::new(),
        }
    }

    /// Number of scheduled occurrences
    pub fn event_count(&self) -> usize {
        self.schedule.len()
    }
}

/// Derive a module name from an occurrence title
pub fn module_name_from_title(title: &str) -> String {
    title.split('(').next().unwrap_or_default().trim().to_string()
}

// =============================================================================
// User
// =============================================================================

/// Signed-in user with the placeholder session token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    pub token: String,
}

// =============================================================================
// Event Status
// =============================================================================

/// Progress of an event relative to the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Within the first ten minutes
    Starting,
    /// Between the starting and finishing windows
    Ongoing,
    /// Within the last ten minutes
    Finished,
    /// Not yet started or already over
    None,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventStatus::Starting => "starting",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Finished => "finished",
            EventStatus::None => "none",
        };
        write!(f, "{}", s)
    }
}

/// Event status with its display color class and label
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventStatusInfo {
    pub status: EventStatus,
    pub color: String,
    pub label: String,
}

impl EventStatusInfo {
    pub fn new(status: EventStatus) -> Self {
        let (color, label) = match status {
            EventStatus::Starting => ("starting", "Starting"),
            EventStatus::Ongoing => ("ongoing", "On-going"),
            EventStatus::Finished => ("ending", "Finishing"),
            EventStatus::None => ("", ""),
        };

        Self {
            status,
            color: color.to_string(),
            label: label.to_string(),
        }
    }

    /// Whether the event is currently in progress
    pub fn is_active(&self) -> bool {
        self.status != EventStatus::None
    }
}
