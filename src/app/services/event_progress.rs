//! Event progress classification
//!
//! Classifies an event against a point in time using fixed ten-minute
//! windows after the start and before the end. The core takes `now` as an
//! argument; only [`local_now`] reads the wall clock.

use crate::app::models::{EventStatus, EventStatusInfo, ScheduleItem};
use crate::constants::STATUS_WINDOW_MINUTES;
use chrono::{Local, NaiveDateTime, TimeDelta};

/// Classify an event at `now`
///
/// Bounds are inclusive. When the event is shorter than two windows the
/// starting and finishing windows overlap and "starting" wins.
pub fn classify(now: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> EventStatus {
    let window = TimeDelta::minutes(STATUS_WINDOW_MINUTES);

    if now < start || now > end {
        EventStatus::None
    } else if now <= start + window {
        EventStatus::Starting
    } else if now >= end - window {
        EventStatus::Finished
    } else {
        EventStatus::Ongoing
    }
}

/// Classify an event at `now`, with display color and label
pub fn event_progress_status(
    now: NaiveDateTime,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> EventStatusInfo {
    EventStatusInfo::new(classify(now, start, end))
}

/// Current local wall-clock time, in the naive form timetable timestamps use
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Classify an event against the local wall clock
pub fn event_progress_now(start: NaiveDateTime, end: NaiveDateTime) -> EventStatusInfo {
    event_progress_status(local_now(), start, end)
}

impl ScheduleItem {
    /// Progress of this item at `now`
    pub fn progress_at(&self, now: NaiveDateTime) -> EventStatusInfo {
        event_progress_status(now, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 3)
            .unwrap()
            .and_hms_opt(13, 0, 0)
            .unwrap()
    }

    fn minutes(n: i64) -> TimeDelta {
        TimeDelta::minutes(n)
    }

    #[test]
    fn test_thirty_minute_event() {
        let (start, end) = (t(), t() + minutes(30));

        assert_eq!(classify(t() + minutes(1), start, end), EventStatus::Starting);
        assert_eq!(classify(t() + minutes(15), start, end), EventStatus::Ongoing);
        assert_eq!(classify(t() + minutes(25), start, end), EventStatus::Finished);
        assert_eq!(classify(t() - minutes(1), start, end), EventStatus::None);
        assert_eq!(classify(t() + minutes(31), start, end), EventStatus::None);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let (start, end) = (t(), t() + minutes(60));

        assert_eq!(classify(start, start, end), EventStatus::Starting);
        assert_eq!(classify(start + minutes(10), start, end), EventStatus::Starting);
        assert_eq!(
            classify(start + minutes(10) + TimeDelta::seconds(1), start, end),
            EventStatus::Ongoing
        );
        assert_eq!(classify(end - minutes(10), start, end), EventStatus::Finished);
        assert_eq!(classify(end, start, end), EventStatus::Finished);
    }

    #[test]
    fn test_short_event_prefers_starting() {
        let (start, end) = (t(), t() + minutes(15));

        assert_eq!(classify(t() + minutes(8), start, end), EventStatus::Starting);
        assert_eq!(classify(t() + minutes(12), start, end), EventStatus::Finished);
    }

    #[test]
    fn test_status_info_for_item() {
        let item = ScheduleItem::new(
            "CI4100-3".to_string(),
            "Programming".to_string(),
            t(),
            t() + minutes(120),
            "SB2025".to_string(),
            "Lecture".to_string(),
            "CI4100".to_string(),
            None,
        )
        .unwrap();

        let info = item.progress_at(t() + minutes(60));
        assert_eq!(info.status, EventStatus::Ongoing);
        assert_eq!(info.label, "On-going");
        assert_eq!(info.color, "ongoing");
    }

    #[test]
    fn test_wall_clock_far_past_event_is_none() {
        let start = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let info = event_progress_now(start, start + minutes(60));
        assert_eq!(info.status, EventStatus::None);
    }

    #[test]
    fn test_local_now_reads_local_wall_clock() {
        let before = Local::now().naive_local();
        let now = local_now();
        let after = Local::now().naive_local();
        assert!(before <= now && now <= after);
    }
}
