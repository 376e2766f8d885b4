//! Individual row parsing for timetable exports
//!
//! This module converts one header-keyed row into a [`ScheduleItem`].

use super::contract::ParsingContract;
use super::field_parsers::{get_field, get_optional_field, has_value, parse_required_timestamp};
use super::row_mapping::CsvRow;
use crate::Result;
use crate::app::models::ScheduleItem;

/// Parse a single timetable row
///
/// Returns `Ok(None)` for incomplete rows (no start date or start time),
/// which callers drop without reporting. Rows whose timestamps cannot be
/// parsed, or that end before they start, return an error.
pub fn parse_schedule_record<C: ParsingContract + ?Sized>(
    row: &CsvRow,
    line_index: usize,
    contract: &C,
) -> Result<Option<ScheduleItem>> {
    let columns = contract.columns();

    if !has_value(row, &columns.start_date) || !has_value(row, &columns.start_time) {
        return Ok(None);
    }

    let start = parse_required_timestamp(row, &columns.start_date, &columns.start_time)?;
    let end = parse_required_timestamp(row, &columns.end_date, &columns.end_time)?;

    let module_code = get_field(row, &columns.module_code).to_string();
    let lecturer =
        get_optional_field(row, &columns.staff).and_then(|raw| contract.format_lecturer(raw));

    let item = ScheduleItem::new(
        format!("{}-{}", module_code, line_index),
        get_field(row, &columns.description).to_string(),
        start,
        end,
        get_field(row, &columns.rooms).to_string(),
        get_field(row, &columns.event_type).to_string(),
        module_code,
        lecturer,
    )?;

    Ok(Some(item))
}
