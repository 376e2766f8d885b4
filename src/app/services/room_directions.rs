//! Room-code resolver
//!
//! Turns a room code such as `SB2025` or `PR.JG.1003` into a walking
//! directions sentence. The prefix names an optional campus and a building;
//! the four digits are a floor digit followed by the room index on that floor.

use crate::constants::INVALID_ROOM_CODE_MESSAGE;
use regex::Regex;
use std::sync::LazyLock;

static ROOM_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z.]+)?\s*([0-9]{4})$").expect("room code pattern is valid")
});

const BUILDINGS: &[(&str, &str)] = &[
    ("SB", "Sopwith Building"),
    ("JG", "John Galsworthy Building"),
    ("MB", "Main Building"),
    ("TB", "Town House Building"),
    ("PR", "Penrhyn Road Main Building"),
    ("KH", "Kingston Hill"),
    ("RV", "Roehampton Vale"),
    ("WS", "West Smithfield"),
    ("REG", "Regent Street"),
];

const CAMPUSES: &[(&str, &str)] = &[
    ("PR", "Penrhyn Road Campus"),
    ("KH", "Kingston Hill Campus"),
    ("RV", "Roehampton Vale Campus"),
];

const DEFAULT_BUILDING: &str = "the building";

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, name)| *name)
}

/// English ordinal suffix for a number
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (1, hundreds) if hundreds != 11 => "st",
        (2, hundreds) if hundreds != 12 => "nd",
        (3, hundreds) if hundreds != 13 => "rd",
        _ => "th",
    }
}

fn ordinal(n: u32) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// A decoded room code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLocation {
    pub building: String,
    pub campus: Option<String>,
    /// "Ground" or an ordinal such as "2nd"
    pub floor: String,
    /// Ordinal room index on the floor, e.g. "25th"
    pub room: String,
}

impl RoomLocation {
    /// Decode a room code, or `None` when it does not match `[letters/dots]dddd`
    ///
    /// Only ASCII digits count as room digits.
    pub fn parse(code: &str) -> Option<Self> {
        let normalized = code.trim().to_uppercase();
        let captures = ROOM_CODE.captures(&normalized)?;

        let prefix = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        let digits = captures.get(2)?.as_str();

        let parts: Vec<&str> = prefix.split('.').filter(|part| !part.is_empty()).collect();

        let campus = parts.iter().filter_map(|part| lookup(CAMPUSES, part)).last();

        let building = match parts.last() {
            Some(last) => match lookup(BUILDINGS, last) {
                Some(name) => name.to_string(),
                None if lookup(CAMPUSES, last).is_none() => format!("Building {}", last),
                None => "Main Building".to_string(),
            },
            None => DEFAULT_BUILDING.to_string(),
        };

        let mut chars = digits.chars();
        let floor_digit = chars.next()?.to_digit(10)?;
        let room_digits = chars.as_str();
        let floor = match floor_digit {
            0 => "Ground".to_string(),
            n => ordinal(n),
        };
        let room = ordinal(room_digits.parse::<u32>().ok()?);

        Some(Self {
            building,
            campus: campus.map(str::to_string),
            floor,
            room,
        })
    }

    /// Directions sentence for this location
    pub fn directions(&self) -> String {
        let at_campus = self
            .campus
            .as_deref()
            .map(|campus| format!(" at {}", campus))
            .unwrap_or_default();

        format!(
            "Go to {}{}, go to the {} floor and it will be the {} room (counting from the left).",
            self.building, at_campus, self.floor, self.room
        )
    }
}

/// Directions sentence for a room code, or a validation message when the
/// code is not recognised. Empty input yields an empty string.
pub fn room_directions(code: &str) -> String {
    if code.trim().is_empty() {
        return String::new();
    }

    match RoomLocation::parse(code) {
        Some(location) => location.directions(),
        None => INVALID_ROOM_CODE_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (111, "th"),
            (0, "th"),
        ];
        for (n, suffix) in cases {
            assert_eq!(ordinal_suffix(n), suffix, "suffix for {}", n);
        }
    }

    #[test]
    fn test_simple_building_code() {
        let location = RoomLocation::parse("SB2025").unwrap();
        assert_eq!(location.building, "Sopwith Building");
        assert_eq!(location.campus, None);
        assert_eq!(location.floor, "2nd");
        assert_eq!(location.room, "25th");

        assert_eq!(
            room_directions("SB2025"),
            "Go to Sopwith Building, go to the 2nd floor and it will be the 25th room (counting from the left)."
        );
    }

    #[test]
    fn test_campus_and_building_code() {
        let location = RoomLocation::parse("pr.jg.1003").unwrap();
        assert_eq!(location.campus.as_deref(), Some("Penrhyn Road Campus"));
        assert_eq!(location.building, "John Galsworthy Building");
        assert_eq!(location.floor, "Ground");
        assert_eq!(location.room, "3rd");

        assert_eq!(
            room_directions(" PR.JG.1003 "),
            "Go to John Galsworthy Building at Penrhyn Road Campus, go to the Ground floor and it will be the 3rd room (counting from the left)."
        );
    }

    #[test]
    fn test_unknown_building_and_bare_digits() {
        assert_eq!(RoomLocation::parse("XY3012").unwrap().building, "Building XY");
        assert_eq!(RoomLocation::parse("3012").unwrap().building, "the building");
        assert_eq!(RoomLocation::parse("JG.1011").unwrap().room, "11th");
    }

    #[test]
    fn test_campus_only_prefix() {
        let location = RoomLocation::parse("KH.4001").unwrap();
        assert_eq!(location.building, "Kingston Hill");
        assert_eq!(location.campus.as_deref(), Some("Kingston Hill Campus"));

        let location = RoomLocation::parse("PR.1003").unwrap();
        assert_eq!(location.building, "Penrhyn Road Main Building");
    }

    #[test]
    fn test_invalid_codes() {
        assert_eq!(room_directions("bogus"), INVALID_ROOM_CODE_MESSAGE);
        assert_eq!(room_directions("SB202"), INVALID_ROOM_CODE_MESSAGE);
        assert_eq!(room_directions("SB20255"), INVALID_ROOM_CODE_MESSAGE);
        assert_eq!(room_directions(""), "");
    }

    #[test]
    fn test_non_ascii_digits_are_rejected() {
        assert_eq!(room_directions("SB٢٠٢٥"), INVALID_ROOM_CODE_MESSAGE);
        assert_eq!(room_directions("SB２０２５"), INVALID_ROOM_CODE_MESSAGE);
        assert_eq!(RoomLocation::parse("٢٠٢٥"), None);
    }
}
