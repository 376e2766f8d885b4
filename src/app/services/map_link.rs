//! Outbound map-search links
//!
//! Builds a Google Maps search URL for an event location. Uses its own
//! abbreviation table, which covers campuses rather than individual rooms and
//! is kept apart from the room resolver's building table.

use crate::constants::{MAP_SEARCH_BASE_URL, MAP_SEARCH_PREFIX};

const LOCATION_NAMES: &[(&str, &str)] = &[
    ("PR", "Penrhyn Road Campus"),
    ("KH", "Kingston Hill Campus"),
    ("RV", "Roehampton Vale Campus"),
    ("JG", "John Galsworthy Building"),
    ("MB", "Main Building"),
    ("TB", "Town House Building"),
    ("WS", "West Smithfield"),
    ("REG", "Regent Street"),
];

fn expand(part: &str) -> &str {
    LOCATION_NAMES
        .iter()
        .find(|(code, _)| *code == part)
        .map(|(_, name)| *name)
        .unwrap_or(part)
}

/// Human-readable search query for a location code
pub fn map_query(location: &str) -> String {
    let parts: Vec<&str> = location.split('.').map(|part| expand(part.trim())).collect();
    format!("{} {}", MAP_SEARCH_PREFIX, parts.join(" "))
}

/// Map search URL for a location, empty when the location is empty
pub fn map_url(location: &str) -> String {
    if location.is_empty() {
        return String::new();
    }

    format!(
        "{}{}",
        MAP_SEARCH_BASE_URL,
        urlencoding::encode(&map_query(location))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_expands_known_parts() {
        assert_eq!(
            map_query("PR.JG.1003"),
            "Kingston University Penrhyn Road Campus John Galsworthy Building 1003"
        );
        assert_eq!(map_query("SB2025"), "Kingston University SB2025");
        assert_eq!(map_query(" KH . 4001"), "Kingston University Kingston Hill Campus 4001");
    }

    #[test]
    fn test_url_is_percent_encoded() {
        assert_eq!(
            map_url("PR.1003"),
            "https://www.google.com/maps/search/?api=1&query=Kingston%20University%20Penrhyn%20Road%20Campus%201003"
        );
    }

    #[test]
    fn test_empty_location() {
        assert_eq!(map_url(""), "");
    }
}
