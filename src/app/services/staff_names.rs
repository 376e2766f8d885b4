//! Staff name formatting
//!
//! Timetable exports list teaching staff as comma-separated "LAST, FIRST"
//! fragments, with several people simply concatenated. This module renders
//! them as "First Last, First Last".

/// Uppercase the first character and lowercase the rest
pub fn to_proper_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Format a raw staff column into "First Last" names
///
/// - one fragment is a single name, proper-cased
/// - two fragments are one person as `LAST, FIRST`
/// - three or more are consumed in `(LAST, FIRST)` pairs; an unpaired
///   trailing fragment is emitted on its own
///
/// No validation is attempted: odd input degrades into odd names.
pub fn format_staff_names(staff_column: &str) -> String {
    if staff_column.trim().is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = staff_column.split(',').map(str::trim).collect();

    let formatted: Vec<String> = match parts.as_slice() {
        [single] => vec![to_proper_case(single)],
        [last, first] => vec![full_name(first, last)],
        _ => parts
            .chunks(2)
            .map(|pair| match pair {
                [last, first] => full_name(first, last),
                [lone] => to_proper_case(lone),
                _ => String::new(),
            })
            .collect(),
    };

    formatted.join(", ")
}

fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", to_proper_case(first), to_proper_case(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_person() {
        assert_eq!(format_staff_names("SMITH, JOHN"), "John Smith");
    }

    #[test]
    fn test_two_people() {
        assert_eq!(
            format_staff_names("SMITH, JOHN, DOE, JANE"),
            "John Smith, Jane Doe"
        );
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(format_staff_names(""), "");
        assert_eq!(format_staff_names("   "), "");
    }

    #[test]
    fn test_single_fragment() {
        assert_eq!(format_staff_names("TBC"), "Tbc");
    }

    #[test]
    fn test_trailing_unpaired_fragment() {
        assert_eq!(
            format_staff_names("SMITH, JOHN, DOE"),
            "John Smith, Doe"
        );
    }

    #[test]
    fn test_mixed_case_and_spacing() {
        assert_eq!(
            format_staff_names("  o'brien ,  mARY  "),
            "Mary O'brien"
        );
    }

    #[test]
    fn test_to_proper_case() {
        assert_eq!(to_proper_case("GALSWORTHY"), "Galsworthy");
        assert_eq!(to_proper_case("éMILE"), "Émile");
        assert_eq!(to_proper_case(""), "");
    }
}
