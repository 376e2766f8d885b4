//! Quote-aware CSV line splitting
//!
//! Splits a single line into fields. A `"` toggles quoting, `""` inside a
//! quoted field is a literal quote, and commas only separate fields outside
//! quotes. Unbalanced quotes are not an error: the scan runs to the end of
//! the line in whatever state it is in.

/// Split one line of text into its fields
///
/// A line with N unquoted separators always yields N + 1 fields, so an empty
/// line yields a single empty field.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if inside_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => inside_quotes = !inside_quotes,
            ',' if !inside_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    values.push(current);
    values
}
