//! Snapshot Record Codec
//!
//! Line format used by save/load: `key=value`, one record per line, no
//! escaping. Keys containing `=` do not survive a round trip.

/// Separator between key and value in a snapshot line.
pub const SEPARATOR: char = '=';

/// Formats a single snapshot record (without the trailing newline).
pub fn format_record(key: &str, value: &str) -> String {
    format!("{key}{SEPARATOR}{value}")
}

/// Splits a snapshot line on its first `=`.
///
/// Everything after the first separator belongs to the value, further `=`
/// characters included. Lines without a separator yield `None`.
pub fn parse_record(line: &str) -> Option<(&str, &str)> {
    line.split_once(SEPARATOR)
}
