//! Parsing utilities for the sparse matrix text format
//!
//! Pure field-level parsers with no I/O dependencies. They return `None`
//! on malformed input; the caller attaches the line number.

use crate::MatrixElement;

/// Parse a non-negative index such as a row, column or dimension
///
/// Surrounding whitespace and a leading `+` are accepted. Signs other
/// than `+`, embedded whitespace and values above `usize::MAX` are not.
pub fn parse_index(s: &str) -> Option<usize> {
    s.trim().parse().ok()
}

/// Parse an element value, surrounding whitespace allowed
pub fn parse_value<T: MatrixElement>(s: &str) -> Option<T> {
    s.trim().parse().ok()
}

/// Split a `key=value` line into its trimmed key and value
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}
