//! Entry lines of the sparse matrix text format
//!
//! Each entry line encodes one value as `(row,col,value)`.

use super::constants::{ENTRY_CLOSE, ENTRY_FIELDS, ENTRY_OPEN, FIELD_SEPARATOR};
use crate::validation::{parse_index, parse_value};
use crate::{Entry, MatrixElement, SpmatError};

/// Parse one entry line
///
/// The line is trimmed first. `line_number` is only used for error
/// reporting. Zero values are returned as-is; whether they are kept is up
/// to the caller.
pub fn parse_entry<T: MatrixElement>(line: &str, line_number: usize) -> Result<Entry<T>, SpmatError> {
    let line = line.trim();

    let interior = line
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(SpmatError::UnparenthesizedEntry { line: line_number })?;

    let found = interior.split(FIELD_SEPARATOR).count();
    if found != ENTRY_FIELDS {
        return Err(SpmatError::FieldCount {
            line: line_number,
            found,
        });
    }

    let mut fields = interior.split(FIELD_SEPARATOR);
    let mut next_index = |field: usize| {
        fields
            .next()
            .and_then(parse_index)
            .ok_or(SpmatError::InvalidInteger {
                line: line_number,
                field,
            })
    };
    let row = next_index(0)?;
    let col = next_index(1)?;

    let value = fields
        .next()
        .and_then(parse_value)
        .ok_or(SpmatError::InvalidInteger {
            line: line_number,
            field: 2,
        })?;

    Ok(Entry::new(row, col, value))
}
