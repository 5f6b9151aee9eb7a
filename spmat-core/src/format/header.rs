//! Header lines of the sparse matrix text format
//!
//! A document starts with exactly two header lines, `rows=<N>` followed by
//! `cols=<M>`, which fix the logical extent of the matrix.

use super::constants::{COLS_KEY, ROWS_KEY};
use crate::validation::{parse_index, split_key_value};
use crate::SpmatError;

/// Dimensions declared by a document header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixHeader {
    /// Number of rows
    pub nrows: usize,
    /// Number of columns
    pub ncols: usize,
}

impl MatrixHeader {
    /// Create a header for a `nrows x ncols` matrix
    pub const fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// Parse the two header lines
    ///
    /// `rows_line` and `cols_line` are the first and second line of the
    /// document; `None` means the document ended before that line.
    pub fn parse(rows_line: Option<&str>, cols_line: Option<&str>) -> Result<Self, SpmatError> {
        let nrows = parse_header_line(rows_line, ROWS_KEY, 1)?;
        let ncols = parse_header_line(cols_line, COLS_KEY, 2)?;
        Ok(Self { nrows, ncols })
    }

    /// Dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

/// Parse a single `key=<int>` header line
pub fn parse_header_line(
    line: Option<&str>,
    expected: &'static str,
    line_number: usize,
) -> Result<usize, SpmatError> {
    let error = SpmatError::InvalidHeader {
        line: line_number,
        expected,
    };

    let (key, value) = line.and_then(split_key_value).ok_or(error)?;
    if key != expected {
        return Err(error);
    }

    parse_index(value).ok_or(error)
}
