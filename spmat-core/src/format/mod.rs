//! Text format for sparse matrices
//!
//! A document looks like
//!
//! ```text
//! rows=2
//! cols=2
//! (0,0,5)
//!
//! (1,1,3)
//! ```
//!
//! Blank lines between entries are skipped. This module holds the pure
//! parsing rules; reading files is left to the caller.

pub mod constants;
pub mod entry;
pub mod header;

pub use entry::parse_entry;
pub use header::MatrixHeader;

#[cfg(feature = "alloc")]
use crate::{HashMatrix, MatrixElement, SpmatError};

/// How zero-valued entries in a document are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroEntries {
    /// Store through `set_element`, which removes the coordinate
    #[default]
    Normalize,
    /// Fail with a format error
    Reject,
}

/// Configuration for parsing a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseConfig {
    /// Reject entries outside the declared dimensions
    pub bounds_check: bool,
    /// Treatment of zero-valued entries
    pub zero_entries: ZeroEntries,
}

impl ParseConfig {
    /// Configuration rejecting anything questionable
    pub const fn strict() -> Self {
        Self {
            bounds_check: true,
            zero_entries: ZeroEntries::Reject,
        }
    }

    /// Set whether entries are checked against the declared dimensions
    pub fn with_bounds_check(mut self, bounds_check: bool) -> Self {
        self.bounds_check = bounds_check;
        self
    }

    /// Set the treatment of zero-valued entries
    pub fn with_zero_entries(mut self, zero_entries: ZeroEntries) -> Self {
        self.zero_entries = zero_entries;
        self
    }
}

/// Counters gathered while parsing a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseStats {
    /// Entry lines read
    pub entries: usize,
    /// Entry lines holding a zero value
    pub zero_entries: usize,
    /// Entry lines overwriting an earlier entry at the same coordinate
    pub duplicate_entries: usize,
    /// Blank lines skipped
    pub blank_lines: usize,
}

/// Parse a whole document into a matrix
#[cfg(feature = "alloc")]
pub fn parse_matrix<T: MatrixElement>(
    text: &str,
    config: &ParseConfig,
) -> Result<HashMatrix<T>, SpmatError> {
    parse_matrix_with_stats(text, config).map(|(matrix, _)| matrix)
}

/// Parse a whole document into a matrix, also returning parse counters
#[cfg(feature = "alloc")]
pub fn parse_matrix_with_stats<T: MatrixElement>(
    text: &str,
    config: &ParseConfig,
) -> Result<(HashMatrix<T>, ParseStats), SpmatError> {
    let mut lines = text.lines();
    let header = MatrixHeader::parse(lines.next(), lines.next())?;

    let mut matrix = HashMatrix::new(header.nrows, header.ncols);
    let mut stats = ParseStats::default();

    for (index, line) in lines.enumerate() {
        let line_number = index + constants::HEADER_LINES + 1;

        if line.trim().is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        let entry = parse_entry::<T>(line, line_number)?;
        stats.entries += 1;

        if config.bounds_check && !entry.coordinate().is_within(header.nrows, header.ncols) {
            return Err(SpmatError::EntryOutOfBounds {
                line: line_number,
                row: entry.row,
                col: entry.col,
            });
        }

        if entry.value.is_zero() {
            if config.zero_entries == ZeroEntries::Reject {
                return Err(SpmatError::ZeroEntry { line: line_number });
            }
            stats.zero_entries += 1;
        }

        if matrix.contains(entry.row, entry.col) {
            stats.duplicate_entries += 1;
        }

        matrix.set_element(entry.row, entry.col, entry.value);
    }

    Ok((matrix, stats))
}
