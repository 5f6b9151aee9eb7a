//! Tokens of the sparse matrix text format

/// Key of the first header line, `rows=<N>`
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line, `cols=<M>`
pub const COLS_KEY: &str = "cols";

/// Number of header lines preceding the entries
pub const HEADER_LINES: usize = 2;

/// Opening delimiter of an entry line
pub const ENTRY_OPEN: char = '(';

/// Closing delimiter of an entry line
pub const ENTRY_CLOSE: char = ')';

/// Separator between the fields of an entry
pub const FIELD_SEPARATOR: char = ',';

/// Number of fields in an entry: row, column, value
pub const ENTRY_FIELDS: usize = 3;
