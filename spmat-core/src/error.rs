//! Error types for sparse matrix operations

use crate::Operation;

/// Errors that can occur while parsing, accessing or combining sparse matrices
///
/// Every variant is `Copy` so the type stays usable without an allocator.
/// Format errors carry the 1-based line number of the offending input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// A `rows=`/`cols=` header line is missing or malformed
    InvalidHeader {
        /// Line the header was expected on
        line: usize,
        /// Header key that was expected (`rows` or `cols`)
        expected: &'static str,
    },
    /// Entry line is not wrapped in `(` and `)`
    UnparenthesizedEntry { line: usize },
    /// Entry interior does not split into exactly three fields
    FieldCount { line: usize, found: usize },
    /// Entry field is not a valid integer for its position
    InvalidInteger { line: usize, field: usize },
    /// Zero-valued entry while zero entries are rejected
    ZeroEntry { line: usize },
    /// Entry lies outside the declared dimensions while bounds are checked
    EntryOutOfBounds { line: usize, row: usize, col: usize },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Requested operation name is not supported
    ///
    /// Holds no name so the error stays `Copy` without an allocator.
    /// `spmat` reports the rejected name through its own
    /// `Error::UnknownOperation`.
    UnknownOperation,
    /// Index out of bounds for a checked element access
    IndexOutOfBounds { row: usize, col: usize },
    /// Integer overflow while computing the value at a coordinate
    ArithmeticOverflow { row: usize, col: usize },
}

/// Coarse grouping of [`SpmatError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed input text
    Format,
    /// Incompatible operand shapes
    Dimension,
    /// Unsupported operation name
    Operation,
    /// Checked access outside the declared extent
    Bounds,
    /// Integer overflow
    Arithmetic,
}

impl SpmatError {
    /// Get the category this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::InvalidHeader { .. }
            | SpmatError::UnparenthesizedEntry { .. }
            | SpmatError::FieldCount { .. }
            | SpmatError::InvalidInteger { .. }
            | SpmatError::ZeroEntry { .. }
            | SpmatError::EntryOutOfBounds { .. } => ErrorCategory::Format,
            SpmatError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            SpmatError::UnknownOperation => ErrorCategory::Operation,
            SpmatError::IndexOutOfBounds { .. } => ErrorCategory::Bounds,
            SpmatError::ArithmeticOverflow { .. } => ErrorCategory::Arithmetic,
        }
    }

    /// Whether this error was raised while parsing input text
    pub const fn is_format_error(&self) -> bool {
        matches!(self.category(), ErrorCategory::Format)
    }

    /// Line number the error refers to, for format errors
    pub const fn line(&self) -> Option<usize> {
        match *self {
            SpmatError::InvalidHeader { line, .. }
            | SpmatError::UnparenthesizedEntry { line }
            | SpmatError::FieldCount { line, .. }
            | SpmatError::InvalidInteger { line, .. }
            | SpmatError::ZeroEntry { line }
            | SpmatError::EntryOutOfBounds { line, .. } => Some(line),
            _ => None,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::InvalidHeader { line, expected } => {
                write!(f, "line {line}: expected header `{expected}=<int>`")
            }
            SpmatError::UnparenthesizedEntry { line } => {
                write!(f, "line {line}: entry must be of the form (row,col,value)")
            }
            SpmatError::FieldCount { line, found } => {
                write!(f, "line {line}: entry has {found} fields, expected 3")
            }
            SpmatError::InvalidInteger { line, field } => {
                let name = match field {
                    0 => "row",
                    1 => "column",
                    _ => "value",
                };
                write!(f, "line {line}: {name} is not a valid integer")
            }
            SpmatError::ZeroEntry { line } => {
                write!(f, "line {line}: zero-valued entries are not allowed")
            }
            SpmatError::EntryOutOfBounds { line, row, col } => {
                write!(f, "line {line}: entry ({row}, {col}) lies outside the matrix")
            }
            SpmatError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "matrix dimensions do not match for {}: {}x{} and {}x{}",
                operation.noun(),
                left.0,
                left.1,
                right.0,
                right.1
            ),
            SpmatError::UnknownOperation => {
                write!(f, "unknown operation, expected one of add, subtract, multiply")
            }
            SpmatError::IndexOutOfBounds { row, col } => {
                write!(f, "index ({row}, {col}) out of bounds")
            }
            SpmatError::ArithmeticOverflow { row, col } => {
                write!(f, "integer overflow computing element ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            SpmatError::UnparenthesizedEntry { line: 3 }.category(),
            ErrorCategory::Format
        );
        assert_eq!(
            SpmatError::DimensionMismatch {
                operation: Operation::Add,
                left: (2, 3),
                right: (3, 2),
            }
            .category(),
            ErrorCategory::Dimension
        );
        assert_eq!(
            SpmatError::UnknownOperation.category(),
            ErrorCategory::Operation
        );
        assert!(SpmatError::ZeroEntry { line: 1 }.is_format_error());
        assert!(!SpmatError::ArithmeticOverflow { row: 0, col: 0 }.is_format_error());
    }

    #[test]
    fn test_line_numbers() {
        assert_eq!(SpmatError::FieldCount { line: 7, found: 2 }.line(), Some(7));
        assert_eq!(SpmatError::IndexOutOfBounds { row: 1, col: 1 }.line(), None);
    }

    #[test]
    fn test_display() {
        let err = SpmatError::DimensionMismatch {
            operation: Operation::Multiply,
            left: (2, 3),
            right: (2, 3),
        };
        assert_eq!(
            err.to_string(),
            "matrix dimensions do not match for multiplication: 2x3 and 2x3"
        );
        assert_eq!(
            SpmatError::InvalidInteger { line: 4, field: 1 }.to_string(),
            "line 4: column is not a valid integer"
        );
    }
}
