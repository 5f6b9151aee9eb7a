//! Rendering results for output
//!
//! The text form is the matrix's `Display` output. It is meant for people
//! and cannot be loaded back.

use spmat_core::{Entry, HashMatrix, MatrixElement};

use crate::error::Result;

/// Output format for a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// `SparseMatrix(NxM) with elements: {...}`
    #[default]
    Text,
    /// JSON object with dimensions and a row-major entry list
    #[cfg(feature = "serde")]
    Json,
}

/// Serializable view of a matrix
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatrixReport<T> {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Number of stored values
    pub nnz: usize,
    /// Stored values in row-major order
    pub entries: Vec<Entry<T>>,
}

impl<T: MatrixElement> From<&HashMatrix<T>> for MatrixReport<T> {
    fn from(matrix: &HashMatrix<T>) -> Self {
        Self {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
            nnz: matrix.nnz(),
            entries: matrix.entries(),
        }
    }
}

/// Render a result in the requested format
pub fn render(matrix: &HashMatrix<i64>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(matrix.to_string()),
        #[cfg(feature = "serde")]
        OutputFormat::Json => Ok(serde_json::to_string(&MatrixReport::from(matrix))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMatrix<i64> {
        HashMatrix::from_triples(2, 3, [(1, 2, -4), (0, 0, 5)])
    }

    #[test]
    fn test_report_is_row_major() {
        let report = MatrixReport::from(&sample());
        assert_eq!(report.rows, 2);
        assert_eq!(report.cols, 3);
        assert_eq!(report.nnz, 2);
        assert_eq!(report.entries, vec![Entry::new(0, 0, 5), Entry::new(1, 2, -4)]);
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render(&sample(), OutputFormat::Text).unwrap(),
            "SparseMatrix(2x3) with elements: {(0, 0): 5, (1, 2): -4}"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["rows"], 2);
        assert_eq!(value["cols"], 3);
        assert_eq!(value["nnz"], 2);
        assert_eq!(value["entries"][1]["row"], 1);
        assert_eq!(value["entries"][1]["col"], 2);
        assert_eq!(value["entries"][1]["value"], -4);
    }
}
