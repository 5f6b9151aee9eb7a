//! Core matrix abstraction traits
//!
//! This module defines the fundamental traits that sparse matrix
//! implementations satisfy, independent of how entries are stored.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core sparse matrix trait for storage-agnostic access
///
/// This trait provides the minimal interface that all sparse matrix
/// implementations must provide.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get the element at the specified position
    ///
    /// Positions with no stored value read as zero, including positions
    /// outside the declared dimensions.
    fn get_element(&self, row: usize, col: usize) -> Self::Element;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Whether no element is stored at all
    fn is_zero_matrix(&self) -> bool {
        self.nnz() == 0
    }
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all non-zero `(col, value)` pairs in a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all non-zero `(row, value)` pairs in a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
