//! Hash-backed sparse matrix storage
//!
//! [`HashMatrix`] keeps its dimensions and a map from [`Coordinate`] to
//! value. The map never holds a zero: writing zero removes the coordinate.
//! Arithmetic lives in [`arithmetic`].

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::validation::validate_index;
use crate::{Coordinate, Entry, MatrixElement, MatrixOperations, SparseMatrix, SpmatError};

pub mod arithmetic;

/// Sparse matrix storing only its nonzero values
///
/// Element access is permissive: positions outside `nrows x ncols` read
/// as zero and can be written. Use [`HashMatrix::try_get_element`] and
/// [`HashMatrix::try_set_element`] for bounds-checked access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashMatrix<T: MatrixElement> {
    nrows: usize,
    ncols: usize,
    elements: HashMap<Coordinate, T>,
}

impl<T: MatrixElement> HashMatrix<T> {
    /// Create an empty (all-zero) `nrows x ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            elements: HashMap::new(),
        }
    }

    /// Create a `size x size` identity matrix
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::new(size, size);
        for i in 0..size {
            matrix.set_element(i, i, T::ONE);
        }
        matrix
    }

    /// Create a matrix from `(row, col, value)` triples
    ///
    /// Triples go through [`HashMatrix::set_element`], so zero values are
    /// dropped and later triples overwrite earlier ones.
    pub fn from_triples<I>(nrows: usize, ncols: usize, triples: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(nrows, ncols);
        for (row, col, value) in triples {
            matrix.set_element(row, col, value);
        }
        matrix
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored (nonzero) values
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// Whether no value is stored
    pub fn is_zero_matrix(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the value at a position, zero if nothing is stored there
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.elements
            .get(&Coordinate::new(row, col))
            .copied()
            .unwrap_or(T::ZERO)
    }

    /// Set the value at a position
    ///
    /// A nonzero value is inserted or overwritten; zero removes whatever
    /// was stored at the position.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        let coordinate = Coordinate::new(row, col);
        if value.is_zero() {
            self.elements.remove(&coordinate);
        } else {
            self.elements.insert(coordinate, value);
        }
    }

    /// Whether a value is stored at a position
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.elements.contains_key(&Coordinate::new(row, col))
    }

    /// Bounds-checked [`HashMatrix::get_element`]
    pub fn try_get_element(&self, row: usize, col: usize) -> Result<T, SpmatError> {
        validate_index(row, col, self.dimensions())?;
        Ok(self.get_element(row, col))
    }

    /// Bounds-checked [`HashMatrix::set_element`]
    pub fn try_set_element(&mut self, row: usize, col: usize, value: T) -> Result<(), SpmatError> {
        validate_index(row, col, self.dimensions())?;
        self.set_element(row, col, value);
        Ok(())
    }

    /// Iterate over stored values in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, T)> + '_ {
        self.elements.iter().map(|(&coordinate, &value)| (coordinate, value))
    }

    /// Stored values in row-major order
    pub fn entries(&self) -> Vec<Entry<T>> {
        let mut entries: Vec<Entry<T>> = self
            .iter()
            .map(|(c, value)| Entry::new(c.row, c.col, value))
            .collect();
        entries.sort_unstable_by_key(Entry::coordinate);
        entries
    }

    /// Whether any stored value lies outside the declared dimensions
    pub fn has_out_of_range_entries(&self) -> bool {
        self.elements
            .keys()
            .any(|c| !c.is_within(self.nrows, self.ncols))
    }
}

impl<T: MatrixElement> SparseMatrix for HashMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> T {
        HashMatrix::get_element(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        HashMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        HashMatrix::nnz(self)
    }
}

impl<T: MatrixElement> MatrixOperations for HashMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<(usize, T)> = self
            .iter()
            .filter(|(c, _)| c.row == row_index)
            .map(|(c, value)| (c.col, value))
            .collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<(usize, T)> = self
            .iter()
            .filter(|(c, _)| c.col == col_index)
            .map(|(c, value)| (c.row, value))
            .collect();
        col.sort_unstable_by_key(|&(row, _)| row);
        col
    }
}

impl<T: MatrixElement> fmt::Display for HashMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SparseMatrix({}x{}) with elements: {{",
            self.nrows, self.ncols
        )?;
        for (i, entry) in self.entries().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {}): {}", entry.row, entry.col, entry.value)?;
        }
        f.write_str("}")
    }
}
