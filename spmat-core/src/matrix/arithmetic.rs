//! Sparse arithmetic between hash-backed matrices
//!
//! All operations touch only populated coordinates. Operands are never
//! mutated; each call builds a new matrix. Integer overflow is reported
//! as [`SpmatError::ArithmeticOverflow`] at the coordinate being computed.

use alloc::vec::Vec;

use hashbrown::HashMap;

use super::HashMatrix;
use crate::validation::{validate_product_shape, validate_same_shape};
use crate::{Coordinate, MatrixElement, Operation, SpmatError};

fn overflow(coordinate: Coordinate) -> SpmatError {
    SpmatError::ArithmeticOverflow {
        row: coordinate.row,
        col: coordinate.col,
    }
}

impl<T: MatrixElement> HashMatrix<T> {
    /// Elementwise sum
    ///
    /// Both operands must have identical dimensions. Iterates the union of
    /// stored coordinates; sums that cancel to zero are not stored.
    pub fn add(&self, other: &Self) -> Result<Self, SpmatError> {
        validate_same_shape(Operation::Add, self.dimensions(), other.dimensions())?;

        let mut result = Self::new(self.nrows, self.ncols);
        for (&coordinate, &value) in &self.elements {
            let sum = value
                .checked_add(other.get_element(coordinate.row, coordinate.col))
                .ok_or(overflow(coordinate))?;
            result.set_element(coordinate.row, coordinate.col, sum);
        }

        for (&coordinate, &value) in &other.elements {
            if !self.elements.contains_key(&coordinate) {
                result.set_element(coordinate.row, coordinate.col, value);
            }
        }

        Ok(result)
    }

    /// Elementwise difference `self - other`
    ///
    /// Same shape rule as [`HashMatrix::add`]. Coordinates stored only in
    /// `other` are negated directly rather than through a negated copy.
    pub fn subtract(&self, other: &Self) -> Result<Self, SpmatError> {
        validate_same_shape(Operation::Subtract, self.dimensions(), other.dimensions())?;

        let mut result = Self::new(self.nrows, self.ncols);
        for (&coordinate, &value) in &self.elements {
            let difference = value
                .checked_sub(other.get_element(coordinate.row, coordinate.col))
                .ok_or(overflow(coordinate))?;
            result.set_element(coordinate.row, coordinate.col, difference);
        }

        for (&coordinate, &value) in &other.elements {
            if !self.elements.contains_key(&coordinate) {
                let negated = value.checked_neg().ok_or(overflow(coordinate))?;
                result.set_element(coordinate.row, coordinate.col, negated);
            }
        }

        Ok(result)
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.ncols == other.nrows`; the result is
    /// `self.nrows x other.ncols`. The nonzeros of `other` are indexed by
    /// row once, so each stored `(i, k)` of `self` only meets the stored
    /// `(k, j)` of `other`. Cost is proportional to the number of such
    /// pairs instead of `nnz(self) * other.ncols`.
    ///
    /// Partial sums are kept in [`MatrixElement::Wide`], so overflow is
    /// reported only when a final value does not fit `T`.
    pub fn multiply(&self, other: &Self) -> Result<Self, SpmatError> {
        let (nrows, ncols) = validate_product_shape(self.dimensions(), other.dimensions())?;

        let rows_of_other = other.row_index();
        let mut sums: HashMap<Coordinate, T::Wide> = HashMap::new();

        for (&Coordinate { row: i, col: k }, &left) in &self.elements {
            let Some(row) = rows_of_other.get(&k) else {
                continue;
            };

            for &(j, right) in row {
                let target = Coordinate::new(i, j);
                let sum = sums.entry(target).or_default();
                *sum = T::checked_accumulate(*sum, left.wide_mul(right))
                    .ok_or(overflow(target))?;
            }
        }

        // Only the final sum has to fit the element type
        let mut result = Self::new(nrows, ncols);
        for (coordinate, wide) in sums {
            let value = T::narrow(wide).ok_or(overflow(coordinate))?;
            result.set_element(coordinate.row, coordinate.col, value);
        }

        Ok(result)
    }

    /// Multiply every element by a scalar
    pub fn scale(&self, factor: T) -> Result<Self, SpmatError> {
        let mut result = Self::new(self.nrows, self.ncols);
        if factor.is_zero() {
            return Ok(result);
        }

        for (&coordinate, &value) in &self.elements {
            let scaled = value.checked_mul(factor).ok_or(overflow(coordinate))?;
            result.set_element(coordinate.row, coordinate.col, scaled);
        }

        Ok(result)
    }

    /// Group stored values by row as `(col, value)` lists
    ///
    /// Columns at or past `ncols` are left out: a product only ranges over
    /// the declared columns of its right operand.
    fn row_index(&self) -> HashMap<usize, Vec<(usize, T)>> {
        let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (&coordinate, &value) in &self.elements {
            if coordinate.col < self.ncols {
                rows.entry(coordinate.row)
                    .or_default()
                    .push((coordinate.col, value));
            }
        }
        rows
    }
}
