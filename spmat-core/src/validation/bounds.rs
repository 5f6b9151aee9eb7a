//! Dimension and bounds validation
//!
//! Pure shape checks performed before any arithmetic touches the
//! operands, so a mismatch never produces a partial result.

use crate::{Operation, SpmatError};

/// Validate that two operands have identical shapes
///
/// Required for elementwise addition and subtraction.
pub const fn validate_same_shape(
    operation: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), SpmatError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SpmatError::DimensionMismatch {
            operation,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate operand shapes for a matrix product
///
/// Returns the shape of the product, `left.rows x right.cols`.
pub const fn validate_product_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize), SpmatError> {
    if left.1 != right.0 {
        return Err(SpmatError::DimensionMismatch {
            operation: Operation::Multiply,
            left,
            right,
        });
    }
    Ok((left.0, right.1))
}

/// Validate that a position lies inside a matrix of the given shape
pub const fn validate_index(
    row: usize,
    col: usize,
    dimensions: (usize, usize),
) -> Result<(), SpmatError> {
    if row >= dimensions.0 || col >= dimensions.1 {
        return Err(SpmatError::IndexOutOfBounds { row, col });
    }
    Ok(())
}
