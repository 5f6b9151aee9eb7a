//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as values of a sparse matrix.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// Elements are integers. All arithmetic is checked: an operation that
/// would overflow returns `None` so callers can report it instead of
/// wrapping silently.
pub trait MatrixElement: Copy + PartialEq + Eq + Debug + Display + FromStr + Sized {
    /// The additive identity, never stored in a sparse matrix
    const ZERO: Self;

    /// The multiplicative identity
    const ONE: Self;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Checked addition
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Checked subtraction
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Checked multiplication
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Checked negation
    fn checked_neg(self) -> Option<Self>;

    /// Accumulator holding any product of two elements without overflow
    type Wide: Copy + Default + Debug;

    /// Exact product in the wide accumulator type
    fn wide_mul(self, rhs: Self) -> Self::Wide;

    /// Checked addition of two accumulators
    fn checked_accumulate(acc: Self::Wide, rhs: Self::Wide) -> Option<Self::Wide>;

    /// Narrow an accumulator back, `None` if it does not fit
    fn narrow(wide: Self::Wide) -> Option<Self>;
}

impl MatrixElement for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i32::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i32::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i32::checked_mul(self, rhs)
    }

    fn checked_neg(self) -> Option<Self> {
        i32::checked_neg(self)
    }

    type Wide = i64;

    fn wide_mul(self, rhs: Self) -> i64 {
        i64::from(self) * i64::from(rhs)
    }

    fn checked_accumulate(acc: i64, rhs: i64) -> Option<i64> {
        acc.checked_add(rhs)
    }

    fn narrow(wide: i64) -> Option<Self> {
        i32::try_from(wide).ok()
    }
}

impl MatrixElement for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }

    fn checked_neg(self) -> Option<Self> {
        i64::checked_neg(self)
    }

    type Wide = i128;

    fn wide_mul(self, rhs: Self) -> i128 {
        i128::from(self) * i128::from(rhs)
    }

    fn checked_accumulate(acc: i128, rhs: i128) -> Option<i128> {
        acc.checked_add(rhs)
    }

    fn narrow(wide: i128) -> Option<Self> {
        i64::try_from(wide).ok()
    }
}
