//! Composite (row, col) key for sparse storage

/// A (row, column) pair uniquely identifying a matrix cell
///
/// Ordering is row-major, so sorting coordinates yields the order in
/// which entries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies inside a `nrows x ncols` extent
    pub const fn is_within(&self, nrows: usize, ncols: usize) -> bool {
        self.row < nrows && self.col < ncols
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single stored value together with its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Stored value
    pub value: T,
}

impl<T> Entry<T> {
    /// Create an entry
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Position of this entry
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.row, self.col)
    }
}
