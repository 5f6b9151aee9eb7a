//! Abstract interfaces for sparse matrices
//!
//! Traits here are pure interfaces; the hash-backed implementation lives
//! in [`crate::matrix`].

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::SparseMatrix;
