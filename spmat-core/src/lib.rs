#![cfg_attr(not(test), no_std)]

//! spmat-core - Sparse Integer Matrix Storage and Arithmetic
//!
//! This crate provides the storage, text format and arithmetic for sparse
//! integer matrices. It performs no I/O; reading files and reporting
//! results live in the `spmat` crate.
//!
//! Without the `alloc` feature only the traits, error types and
//! line-level parsers are available.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod coordinate;
pub mod error;
pub mod format;
#[cfg(feature = "alloc")]
pub mod matrix;
pub mod operation;
pub mod traits;
pub mod validation;

pub use coordinate::{Coordinate, Entry};
pub use error::*;
pub use format::{parse_entry, MatrixHeader, ParseConfig, ParseStats, ZeroEntries};
#[cfg(feature = "alloc")]
pub use format::{parse_matrix, parse_matrix_with_stats};
#[cfg(feature = "alloc")]
pub use matrix::HashMatrix;
pub use operation::Operation;
#[cfg(feature = "alloc")]
pub use traits::MatrixOperations;
pub use traits::{MatrixElement, SparseMatrix};
