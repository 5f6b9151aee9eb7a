//! spmat - Sparse Integer Matrix Arithmetic
//!
//! This library loads sparse integer matrices from a small text format and
//! adds, subtracts or multiplies them without ever building a dense matrix.
//!
//! ## Architecture
//!
//! - **spmat-core**: storage, text format, arithmetic and validation (no I/O)
//! - **spmat**: file loading, operation dispatch, result rendering and the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{render, run, OutputFormat, RunRequest};
//!
//! fn example() -> spmat::Result<()> {
//!     let request = RunRequest::new("a.txt", "b.txt", "multiply");
//!     let product = run(&request)?;
//!
//!     println!("{}", render(&product, OutputFormat::Text)?);
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```text
//! rows=2
//! cols=2
//! (0,0,5)
//! (1,1,3)
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Core traits
    MatrixElement, MatrixOperations, SparseMatrix,
    // Storage
    Coordinate, Entry, HashMatrix,
    // Format and configuration
    MatrixHeader, ParseConfig, ZeroEntries,
    // Operations and errors
    ErrorCategory, Operation, SpmatError,
};

pub mod error;
pub mod loader;
pub mod report;
pub mod run;

pub use error::{Error, Result};
pub use loader::MatrixFile;
pub use report::{render, MatrixReport, OutputFormat};
pub use run::{parse_operation, run, Element, Matrix, RunRequest};
