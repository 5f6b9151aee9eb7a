//! One-shot batch computation over two matrix files

use std::path::PathBuf;

use log::info;
use spmat_core::{HashMatrix, Operation, ParseConfig, SpmatError};

use crate::error::{Error, Result};
use crate::loader::MatrixFile;

/// Element type used for matrices loaded from files
pub type Element = i64;

/// Matrix type produced by [`run`]
pub type Matrix = HashMatrix<Element>;

/// Inputs of a single run
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Left operand file
    pub lhs: PathBuf,
    /// Right operand file
    pub rhs: PathBuf,
    /// Operation name as given by the user
    pub operation: String,
    /// Parsing rules applied to both files
    pub parse: ParseConfig,
}

impl RunRequest {
    /// Create a request with the default parsing rules
    pub fn new(lhs: impl Into<PathBuf>, rhs: impl Into<PathBuf>, operation: impl Into<String>) -> Self {
        Self {
            lhs: lhs.into(),
            rhs: rhs.into(),
            operation: operation.into(),
            parse: ParseConfig::default(),
        }
    }

    /// Set the parsing rules
    pub fn with_parse_config(mut self, parse: ParseConfig) -> Self {
        self.parse = parse;
        self
    }
}

/// Resolve an operation name
///
/// A rejected name is kept in [`Error::UnknownOperation`]; the nameless
/// core error never reaches the caller.
pub fn parse_operation(name: &str) -> Result<Operation> {
    name.parse().map_err(|err| match err {
        SpmatError::UnknownOperation => Error::UnknownOperation(name.trim().to_string()),
        other => Error::Matrix(other),
    })
}

/// Load both operands and apply the requested operation
///
/// The operation name is resolved before either file is opened.
pub fn run(request: &RunRequest) -> Result<Matrix> {
    let operation = parse_operation(&request.operation)?;

    let lhs: Matrix = MatrixFile::read_matrix(&request.lhs, &request.parse)?;
    let rhs: Matrix = MatrixFile::read_matrix(&request.rhs, &request.parse)?;

    let result = operation.apply(&lhs, &rhs)?;
    let (nrows, ncols) = result.dimensions();
    info!(
        "{operation}: {}x{} ({} nnz) with {}x{} ({} nnz) gave {nrows}x{ncols} ({} nnz)",
        lhs.nrows(),
        lhs.ncols(),
        lhs.nnz(),
        rhs.nrows(),
        rhs.ncols(),
        rhs.nnz(),
        result.nnz()
    );

    Ok(result)
}
