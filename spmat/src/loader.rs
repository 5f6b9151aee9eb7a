//! Loading matrices from text files
//!
//! A file is read in a single blocking call and handed to the parser in
//! `spmat-core`. Errors carry the path of the offending file.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use spmat_core::{parse_matrix_with_stats, HashMatrix, MatrixElement, ParseConfig, SpmatError};

use crate::error::{Error, Result};

/// Entry point for reading matrix files
pub struct MatrixFile;

impl MatrixFile {
    /// Read and parse a matrix file
    pub fn read_matrix<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        config: &ParseConfig,
    ) -> Result<HashMatrix<T>> {
        let path = path.as_ref();
        debug!("Reading matrix file {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse_str(&text, config).map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse matrix text that is already in memory
    pub fn parse_str<T: MatrixElement>(
        text: &str,
        config: &ParseConfig,
    ) -> std::result::Result<HashMatrix<T>, SpmatError> {
        let (matrix, stats) = parse_matrix_with_stats::<T>(text, config)?;
        let (nrows, ncols) = matrix.dimensions();

        debug!(
            "Parsed {nrows}x{ncols} matrix: {} entries, {} stored, {} blank lines skipped",
            stats.entries,
            matrix.nnz(),
            stats.blank_lines
        );
        if stats.zero_entries > 0 {
            warn!("Dropped {} zero-valued entries", stats.zero_entries);
        }
        if stats.duplicate_entries > 0 {
            warn!(
                "{} entries overwrote an earlier entry at the same position",
                stats.duplicate_entries
            );
        }
        if matrix.has_out_of_range_entries() {
            warn!("Matrix holds entries outside its declared {nrows}x{ncols} extent");
        }

        Ok(matrix)
    }
}
