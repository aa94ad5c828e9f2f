//! Error type for the fallible edges: CSV ingestion and report output.
//!
//! The standing engine itself never fails.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading inputs or writing reports
#[derive(Debug, Error)]
pub enum StandingError {
    /// Filesystem failure on a known path
    #[error("{path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, wrong column count, unparsable number)
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A data row that parsed as CSV but failed validation (1-based row number)
    #[error("row {row}: {message}")]
    InvalidRow {
        /// Data row number, header excluded
        row: usize,
        /// What was wrong with it
        message: String,
    },

    /// Template rendering failed
    #[error("failed to render report: {0}")]
    Render(#[from] askama::Error),
}

impl StandingError {
    /// Build an [`StandingError::InvalidRow`]
    pub fn invalid_row(row: usize, message: impl Into<String>) -> Self {
        Self::InvalidRow {
            row,
            message: message.into(),
        }
    }
}

/// Result alias for this crate
pub type Result<T, E = StandingError> = std::result::Result<T, E>;
