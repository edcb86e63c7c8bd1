//! Error types for the CellReader library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for CellReader operations.
#[derive(Debug, Error)]
pub enum CellReaderError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content (bad header, ragged row, invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty folder or selection with nothing to scan.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CellReader operations.
pub type Result<T> = std::result::Result<T, CellReaderError>;
