//! Scan output: classified columns, leftovers and per-file failures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CellReaderError, Result};
use crate::schema::{ClassifiedColumn, ColumnKind};

/// Phase of a scan in which a file failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStage {
    Discovery,
    Classification,
}

/// A file that could not be opened or parsed. Never fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    /// Name of the failing file.
    pub file: String,
    /// Phase that hit the failure.
    pub stage: ScanStage,
    /// Human-readable error message.
    pub message: String,
}

impl FileFailure {
    pub fn new(file: impl Into<String>, stage: ScanStage, error: &CellReaderError) -> Self {
        Self {
            file: file.into(),
            stage,
            message: error.to_string(),
        }
    }
}

/// Result of one discovery + classification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// When the scan finished.
    pub scanned_at: DateTime<Utc>,
    /// Number of files in the selection.
    pub files_scanned: usize,
    /// Files skipped because their type is not supported.
    pub files_skipped: usize,
    /// Number of distinct candidate columns discovered.
    pub candidates: usize,
    /// Classified columns, in discovery order.
    pub columns: Vec<ClassifiedColumn>,
    /// Candidates no selected file had data for.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unclassified: Vec<String>,
    /// Files that failed to open or parse.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
}

impl ScanReport {
    /// Columns classified as binary Type columns.
    pub fn type_columns(&self) -> impl Iterator<Item = &ClassifiedColumn> {
        self.columns.iter().filter(|c| c.kind == ColumnKind::Type)
    }

    /// Columns classified as ranged Marker columns.
    pub fn marker_columns(&self) -> impl Iterator<Item = &ClassifiedColumn> {
        self.columns.iter().filter(|c| c.kind == ColumnKind::Marker)
    }

    /// Look up a column's verdict by name.
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.kind)
    }

    /// One-line count of the verdicts, e.g. `3 candidates: 1 type, 1 marker, 1 without data`.
    pub fn summary(&self) -> String {
        format!(
            "{} candidates: {} type, {} marker, {} without data",
            self.candidates,
            self.type_columns().count(),
            self.marker_columns().count(),
            self.unclassified.len()
        )
    }

    /// True if every selected file was read without error.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
