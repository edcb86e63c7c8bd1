//! Candidate column discovery across the selected files.

use std::collections::HashSet;

use log::{debug, warn};

use crate::error::Result;
use crate::input::{Parser, TableSource};
use crate::report::{FileFailure, ScanStage};
use crate::schema::CandidateColumns;

/// Names left after dropping the leading metadata columns.
pub fn candidates_after_offset<'a>(
    names: impl IntoIterator<Item = &'a str>,
    offset: usize,
) -> impl Iterator<Item = &'a str> {
    names.into_iter().skip(offset)
}

/// Collects candidate column names from each file's header.
#[derive(Debug, Clone)]
pub struct ColumnDiscoverer {
    parser: Parser,
    leading_columns: usize,
}

impl ColumnDiscoverer {
    /// Create a discoverer that skips `leading_columns` metadata columns.
    pub fn new(parser: Parser, leading_columns: usize) -> Self {
        Self {
            parser,
            leading_columns,
        }
    }

    /// Add the candidates of every readable file to `candidates`.
    ///
    /// Unsupported and empty files contribute nothing. A file that fails to
    /// open or parse is recorded in `failures` and the loop moves on.
    ///
    /// Returns the indices of the files that failed, so later phases can
    /// skip them.
    pub async fn discover<S: TableSource>(
        &self,
        files: &[S],
        candidates: &mut CandidateColumns,
        failures: &mut Vec<FileFailure>,
    ) -> HashSet<usize> {
        let mut unreadable = HashSet::new();
        for (index, file) in files.iter().enumerate() {
            if !file.kind().is_supported() {
                debug!("discovery: skipping unsupported file {}", file.name());
                continue;
            }

            match self.header_names(file).await {
                Ok(Some(names)) => {
                    let mut added = 0;
                    let kept = candidates_after_offset(
                        names.iter().map(String::as_str),
                        self.leading_columns,
                    );
                    for name in kept {
                        if candidates.insert(name) {
                            added += 1;
                        }
                    }
                    debug!(
                        "discovery: {} has {} columns, {} new candidates",
                        file.name(),
                        names.len(),
                        added
                    );
                }
                Ok(None) => debug!("discovery: {} has no records", file.name()),
                Err(e) => {
                    warn!("discovery: failed to read {}: {}", file.name(), e);
                    failures.push(FileFailure::new(file.name(), ScanStage::Discovery, &e));
                    unreadable.insert(index);
                }
            }
        }
        unreadable
    }

    /// Column names from the first record, or `None` for a file without records.
    async fn header_names<S: TableSource>(&self, file: &S) -> Result<Option<Vec<String>>> {
        let bytes = file.read_bytes().await?;
        let row = self.parser.first_row(&bytes)?;
        Ok(row.map(|r| r.names().map(str::to_string).collect()))
    }
}
