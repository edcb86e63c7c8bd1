//! Type/Marker classification by sampling the first rows of each file.
//!
//! A column is presumed binary until a single sampled value other than
//! `"0"` or `"1"` is seen. The first file in selection order that has any
//! sampled value for the column decides its kind; later files are not
//! consulted.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::error::Result;
use crate::input::{Parser, Row, TableSource};
use crate::report::{FileFailure, ScanStage};
use crate::schema::{CandidateColumns, Classifications, ColumnKind};

/// What one file's sample says about a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// No sampled row has the column.
    Absent,
    /// Every sampled value was `"0"` or `"1"`.
    Binary,
    /// At least one sampled value was something else.
    NonBinary,
}

impl Evidence {
    /// Verdict implied by this evidence, if any.
    pub fn kind(&self) -> Option<ColumnKind> {
        match self {
            Evidence::Absent => None,
            Evidence::Binary => Some(ColumnKind::Type),
            Evidence::NonBinary => Some(ColumnKind::Marker),
        }
    }
}

/// Exact textual match against the binary alphabet. No trimming.
pub fn is_binary_value(value: &str) -> bool {
    value == "0" || value == "1"
}

/// Inspect sampled rows for `column`, stopping at the first non-binary value.
pub fn inspect_sample(rows: &[Row], column: &str) -> Evidence {
    let mut seen = false;
    for value in rows.iter().filter_map(|row| row.get(column)) {
        seen = true;
        if !is_binary_value(value) {
            return Evidence::NonBinary;
        }
    }

    if seen {
        Evidence::Binary
    } else {
        Evidence::Absent
    }
}

/// Decides Type vs Marker for each candidate column.
#[derive(Debug, Clone)]
pub struct ColumnClassifier {
    parser: Parser,
    sample_rows: usize,
}

impl ColumnClassifier {
    /// Create a classifier reading at most `sample_rows` rows per file.
    pub fn new(parser: Parser, sample_rows: usize) -> Self {
        Self {
            parser,
            sample_rows,
        }
    }

    /// Classify every candidate that has no verdict yet.
    ///
    /// Existing entries in `classifications` are never re-evaluated. A
    /// candidate with no data in any file stays unclassified. Each file is
    /// sampled at most once per pass and the sample is reused for every
    /// candidate. Files listed in `unreadable` (by index) are skipped; a file
    /// that fails to read here is reported once in `failures` and added to
    /// that set.
    pub async fn classify<S: TableSource>(
        &self,
        candidates: &CandidateColumns,
        files: &[S],
        classifications: &mut Classifications,
        failures: &mut Vec<FileFailure>,
        mut unreadable: HashSet<usize>,
    ) {
        let mut samples: HashMap<usize, Vec<Row>> = HashMap::new();

        for column in candidates.iter() {
            if let Some(kind) = classifications.get(column) {
                debug!("classify: {} already classified as {}", column, kind);
                continue;
            }

            for (index, file) in files.iter().enumerate() {
                if !file.kind().is_supported() || unreadable.contains(&index) {
                    continue;
                }

                if !samples.contains_key(&index) {
                    match self.sample(file).await {
                        Ok(rows) => {
                            samples.insert(index, rows);
                        }
                        Err(e) => {
                            warn!("classify: failed to read {}: {}", file.name(), e);
                            failures.push(FileFailure::new(
                                file.name(),
                                ScanStage::Classification,
                                &e,
                            ));
                            unreadable.insert(index);
                            continue;
                        }
                    }
                }
                let Some(rows) = samples.get(&index) else {
                    continue;
                };

                if let Some(kind) = inspect_sample(rows, column).kind() {
                    classifications.record(column, kind);
                    debug!("classify: {} is {} (from {})", column, kind, file.name());
                    break;
                }
            }

            if !classifications.contains(column) {
                debug!("classify: no file has data for {}", column);
            }
        }
    }

    async fn sample<S: TableSource>(&self, file: &S) -> Result<Vec<Row>> {
        let bytes = file.read_bytes().await?;
        self.parser.sample_rows(&bytes, self.sample_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::input::{FileKind, MemorySource};

    /// Source that counts how often it is opened.
    struct CountingSource {
        inner: MemorySource,
        reads: AtomicUsize,
    }

    impl CountingSource {
        fn new(name: &str, content: String) -> Self {
            Self {
                inner: MemorySource::new(name, content),
                reads: AtomicUsize::new(0),
            }
        }

        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    impl TableSource for CountingSource {
        fn name(&self) -> &str {
            self.inner.name()
        }

        fn kind(&self) -> FileKind {
            self.inner.kind()
        }

        async fn read_bytes(&self) -> Result<Vec<u8>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.read_bytes().await
        }
    }

    fn rows(column: &str, values: &[&str]) -> Vec<Row> {
        values
            .iter()
            .map(|v| Row::from_parts(["id", column], ["S", *v]))
            .collect()
    }

    fn classifier() -> ColumnClassifier {
        ColumnClassifier::new(Parser::new(), 10)
    }

    #[test]
    fn test_inspect_binary() {
        assert_eq!(inspect_sample(&rows("CD3", &["0", "1", "0"]), "CD3"), Evidence::Binary);
    }

    #[test]
    fn test_inspect_non_binary() {
        assert_eq!(
            inspect_sample(&rows("CD19", &["0", "1", "4.5"]), "CD19"),
            Evidence::NonBinary
        );
        assert_eq!(inspect_sample(&rows("CD19", &["1.0"]), "CD19"), Evidence::NonBinary);
        assert_eq!(inspect_sample(&rows("CD19", &[""]), "CD19"), Evidence::NonBinary);
        assert_eq!(inspect_sample(&rows("CD19", &[" 1"]), "CD19"), Evidence::NonBinary);
    }

    #[test]
    fn test_inspect_absent() {
        assert_eq!(inspect_sample(&rows("CD3", &["1"]), "CD4"), Evidence::Absent);
        assert_eq!(inspect_sample(&[], "CD4"), Evidence::Absent);
    }

    #[tokio::test]
    async fn test_first_file_with_evidence_wins() {
        let candidates: CandidateColumns = ["CD3"].into_iter().collect();
        let files = vec![
            MemorySource::new("a.csv", "id,CD3\nS1,1\nS2,0\n"),
            MemorySource::new("b.csv", "id,CD3\nS1,42\n"),
        ];
        let mut classes = Classifications::new();
        let mut failures = Vec::new();

        classifier()
            .classify(&candidates, &files, &mut classes, &mut failures, HashSet::new())
            .await;

        assert_eq!(classes.get("CD3"), Some(ColumnKind::Type));
    }

    #[tokio::test]
    async fn test_only_sampled_rows_count() {
        let mut data = String::from("id,CD3\n");
        for _ in 0..10 {
            data.push_str("S,1\n");
        }
        data.push_str("S,99\n");
        let files = vec![MemorySource::new("a.csv", data)];
        let candidates: CandidateColumns = ["CD3"].into_iter().collect();
        let mut classes = Classifications::new();
        let mut failures = Vec::new();

        classifier()
            .classify(&candidates, &files, &mut classes, &mut failures, HashSet::new())
            .await;

        assert_eq!(classes.get("CD3"), Some(ColumnKind::Type));
    }

    #[tokio::test]
    async fn test_header_only_file_gives_no_evidence() {
        let files = vec![
            MemorySource::new("empty.csv", "id,CD3\n"),
            MemorySource::new("full.csv", "id,CD3\nS1,3.3\n"),
        ];
        let candidates: CandidateColumns = ["CD3"].into_iter().collect();
        let mut classes = Classifications::new();
        let mut failures = Vec::new();

        classifier()
            .classify(&candidates, &files, &mut classes, &mut failures, HashSet::new())
            .await;

        assert_eq!(classes.get("CD3"), Some(ColumnKind::Marker));
    }

    #[tokio::test]
    async fn test_existing_verdict_is_kept() {
        let files = vec![MemorySource::new("a.csv", "id,CD3\nS1,7\n")];
        let candidates: CandidateColumns = ["CD3"].into_iter().collect();
        let mut classes = Classifications::new();
        classes.record("CD3", ColumnKind::Type);
        let mut failures = Vec::new();

        classifier()
            .classify(&candidates, &files, &mut classes, &mut failures, HashSet::new())
            .await;

        assert_eq!(classes.get("CD3"), Some(ColumnKind::Type));
    }

    #[tokio::test]
    async fn test_unreadable_file_reported_once() {
        let files = vec![
            MemorySource::new("bad.csv", "id,CD3,CD19\nS1,1\n"),
            MemorySource::new("good.csv", "id,CD3,CD19\nS1,1,2.5\n"),
        ];
        let candidates: CandidateColumns = ["CD3", "CD19"].into_iter().collect();
        let mut classes = Classifications::new();
        let mut failures = Vec::new();

        classifier()
            .classify(&candidates, &files, &mut classes, &mut failures, HashSet::new())
            .await;

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].stage, ScanStage::Classification);
        assert_eq!(classes.get("CD3"), Some(ColumnKind::Type));
        assert_eq!(classes.get("CD19"), Some(ColumnKind::Marker));
    }

    #[tokio::test]
    async fn test_missing_everywhere_stays_unclassified() {
        let files = vec![MemorySource::new("a.csv", "id,CD3\nS1,1\n")];
        let candidates: CandidateColumns = ["CD8"].into_iter().collect();
        let mut classes = Classifications::new();
        let mut failures = Vec::new();

        classifier()
            .classify(&candidates, &files, &mut classes, &mut failures, HashSet::new())
            .await;

        assert!(classes.is_empty());
        assert!(failures.is_empty());
    }

    #[tokio::test]
    async fn test_each_file_sampled_once_per_pass() {
        let names: Vec<String> = (0..30).map(|i| format!("M{}", i)).collect();
        let mut wide = format!("id,{}\n", names.join(","));
        for _ in 0..500 {
            wide.push('S');
            for _ in &names {
                wide.push_str(",2.5");
            }
            wide.push('\n');
        }
        // first file only carries half the columns, so the rest fall through
        let half = &names[..15];
        let mut narrow = format!("id,{}\n", half.join(","));
        narrow.push('S');
        for _ in half {
            narrow.push_str(",1");
        }
        narrow.push('\n');

        let files = vec![
            CountingSource::new("narrow.csv", narrow),
            CountingSource::new("wide.csv", wide),
        ];
        let candidates: CandidateColumns = names.iter().map(String::as_str).collect();
        let mut classes = Classifications::new();
        let mut failures = Vec::new();

        classifier()
            .classify(&candidates, &files, &mut classes, &mut failures, HashSet::new())
            .await;

        assert_eq!(classes.len(), 30);
        assert_eq!(classes.get("M0"), Some(ColumnKind::Type));
        assert_eq!(classes.get("M29"), Some(ColumnKind::Marker));
        assert_eq!(files[0].reads(), 1);
        assert_eq!(files[1].reads(), 1);
    }

    #[tokio::test]
    async fn test_known_unreadable_file_is_not_reopened() {
        let files = vec![
            CountingSource::new("bad.csv", "id,CD3\nS1\n".to_string()),
            CountingSource::new("good.csv", "id,CD3\nS1,1\n".to_string()),
        ];
        let candidates: CandidateColumns = ["CD3"].into_iter().collect();
        let mut classes = Classifications::new();
        let mut failures = Vec::new();

        classifier()
            .classify(&candidates, &files, &mut classes, &mut failures, HashSet::from([0]))
            .await;

        assert_eq!(files[0].reads(), 0);
        assert!(failures.is_empty());
        assert_eq!(classes.get("CD3"), Some(ColumnKind::Type));
    }
}
