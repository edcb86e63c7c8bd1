//! Main Scanner struct and public API.

use std::path::Path;

use chrono::Utc;
use log::info;

use crate::classify::ColumnClassifier;
use crate::discovery::ColumnDiscoverer;
use crate::error::{CellReaderError, Result};
use crate::input::{FileDescriptor, Parser, ParserConfig, TableSource};
use crate::report::ScanReport;
use crate::schema::{CandidateColumns, ClassifiedColumn, Classifications};

/// Metadata columns preceding the candidate columns in each header.
pub const DEFAULT_LEADING_COLUMNS: usize = 8;

/// Data rows read per file when classifying a column.
pub const DEFAULT_SAMPLE_ROWS: usize = 10;

/// Configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Leading columns skipped during discovery.
    pub leading_columns: usize,
    /// Maximum rows sampled per file during classification.
    pub sample_rows: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            leading_columns: DEFAULT_LEADING_COLUMNS,
            sample_rows: DEFAULT_SAMPLE_ROWS,
        }
    }
}

impl ScanConfig {
    /// Check the configuration before a scan.
    ///
    /// # Errors
    ///
    /// Returns [`CellReaderError::Config`] if `sample_rows` is zero or the
    /// delimiter equals the quote character.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rows == 0 {
            return Err(CellReaderError::Config(
                "sample_rows must be at least 1".to_string(),
            ));
        }
        if self.parser.delimiter == self.parser.quote {
            return Err(CellReaderError::Config(format!(
                "delimiter and quote must differ (both are '{}')",
                self.parser.delimiter as char
            )));
        }
        Ok(())
    }
}

/// State carried by one caller across scans.
///
/// `candidates` is rebuilt on every scan. `classifications` persists, so a
/// column classified once keeps its verdict for as long as the state lives.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    pub candidates: CandidateColumns,
    pub classifications: Classifications,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Runs discovery followed by classification over a file selection.
pub struct Scanner {
    config: ScanConfig,
    discoverer: ColumnDiscoverer,
    classifier: ColumnClassifier,
}

impl Scanner {
    /// Create a scanner with default configuration.
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// Create a scanner with custom configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let discoverer = ColumnDiscoverer::new(parser.clone(), config.leading_columns);
        let classifier = ColumnClassifier::new(parser, config.sample_rows);

        Self {
            config,
            discoverer,
            classifier,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Discover and classify the columns of `files`, visited in order.
    ///
    /// File-level problems end up in [`ScanReport::failures`]; only an
    /// invalid configuration is returned as an error.
    pub async fn scan<S: TableSource>(
        &self,
        state: &mut ScanState,
        files: &[S],
    ) -> Result<ScanReport> {
        self.config.validate()?;

        state.candidates.clear();
        let mut failures = Vec::new();

        let unreadable = self
            .discoverer
            .discover(files, &mut state.candidates, &mut failures)
            .await;
        self.classifier
            .classify(
                &state.candidates,
                files,
                &mut state.classifications,
                &mut failures,
                unreadable,
            )
            .await;

        let mut columns = Vec::new();
        let mut unclassified = Vec::new();
        for name in state.candidates.iter() {
            match state.classifications.get(name) {
                Some(kind) => columns.push(ClassifiedColumn::new(name, kind)),
                None => unclassified.push(name.to_string()),
            }
        }

        let files_skipped = files.iter().filter(|f| !f.kind().is_supported()).count();

        info!(
            "scanned {} files: {} candidates, {} classified, {} failures",
            files.len(),
            state.candidates.len(),
            columns.len(),
            failures.len()
        );

        Ok(ScanReport {
            scanned_at: Utc::now(),
            files_scanned: files.len(),
            files_skipped,
            candidates: state.candidates.len(),
            columns,
            unclassified,
            failures,
        })
    }

    /// Scan every CSV file in `dir`, in file-name order.
    pub async fn scan_dir(
        &self,
        state: &mut ScanState,
        dir: impl AsRef<Path>,
    ) -> Result<ScanReport> {
        let files = FileDescriptor::csv_files(dir).await?;
        self.scan(state, &files).await
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
