//! CellReader: column discovery and Type/Marker classification for CSV exports.
//!
//! Given a selection of CSV files that share a header layout, CellReader
//! collects the columns that follow a fixed block of metadata columns and
//! decides for each one whether it is a binary indicator (a *Type* column,
//! shown as a toggle) or a continuous measurement (a *Marker* column, shown
//! as a min/max range).
//!
//! # Example
//!
//! ```no_run
//! use cellreader::{ScanState, Scanner};
//!
//! # async fn run() -> cellreader::Result<()> {
//! let scanner = Scanner::new();
//! let mut state = ScanState::new();
//! let report = scanner.scan_dir(&mut state, "exports/").await?;
//!
//! for column in &report.columns {
//!     println!("{} -> {}", column.name, column.kind);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod discovery;
pub mod error;
pub mod input;
pub mod report;
pub mod schema;

mod scanner;

pub use crate::scanner::{
    DEFAULT_LEADING_COLUMNS, DEFAULT_SAMPLE_ROWS, ScanConfig, ScanState, Scanner,
};
pub use classify::{ColumnClassifier, Evidence};
pub use discovery::ColumnDiscoverer;
pub use error::{CellReaderError, Result};
pub use input::{FileDescriptor, FileKind, MemorySource, Parser, ParserConfig, Row, TableSource};
pub use report::{FileFailure, ScanReport, ScanStage};
pub use schema::{CandidateColumns, ClassifiedColumn, Classifications, ColumnKind, PresentationHint};
