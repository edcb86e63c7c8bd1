//! Classification data model: column kinds, presentation hints and the
//! per-run collections.

mod columns;
mod types;

pub use columns::{CandidateColumns, ClassifiedColumn, Classifications};
pub use types::{ColumnKind, PresentationHint};
