//! Input handling: file descriptors, CSV parsing and typed rows.

mod parser;
mod row;
mod source;

pub use parser::{Parser, ParserConfig};
pub use row::Row;
pub use source::{FileDescriptor, FileKind, MemorySource, TableSource};
