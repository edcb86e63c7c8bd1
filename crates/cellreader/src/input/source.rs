//! File descriptors: the readable sources handed to the engine.

use std::future::Future;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CellReaderError, Result};

/// Type tag of a selected file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "extension")]
pub enum FileKind {
    /// Delimited text with a header row.
    Csv,
    /// Anything else, carrying the original extension.
    Unsupported(String),
}

impl FileKind {
    /// Derive the kind from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();

        if ext.eq_ignore_ascii_case("csv") {
            FileKind::Csv
        } else {
            FileKind::Unsupported(ext)
        }
    }

    /// Returns true if the engine reads this kind of file.
    pub fn is_supported(&self) -> bool {
        matches!(self, FileKind::Csv)
    }
}

/// A selected tabular file the engine can open for reading.
///
/// `read_bytes` covers one open/read/close scope; implementations must not
/// hold the underlying handle after the returned future completes.
pub trait TableSource {
    /// Display name, used in failure reports and logs.
    fn name(&self) -> &str;

    /// Type tag used to skip unsupported files.
    fn kind(&self) -> FileKind;

    /// Read the full contents.
    fn read_bytes(&self) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// A file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name without directory.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
}

impl FileDescriptor {
    /// Create a descriptor for a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }

    /// List the regular files in `dir`, sorted by file name.
    pub async fn list_dir(dir: impl AsRef<Path>) -> Result<Vec<FileDescriptor>> {
        let dir = dir.as_ref();
        let io_err = |source: std::io::Error| CellReaderError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let file_type = entry.file_type().await.map_err(io_err)?;
            if file_type.is_file() {
                files.push(FileDescriptor::new(entry.path()));
            }
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    /// List only the CSV files in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`CellReaderError::EmptyData`] when the folder holds no CSV files.
    pub async fn csv_files(dir: impl AsRef<Path>) -> Result<Vec<FileDescriptor>> {
        let files: Vec<FileDescriptor> = Self::list_dir(dir)
            .await?
            .into_iter()
            .filter(|f| f.kind().is_supported())
            .collect();

        if files.is_empty() {
            return Err(CellReaderError::EmptyData(
                "The selected folder does not contain any CSV files".to_string(),
            ));
        }
        Ok(files)
    }
}

impl TableSource for FileDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FileKind {
        FileKind::from_path(&self.path)
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| CellReaderError::Io {
                path: self.path.clone(),
                source: e,
            })
    }
}

/// An in-memory table, for callers that already hold the file contents.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    kind: FileKind,
    bytes: Vec<u8>,
}

impl MemorySource {
    /// Create a source whose kind is derived from `name`'s extension.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let kind = FileKind::from_path(&name);
        Self {
            name,
            kind,
            bytes: bytes.into(),
        }
    }

    /// Override the kind tag.
    pub fn with_kind(mut self, kind: FileKind) -> Self {
        self.kind = kind;
        self
    }
}

impl TableSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FileKind {
        self.kind.clone()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}
