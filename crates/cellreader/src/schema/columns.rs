//! Candidate set and classification map owned by a scan run.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::types::{ColumnKind, PresentationHint};

/// Distinct candidate column names gathered across the selected files.
///
/// Iteration follows first-seen order so reports are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateColumns {
    names: IndexSet<String>,
}

impl CandidateColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateColumns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Column name to kind. Entries are write-once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifications {
    kinds: IndexMap<String, ColumnKind>,
}

impl Classifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict unless the column already has one.
    ///
    /// Returns true if the entry was inserted; an existing verdict is left
    /// untouched and false is returned.
    pub fn record(&mut self, name: impl Into<String>, kind: ColumnKind) -> bool {
        match self.kinds.entry(name.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(kind);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<ColumnKind> {
        self.kinds.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnKind)> {
        self.kinds.iter().map(|(n, k)| (n.as_str(), *k))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// A classified column together with its presentation hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedColumn {
    /// Column name.
    pub name: String,
    /// Type or Marker.
    pub kind: ColumnKind,
    /// Control the UI renders for this column.
    pub hint: PresentationHint,
}

impl ClassifiedColumn {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hint: kind.hint(),
        }
    }
}
