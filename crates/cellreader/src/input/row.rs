//! Typed row representation.

use serde::{Deserialize, Serialize};

/// A single data record: ordered `(column name, raw text)` pairs.
///
/// Values are kept exactly as they appear in the file; no trimming or
/// numeric conversion happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Create a row from ordered name/value pairs.
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Build a row by zipping header names with record values.
    pub fn from_parts<'a>(
        names: impl IntoIterator<Item = &'a str>,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let fields = names
            .into_iter()
            .zip(values)
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        Self { fields }
    }

    /// Look up a value by column name. Returns the first match when a header
    /// repeats a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the row has a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Column names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over `(name, value)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
