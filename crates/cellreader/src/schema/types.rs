//! Core type definitions for column classification.

use serde::{Deserialize, Serialize};

/// Verdict for a candidate column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Binary indicator: every sampled value was exactly `"0"` or `"1"`.
    Type,
    /// Ranged measurement: at least one sampled value outside `{"0", "1"}`.
    Marker,
}

impl ColumnKind {
    /// Control the UI should render for this kind.
    pub fn hint(&self) -> PresentationHint {
        match self {
            ColumnKind::Type => PresentationHint::Toggle,
            ColumnKind::Marker => PresentationHint::Range {
                min: None,
                max: None,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Type => "type",
            ColumnKind::Marker => "marker",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language-neutral control hint for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum PresentationHint {
    /// Single on/off switch.
    Toggle,
    /// Open-ended numeric bounds, initially unset.
    Range { min: Option<f64>, max: Option<f64> },
}
