//! Outcome and metric models.

use serde::{Deserialize, Serialize};

use super::{MetricStatus, Timeframe};

/// A measurable signal attached to an outcome.
///
/// `current` and `target` are free text; nothing checks that they are
/// numeric or related to each other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub name: String,
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub status: MetricStatus,
}

/// Editable fields of a [`Metric`], used when editing a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    Name,
    Current,
    Target,
    Unit,
    Status,
}

/// A timeframe-scoped goal statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    pub timeframe: Timeframe,
    /// Weak reference from a mid-term outcome to its long-term parent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_outcome_id: Option<String>,
}

impl Outcome {
    pub fn new(id: impl Into<String>, title: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            metrics: Vec::new(),
            timeframe,
            parent_outcome_id: None,
        }
    }
}

/// Outcomes grouped by horizon, as supplied when the wizard mounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeData {
    #[serde(default)]
    pub long_term: Vec<Outcome>,
    #[serde(default)]
    pub mid_term: Vec<Outcome>,
    #[serde(default)]
    pub short_term: Vec<Outcome>,
}
