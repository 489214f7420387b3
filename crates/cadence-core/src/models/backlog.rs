//! Backlog item model and research records that feed backlog planning.

use serde::{Deserialize, Serialize};

use super::{ItemStatus, Level, WorkPackageType};

/// One unit of plannable work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BacklogItem {
    /// Unique, stable identifier
    pub id: String,

    /// Short title
    pub title: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub priority: Level,

    #[serde(default)]
    pub impact: Level,

    #[serde(default)]
    pub effort: Level,

    #[serde(default)]
    pub status: ItemStatus,

    /// Tags in display order. At most one classification tag is present.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_package_type: Option<WorkPackageType>,

    /// Weak reference to a parent epic; may dangle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epic_id: Option<String>,
}

impl BacklogItem {
    /// Create an untagged, not-started item with medium ratings.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: Level::default(),
            impact: Level::default(),
            effort: Level::default(),
            status: ItemStatus::default(),
            tags: Vec::new(),
            work_package_type: None,
            epic_id: None,
        }
    }

    /// Builder-style tag helper, mostly for seed data and tests.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_epic(&self) -> bool {
        self.work_package_type == Some(WorkPackageType::Epic)
    }
}

/// A finding from user research shown alongside the backlog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResearchInsight {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A suggested piece of work with rough impact and effort.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact: Level,
    #[serde(default)]
    pub effort: Level,
    #[serde(default)]
    pub source: String,
}
