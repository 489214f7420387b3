//! Closed enumerations shared by backlog items, outcomes and teams.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Three-point scale used for priority, impact, effort and team capacity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            _ => Err(format!("Invalid level: {s}")),
        }
    }
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

/// Workflow status of a backlog item.
///
/// Two vocabularies exist in seed data: `todo/in-progress/review/completed/
/// blocked` and `not-started/in-progress/blocked/completed/todo`. They are
/// folded into this one closed set, with `not-started` read as [`Todo`].
///
/// [`Todo`]: ItemStatus::Todo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    /// Not started yet
    #[default]
    #[serde(alias = "not-started")]
    Todo,

    /// Being worked on
    InProgress,

    /// Waiting for review
    Review,

    /// Done; completed items drop out of the previous-cycle panel
    Completed,

    /// Cannot proceed
    Blocked,
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" | "not-started" => Ok(ItemStatus::Todo),
            "in-progress" | "inprogress" | "in_progress" => Ok(ItemStatus::InProgress),
            "review" => Ok(ItemStatus::Review),
            "completed" | "done" => Ok(ItemStatus::Completed),
            "blocked" => Ok(ItemStatus::Blocked),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Todo => "todo",
            ItemStatus::InProgress => "in-progress",
            ItemStatus::Review => "review",
            ItemStatus::Completed => "completed",
            ItemStatus::Blocked => "blocked",
        }
    }

    /// Status with an icon for list output.
    ///
    /// ```rust
    /// use cadence_core::models::ItemStatus;
    ///
    /// assert_eq!(ItemStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ItemStatus::Blocked.with_icon(), "✗ Blocked");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ItemStatus::Todo => "○ Todo",
            ItemStatus::InProgress => "➤ In Progress",
            ItemStatus::Review => "◎ Review",
            ItemStatus::Completed => "✓ Completed",
            ItemStatus::Blocked => "✗ Blocked",
        }
    }
}

/// Whether a backlog item is an epic or a feature that may hang under one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkPackageType {
    Epic,
    Feature,
}

impl FromStr for WorkPackageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epic" => Ok(WorkPackageType::Epic),
            "feature" => Ok(WorkPackageType::Feature),
            _ => Err(format!("Invalid work package type: {s}")),
        }
    }
}

impl WorkPackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkPackageType::Epic => "epic",
            WorkPackageType::Feature => "feature",
        }
    }
}

/// Planning horizon of an outcome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    LongTerm,
    MidTerm,
    ShortTerm,
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long-term" | "long" => Ok(Timeframe::LongTerm),
            "mid-term" | "mid" => Ok(Timeframe::MidTerm),
            "short-term" | "short" => Ok(Timeframe::ShortTerm),
            _ => Err(format!("Invalid timeframe: {s}")),
        }
    }
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::LongTerm => "long-term",
            Timeframe::MidTerm => "mid-term",
            Timeframe::ShortTerm => "short-term",
        }
    }

    /// Prefix used when minting ids for new outcomes.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Timeframe::LongTerm => "lto",
            Timeframe::MidTerm => "mto",
            Timeframe::ShortTerm => "sto",
        }
    }
}

/// Health of a single outcome metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MetricStatus {
    #[default]
    OnTrack,
    AtRisk,
    OffTrack,
}

impl FromStr for MetricStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on-track" => Ok(MetricStatus::OnTrack),
            "at-risk" => Ok(MetricStatus::AtRisk),
            "off-track" => Ok(MetricStatus::OffTrack),
            _ => Err(format!("Invalid metric status: {s}")),
        }
    }
}

impl MetricStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricStatus::OnTrack => "on-track",
            MetricStatus::AtRisk => "at-risk",
            MetricStatus::OffTrack => "off-track",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricStatus::OnTrack => "On Track",
            MetricStatus::AtRisk => "At Risk",
            MetricStatus::OffTrack => "Off Track",
        }
    }
}

/// How a related team connects to this team's plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    Outcome,
    Backlog,
    Capability,
    Multiple,
}

impl FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outcome" => Ok(RelationshipType::Outcome),
            "backlog" => Ok(RelationshipType::Backlog),
            "capability" => Ok(RelationshipType::Capability),
            "multiple" => Ok(RelationshipType::Multiple),
            _ => Err(format!("Invalid relationship type: {s}")),
        }
    }
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Outcome => "outcome",
            RelationshipType::Backlog => "backlog",
            RelationshipType::Capability => "capability",
            RelationshipType::Multiple => "multiple",
        }
    }

    /// Badge text shown next to a related team.
    pub fn label(&self) -> &'static str {
        match self {
            RelationshipType::Outcome => "Outcome Alignment",
            RelationshipType::Backlog => "Backlog Synergy",
            RelationshipType::Capability => "Capability Provider",
            RelationshipType::Multiple => "Multiple Connections",
        }
    }
}

/// Spare capacity a related team reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Capacity {
    High,
    Medium,
    Low,
    #[default]
    None,
}

/// Lifecycle of a team working agreement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgreementStatus {
    #[default]
    Draft,
    Active,
}

impl AgreementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementStatus::Draft => "draft",
            AgreementStatus::Active => "active",
        }
    }
}
