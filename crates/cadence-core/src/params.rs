//! Parameter structures for workspace operations.
//!
//! Plain structs shared by every front end. The CLI wraps them in its own
//! clap `*Args` types and converts with `From`, so this crate stays free of
//! interface framework derives. Fields arriving as text are parsed here by
//! `validate`, giving every interface the same error messages.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CadenceError, Result},
    models::{ItemStatus, Level, Panel, RelationshipType, Timeframe, UpdateItemRequest},
};

/// Parameters for operations requiring just an id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    pub id: String,
}

/// Parameters for listing backlog items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBacklog {
    /// Restrict to one board panel: `previous`, `upcoming` or `product`
    pub panel: Option<String>,
}

impl ListBacklog {
    /// Parse the panel filter.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` for an unknown panel name.
    pub fn validate(&self) -> Result<Option<Panel>> {
        self.panel
            .as_deref()
            .map(|name| parse_field("panel", name))
            .transpose()
    }
}

/// Parameters for dropping a backlog item onto a board container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropItem {
    /// Backlog item id
    pub id: String,
    /// Container id, e.g. `q3-backlog`, `q4-backlog` or `product-backlog`.
    /// Unrecognized ids unclassify the item.
    pub container: String,
}

/// Parameters for editing backlog item fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `low`, `medium` or `high`
    pub priority: Option<String>,
    pub impact: Option<String>,
    pub effort: Option<String>,
    /// `todo`, `in-progress`, `review`, `completed` or `blocked`
    pub status: Option<String>,
}

impl UpdateItem {
    /// Parse the text fields into an update request.
    ///
    /// ```rust
    /// use cadence_core::{models::ItemStatus, params::UpdateItem};
    ///
    /// let params = UpdateItem {
    ///     id: "b4".to_string(),
    ///     status: Some("not-started".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(params.validate()?.status, Some(ItemStatus::Todo));
    ///
    /// let bad = UpdateItem { priority: Some("urgent".to_string()), ..params };
    /// assert!(bad.validate().is_err());
    /// # Ok::<(), cadence_core::CadenceError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` naming the first field that does
    /// not parse.
    pub fn validate(&self) -> Result<UpdateItemRequest> {
        let level = |field: &str, value: &Option<String>| -> Result<Option<Level>> {
            value.as_deref().map(|v| parse_field(field, v)).transpose()
        };
        Ok(UpdateItemRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: level("priority", &self.priority)?,
            impact: level("impact", &self.impact)?,
            effort: level("effort", &self.effort)?,
            status: self
                .status
                .as_deref()
                .map(|v| parse_field::<ItemStatus>("status", v))
                .transpose()?,
        })
    }
}

/// Parameters for linking a backlog item to an epic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetEpic {
    pub id: String,
    /// Parent epic id; `None` unlinks
    pub epic: Option<String>,
}

/// Parameters for listing outcomes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOutcomes {
    /// `long-term`, `mid-term` or `short-term`; all when absent
    pub timeframe: Option<String>,
}

impl ListOutcomes {
    /// Parse the timeframe filter.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` for an unknown timeframe.
    pub fn validate(&self) -> Result<Option<Timeframe>> {
        self.timeframe
            .as_deref()
            .map(|name| parse_field("timeframe", name))
            .transpose()
    }
}

/// Parameters for creating or editing an outcome through a draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveOutcome {
    /// Existing outcome id; a new outcome is created when absent
    pub id: Option<String>,
    /// Timeframe for a new outcome; ignored when editing
    pub timeframe: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Long-term parent for mid-term outcomes
    pub parent: Option<String>,
}

/// Parameters for searching the related-team directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTeams {
    /// Text matched against name, description and capabilities
    pub search: Option<String>,
    /// `outcome`, `backlog`, `capability` or `multiple`
    pub relationship: Option<String>,
}

impl ListTeams {
    /// Parse the relationship filter.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` for an unknown relationship type.
    pub fn validate(&self) -> Result<Option<RelationshipType>> {
        self.relationship
            .as_deref()
            .map(|name| parse_field("relationship", name))
            .transpose()
    }
}

/// Parameters for running the outcome statement heuristic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateStatement {
    pub text: String,
}

fn parse_field<T>(field: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|reason| CadenceError::invalid_input(field).with_reason(reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_backlog_panel_parsing() {
        let params = ListBacklog {
            panel: Some("upcoming".to_string()),
        };
        assert_eq!(params.validate().unwrap(), Some(Panel::UpcomingCycle));
        assert_eq!(ListBacklog::default().validate().unwrap(), None);

        let bad = ListBacklog {
            panel: Some("later".to_string()),
        };
        match bad.validate().unwrap_err() {
            CadenceError::InvalidInput { field, reason } => {
                assert_eq!(field, "panel");
                assert!(reason.contains("later"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_item_validate_parses_every_field() {
        let params = UpdateItem {
            id: "b1".to_string(),
            title: Some("Renamed".to_string()),
            priority: Some("high".to_string()),
            impact: Some("low".to_string()),
            effort: Some("medium".to_string()),
            status: Some("in-progress".to_string()),
            ..Default::default()
        };
        let request = params.validate().unwrap();
        assert_eq!(request.title.as_deref(), Some("Renamed"));
        assert_eq!(request.priority, Some(Level::High));
        assert_eq!(request.impact, Some(Level::Low));
        assert_eq!(request.effort, Some(Level::Medium));
        assert_eq!(request.status, Some(ItemStatus::InProgress));
    }

    #[test]
    fn test_update_item_invalid_status() {
        let params = UpdateItem {
            id: "b1".to_string(),
            status: Some("finished-ish".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(CadenceError::InvalidInput { ref field, .. }) if field == "status"
        ));
    }

    #[test]
    fn test_list_outcomes_timeframe() {
        let params = ListOutcomes {
            timeframe: Some("mid".to_string()),
        };
        assert_eq!(params.validate().unwrap(), Some(Timeframe::MidTerm));
    }

    #[test]
    fn test_list_teams_relationship() {
        let params = ListTeams {
            relationship: Some("Capability".to_string()),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap(), Some(RelationshipType::Capability));

        let bad = ListTeams {
            relationship: Some("rival".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(CadenceError::InvalidInput { ref field, .. }) if field == "relationship"
        ));
    }
}
