//! Request types for updating models.

use super::{ItemStatus, Level};

/// Field edits for a backlog item; `None` leaves a field untouched.
///
/// Tags are deliberately absent: classification tags only change through
/// drops, see [`crate::classify`].
#[derive(Debug, Default, Clone)]
pub struct UpdateItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Level>,
    pub impact: Option<Level>,
    pub effort: Option<Level>,
    pub status: Option<ItemStatus>,
}

impl UpdateItemRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.impact.is_none()
            && self.effort.is_none()
            && self.status.is_none()
    }

    /// Human-readable list of the fields this request changes.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if self.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if self.description.is_some() {
            changes.push("Updated description".to_string());
        }
        if let Some(priority) = self.priority {
            changes.push(format!("Priority set to {}", priority.as_str()));
        }
        if let Some(impact) = self.impact {
            changes.push(format!("Impact set to {}", impact.as_str()));
        }
        if let Some(effort) = self.effort {
            changes.push(format!("Effort set to {}", effort.as_str()));
        }
        if let Some(status) = self.status {
            changes.push(format!("Status set to {}", status.as_str()));
        }
        changes
    }
}
