//! Result wrappers for commands that change a record.

use std::fmt;

use super::models::OutcomeView;
use crate::{
    models::{BacklogItem, Outcome},
    outcomes::{Alignment, CommittedOutcome, OutcomeStore},
};

/// An edited record plus the list of changes applied to it.
///
/// ```rust
/// use cadence_core::{display::UpdateResult, models::BacklogItem};
///
/// let item = BacklogItem::new("b7", "Usage analytics").with_tags(["Upcoming Cycle"]);
/// let result = UpdateResult::with_changes(item, vec!["Moved to Upcoming Cycle".to_string()]);
/// let output = result.to_string();
/// assert!(output.contains("Updated backlog item b7"));
/// assert!(output.contains("- Moved to Upcoming Cycle"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for UpdateResult<BacklogItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated backlog item {}", self.resource.id)?;
        self.fmt_changes(f)?;
        write!(f, "{}", self.resource)
    }
}

/// A committed outcome draft with its statement feedback.
pub struct SaveResult<'a> {
    pub saved: &'a CommittedOutcome,
    pub alignment: Alignment<'a>,
}

impl<'a> SaveResult<'a> {
    /// Resolve the saved outcome's alignment through the store it went to.
    pub fn new(saved: &'a CommittedOutcome, store: &'a OutcomeStore) -> Self {
        Self {
            saved,
            alignment: store.alignment(&saved.outcome),
        }
    }
}

impl fmt::Display for SaveResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let saved = self.saved;
        let verb = if saved.created { "Created" } else { "Saved" };
        writeln!(f, "{verb} outcome {}", saved.outcome.id)?;
        writeln!(f)?;
        let view = OutcomeView {
            outcome: &saved.outcome,
            alignment: self.alignment,
        };
        write!(f, "{view}")?;
        writeln!(f)?;
        write!(f, "{}", saved.validation)
    }
}

/// Records removed by a delete, cascades included.
pub struct DeleteResult(pub Vec<Outcome>);

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, cascaded)) = self.0.split_first() else {
            return writeln!(f, "Nothing deleted.");
        };
        writeln!(f, "Deleted outcome '{}' ({})", first.title, first.id)?;
        for outcome in cascaded {
            writeln!(f, "- Also deleted aligned outcome '{}' ({})", outcome.title, outcome.id)?;
        }
        Ok(())
    }
}
