//! Editable copy of an outcome, committed back through the store.

use std::str::FromStr;

use super::validation::{validate_outcome_statement, StatementValidation};
use crate::{
    error::{CadenceError, Result},
    models::{Metric, MetricField, MetricStatus, Outcome},
};

/// Working copy of an outcome being added or edited.
///
/// The statement feedback is recomputed on every title change, so callers
/// can show it while the user types. Dropping a draft discards the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeDraft {
    outcome: Outcome,
    is_new: bool,
    validation: StatementValidation,
}

impl OutcomeDraft {
    pub(crate) fn new(outcome: Outcome, is_new: bool) -> Self {
        let validation = validate_outcome_statement(&outcome.title);
        Self {
            outcome,
            is_new,
            validation,
        }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn id(&self) -> &str {
        &self.outcome.id
    }

    /// Whether committing will append rather than replace.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn validation(&self) -> &StatementValidation {
        &self.validation
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &StatementValidation {
        self.outcome.title = title.into();
        self.validation = validate_outcome_statement(&self.outcome.title);
        &self.validation
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.outcome.description = description.into();
    }

    /// Point a mid-term draft at a long-term parent. Not checked here; a
    /// missing parent shows as "no alignment".
    pub fn set_parent(&mut self, parent_outcome_id: Option<String>) {
        self.outcome.parent_outcome_id = parent_outcome_id;
    }

    /// Append an empty, on-track metric and return its index.
    pub fn add_metric(&mut self) -> usize {
        self.outcome.metrics.push(Metric::default());
        self.outcome.metrics.len() - 1
    }

    /// Set one field of a metric.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` for an out-of-range index or an
    /// unknown status value.
    pub fn update_metric(&mut self, index: usize, field: MetricField, value: &str) -> Result<()> {
        let metric = self.outcome.metrics.get_mut(index).ok_or_else(|| {
            CadenceError::invalid_input("metric").with_reason(format!("no metric at index {index}"))
        })?;
        match field {
            MetricField::Name => metric.name = value.to_string(),
            MetricField::Current => metric.current = value.to_string(),
            MetricField::Target => metric.target = value.to_string(),
            MetricField::Unit => metric.unit = value.to_string(),
            MetricField::Status => {
                metric.status = MetricStatus::from_str(value)
                    .map_err(|reason| CadenceError::invalid_input("status").with_reason(reason))?;
            }
        }
        Ok(())
    }

    /// Remove a metric; out-of-range indexes are ignored.
    pub fn remove_metric(&mut self, index: usize) -> Option<Metric> {
        (index < self.outcome.metrics.len()).then(|| self.outcome.metrics.remove(index))
    }

    pub(crate) fn into_parts(self) -> (Outcome, StatementValidation) {
        (self.outcome, self.validation)
    }
}
