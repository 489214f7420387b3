//! Long, mid and short-term outcome lists.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{draft::OutcomeDraft, validation::StatementValidation};
use crate::{
    error::{CadenceError, Result},
    models::{Outcome, OutcomeData, Timeframe},
};

/// Resolution of a mid-term outcome's parent link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment<'a> {
    Aligned(&'a Outcome),
    /// No parent set, or the parent no longer exists
    Unaligned,
}

impl<'a> Alignment<'a> {
    /// Resolve an outcome's parent link against a long-term list.
    pub fn resolve(outcome: &Outcome, long_term: &'a [Outcome]) -> Self {
        outcome
            .parent_outcome_id
            .as_deref()
            .and_then(|parent| long_term.iter().find(|o| o.id == parent))
            .map_or(Alignment::Unaligned, Alignment::Aligned)
    }
}

/// The outcome and feedback produced by a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedOutcome {
    pub outcome: Outcome,
    pub validation: StatementValidation,
    pub created: bool,
}

/// Owns the outcome hierarchy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OutcomeStore {
    data: OutcomeData,
}

impl OutcomeStore {
    pub fn new(data: OutcomeData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &OutcomeData {
        &self.data
    }

    pub fn list(&self, timeframe: Timeframe) -> &[Outcome] {
        match timeframe {
            Timeframe::LongTerm => &self.data.long_term,
            Timeframe::MidTerm => &self.data.mid_term,
            Timeframe::ShortTerm => &self.data.short_term,
        }
    }

    fn list_mut(&mut self, timeframe: Timeframe) -> &mut Vec<Outcome> {
        match timeframe {
            Timeframe::LongTerm => &mut self.data.long_term,
            Timeframe::MidTerm => &mut self.data.mid_term,
            Timeframe::ShortTerm => &mut self.data.short_term,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Outcome> {
        [Timeframe::LongTerm, Timeframe::MidTerm, Timeframe::ShortTerm]
            .into_iter()
            .find_map(|tf| self.list(tf).iter().find(|o| o.id == id))
    }

    /// Mint the id a new outcome in `timeframe` would get.
    ///
    /// Ids are `<prefix>-NNN` with N one past the list length, skipping ids
    /// that are already taken.
    pub fn next_id(&self, timeframe: Timeframe) -> String {
        let mut n = self.list(timeframe).len() + 1;
        loop {
            let id = format!("{}-{:03}", timeframe.id_prefix(), n);
            if self.get(&id).is_none() {
                return id;
            }
            n += 1;
        }
    }

    /// Start a draft for a new outcome.
    ///
    /// Mid-term drafts default to the first long-term outcome as parent.
    pub fn begin_new(&self, timeframe: Timeframe) -> OutcomeDraft {
        let mut outcome = Outcome::new(self.next_id(timeframe), "", timeframe);
        if timeframe == Timeframe::MidTerm {
            outcome.parent_outcome_id = self.data.long_term.first().map(|o| o.id.clone());
        }
        OutcomeDraft::new(outcome, true)
    }

    /// Start a draft editing an existing outcome.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::OutcomeNotFound` for an unknown id.
    pub fn begin_edit(&self, id: &str) -> Result<OutcomeDraft> {
        let outcome = self.get(id).ok_or_else(|| CadenceError::outcome_not_found(id))?;
        Ok(OutcomeDraft::new(outcome.clone(), false))
    }

    /// Store a draft. Always succeeds; the statement feedback is returned
    /// alongside the saved outcome.
    ///
    /// New drafts are appended under their minted id. Edit drafts replace
    /// the outcome they were taken from.
    pub fn commit(&mut self, draft: OutcomeDraft) -> CommittedOutcome {
        let created = draft.is_new();
        let (outcome, validation) = draft.into_parts();
        if !validation.is_complete() {
            debug!("Saving outcome {} with incomplete statement", outcome.id);
        }
        let list = self.list_mut(outcome.timeframe);
        let existing = if created {
            None
        } else {
            list.iter_mut().find(|o| o.id == outcome.id)
        };
        // An edit whose outcome was deleted meanwhile is appended again.
        match existing {
            Some(existing) => *existing = outcome.clone(),
            None => list.push(outcome.clone()),
        }
        CommittedOutcome {
            outcome,
            validation,
            created,
        }
    }

    /// Delete an outcome.
    ///
    /// Deleting a long-term outcome also deletes the mid-term outcomes
    /// aligned to it. Returns every removed outcome, the requested one first.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::OutcomeNotFound` for an unknown id.
    pub fn delete(&mut self, id: &str) -> Result<Vec<Outcome>> {
        let timeframe = self
            .get(id)
            .map(|o| o.timeframe)
            .ok_or_else(|| CadenceError::outcome_not_found(id))?;

        let list = self.list_mut(timeframe);
        let position = list
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| CadenceError::outcome_not_found(id))?;
        let mut removed = vec![list.remove(position)];

        if timeframe == Timeframe::LongTerm {
            let (aligned, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.data.mid_term)
                .into_iter()
                .partition(|o| o.parent_outcome_id.as_deref() == Some(id));
            self.data.mid_term = kept;
            removed.extend(aligned);
        }
        debug!("Deleted {} outcome(s) starting at {id}", removed.len());
        Ok(removed)
    }

    /// Resolve a mid-term outcome's long-term parent.
    pub fn alignment(&self, outcome: &Outcome) -> Alignment<'_> {
        Alignment::resolve(outcome, &self.data.long_term)
    }

    /// Mid-term outcomes aligned to a long-term outcome.
    pub fn aligned_children(&self, long_term_id: &str) -> Vec<&Outcome> {
        self.data
            .mid_term
            .iter()
            .filter(|o| o.parent_outcome_id.as_deref() == Some(long_term_id))
            .collect()
    }

    /// Mid-term outcomes whose parent link resolves to nothing.
    pub fn unaligned(&self) -> Vec<&Outcome> {
        self.data
            .mid_term
            .iter()
            .filter(|o| self.alignment(o) == Alignment::Unaligned)
            .collect()
    }
}
