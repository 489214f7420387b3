//! Workspace operations that take shared params and return display wrappers.

use super::Workspace;
use crate::{
    display::{BacklogItems, DeleteResult, Outcomes, Teams, UpdateResult},
    error::{CadenceError, Result},
    models::{BacklogItem, RelatedTeam, Timeframe},
    outcomes::{validate_outcome_statement, CommittedOutcome, StatementValidation},
    params::{
        DropItem, Id, ListBacklog, ListOutcomes, ListTeams, SaveOutcome, SetEpic, UpdateItem,
        ValidateStatement,
    },
};

impl Workspace {
    /// Backlog items, optionally restricted to one board panel.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` for an unknown panel name.
    pub fn list_backlog(&self, params: &ListBacklog) -> Result<BacklogItems> {
        let items = match params.validate()? {
            Some(panel) => self.backlog.panel(panel).into_iter().cloned().collect(),
            None => self.backlog.items().to_vec(),
        };
        Ok(BacklogItems::new(items, self.backlog.epics().cloned().collect()))
    }

    /// Drop an item onto a board container and report the tag change.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::ItemNotFound` for an unknown item id.
    pub fn drop_item_result(&mut self, params: &DropItem) -> Result<UpdateResult<BacklogItem>> {
        let before = self
            .backlog
            .get(&params.id)
            .map(|item| item.tags.clone())
            .ok_or_else(|| CadenceError::item_not_found(&params.id))?;
        let item = self.backlog.apply_drop(&params.id, &params.container)?.clone();

        let changes = if before == item.tags {
            Vec::new()
        } else {
            vec![format!(
                "Tags changed from [{}] to [{}]",
                before.join(", "),
                item.tags.join(", ")
            )]
        };
        Ok(UpdateResult::with_changes(item, changes))
    }

    /// Edit item fields.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` for unparsable fields or an empty
    /// request, and `CadenceError::ItemNotFound` for an unknown id.
    pub fn update_item_result(&mut self, params: &UpdateItem) -> Result<UpdateResult<BacklogItem>> {
        let request = params.validate()?;
        if request.is_empty() {
            return Err(CadenceError::invalid_input("update").with_reason("no fields to update"));
        }
        let changes = request.describe_changes();
        let item = self.backlog.update(&params.id, request)?.clone();
        Ok(UpdateResult::with_changes(item, changes))
    }

    /// Link an item to an epic, or unlink it.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::ItemNotFound` for an unknown item id.
    pub fn set_epic_result(&mut self, params: &SetEpic) -> Result<UpdateResult<BacklogItem>> {
        let item = self.backlog.set_epic(&params.id, params.epic.clone())?.clone();
        let change = match (&params.epic, self.backlog.parent_epic(&params.id)) {
            (None, _) => "Removed epic link".to_string(),
            (Some(epic), Some(_)) => format!("Linked to epic {epic}"),
            (Some(epic), None) => format!("Linked to {epic}, which is not an epic"),
        };
        Ok(UpdateResult::with_changes(item, vec![change]))
    }

    /// Outcomes, optionally restricted to one timeframe.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` for an unknown timeframe.
    pub fn list_outcomes(&self, params: &ListOutcomes) -> Result<Outcomes> {
        let timeframes = match params.validate()? {
            Some(timeframe) => vec![timeframe],
            None => vec![Timeframe::LongTerm, Timeframe::MidTerm, Timeframe::ShortTerm],
        };
        let outcomes = timeframes
            .into_iter()
            .flat_map(|timeframe| self.outcomes.list(timeframe).iter().cloned())
            .collect();
        let long_term = self.outcomes.list(Timeframe::LongTerm).to_vec();
        Ok(Outcomes::new(outcomes, long_term))
    }

    /// Create or edit an outcome through a draft and commit it.
    ///
    /// Statement feedback never blocks the save.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::OutcomeNotFound` when editing an unknown id, and
    /// `CadenceError::InvalidInput` when a new outcome lacks a timeframe or a
    /// title.
    pub fn save_outcome(&mut self, params: &SaveOutcome) -> Result<CommittedOutcome> {
        let mut draft = match &params.id {
            Some(id) => self.outcomes.begin_edit(id)?,
            None => {
                let timeframe: Timeframe = params
                    .timeframe
                    .as_deref()
                    .ok_or_else(|| {
                        CadenceError::invalid_input("timeframe")
                            .with_reason("required for a new outcome")
                    })?
                    .parse()
                    .map_err(|reason: String| {
                        CadenceError::invalid_input("timeframe").with_reason(reason)
                    })?;
                if params.title.is_none() {
                    return Err(CadenceError::invalid_input("title")
                        .with_reason("required for a new outcome"));
                }
                self.outcomes.begin_new(timeframe)
            }
        };
        if let Some(title) = &params.title {
            draft.set_title(title.as_str());
        }
        if let Some(description) = &params.description {
            draft.set_description(description.as_str());
        }
        if params.parent.is_some() {
            draft.set_parent(params.parent.clone());
        }
        Ok(self.outcomes.commit(draft))
    }

    /// Delete an outcome, cascading from long-term to aligned mid-terms.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::OutcomeNotFound` for an unknown id.
    pub fn delete_outcome_result(&mut self, params: &Id) -> Result<DeleteResult> {
        Ok(DeleteResult(self.outcomes.delete(&params.id)?))
    }

    pub fn validate_statement(&self, params: &ValidateStatement) -> StatementValidation {
        validate_outcome_statement(&params.text)
    }

    /// Related teams matching a search text and relationship filter.
    ///
    /// The search is a case-insensitive substring match over name,
    /// description and capabilities.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` for an unknown relationship type.
    pub fn list_teams(&self, params: &ListTeams) -> Result<Teams> {
        let relationship = params.validate()?;
        let query = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let teams = self
            .teams
            .iter()
            .filter(|team| relationship.map_or(true, |r| team.relationship_type == r))
            .filter(|team| query.as_deref().map_or(true, |q| team_matches(team, q)))
            .cloned()
            .collect();
        Ok(Teams(teams))
    }
}

fn team_matches(team: &RelatedTeam, query: &str) -> bool {
    team.name.to_lowercase().contains(query)
        || team.description.to_lowercase().contains(query)
        || team
            .capabilities
            .iter()
            .any(|capability| capability.to_lowercase().contains(query))
}
