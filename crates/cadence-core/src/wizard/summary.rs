//! Review-step aggregation of every prior step's slice.

use jiff::civil::Date;
use log::debug;

use super::state::WizardState;
use crate::{
    error::Result,
    models::{find_team, CycleWindow, PlanSummary, RelatedTeam},
};

impl PlanSummary {
    /// Build the plan summary from the wizard state, read-only.
    ///
    /// Selected team ids that have no entry in `directory` are listed in
    /// `unresolved_teams` instead of failing.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Date` if the following quarter is outside the
    /// supported calendar range.
    pub fn assemble(state: &WizardState, directory: &[RelatedTeam], today: Date) -> Result<Self> {
        let cycle = CycleWindow::following(today)?;

        let mut teams = Vec::new();
        let mut unresolved_teams = Vec::new();
        for id in &state.selected_teams {
            match find_team(directory, id) {
                Some(team) => teams.push(team.clone()),
                None => unresolved_teams.push(id.clone()),
            }
        }
        if !unresolved_teams.is_empty() {
            debug!("Selected teams missing from directory: {unresolved_teams:?}");
        }

        Ok(Self {
            cycle,
            outcomes: state.short_term_outcomes.clone(),
            backlog: state.upcoming_cycle_items().into_iter().cloned().collect(),
            teams,
            unresolved_teams,
        })
    }
}
