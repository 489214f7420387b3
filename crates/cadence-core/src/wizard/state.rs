//! Planning state accumulated across wizard steps.

use serde::{Deserialize, Serialize};

use crate::{
    backlog::{BacklogStore, DragSession},
    models::{BacklogItem, Outcome, Panel},
};

use super::step::WizardStep;

/// Every step's slice of planning state, plus the current step.
///
/// Discarded on finalize or when the wizard is left; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub step: WizardStep,

    /// Step 1
    pub short_term_outcomes: Vec<Outcome>,

    /// Step 2
    pub innovation_sprint_url: String,
    /// Step 2, read again by step 3
    pub design_agent_url: String,

    /// Step 3: the wizard's own copy of the backlog
    pub backlog: BacklogStore,
    /// Step 3: in-flight drag, cleared at every drag end
    #[serde(skip)]
    pub drag: DragSession,

    /// Step 4: selected related-team ids, in selection order
    pub selected_teams: Vec<String>,
}

impl WizardState {
    pub fn new(short_term_outcomes: Vec<Outcome>, backlog: BacklogStore) -> Self {
        Self {
            short_term_outcomes,
            backlog,
            ..Default::default()
        }
    }

    /// Items tagged for the upcoming cycle, derived from the backlog on
    /// every call.
    pub fn upcoming_cycle_items(&self) -> Vec<&BacklogItem> {
        self.backlog.panel(Panel::UpcomingCycle)
    }

    pub fn is_team_selected(&self, team_id: &str) -> bool {
        self.selected_teams.iter().any(|id| id == team_id)
    }

    /// Select or deselect a team. Returns whether it is selected afterwards.
    pub fn toggle_team(&mut self, team_id: &str) -> bool {
        if let Some(position) = self.selected_teams.iter().position(|id| id == team_id) {
            self.selected_teams.remove(position);
            false
        } else {
            self.selected_teams.push(team_id.to_string());
            true
        }
    }
}
