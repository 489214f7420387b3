//! The wizard step machine and finalize gate.

use jiff::civil::Date;
use log::{debug, info};

use super::{
    state::WizardState,
    step::{StepMarker, WizardStep},
};
use crate::{
    backlog::{BacklogPanels, BacklogStore},
    error::Result,
    models::{BacklogItem, Outcome, OutcomeData, PlanSummary, RelatedTeam, Timeframe},
};

/// Signal emitted to the navigation collaborator when the plan is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    SprintPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FinalizeGate {
    Idle,
    Pending,
    Confirmed,
}

/// Read-only slice of state the current step works with.
#[derive(Debug)]
pub enum StepView<'a> {
    DefineOutcomes {
        long_term: &'a [Outcome],
        mid_term: &'a [Outcome],
        short_term: &'a [Outcome],
    },
    InnovationSprint {
        innovation_sprint_url: &'a str,
        design_agent_url: &'a str,
    },
    BacklogPlanning {
        short_term: &'a [Outcome],
        design_agent_url: &'a str,
        panels: BacklogPanels<'a>,
        dragging: Option<&'a BacklogItem>,
    },
    TeamConnections {
        short_term: &'a [Outcome],
        upcoming: Vec<&'a BacklogItem>,
        teams: &'a [RelatedTeam],
        selected: &'a [String],
    },
    Review {
        short_term: &'a [Outcome],
        upcoming: Vec<&'a BacklogItem>,
        selected: &'a [String],
        awaiting_confirmation: bool,
    },
}

/// Headless 90-day planning wizard.
///
/// Transitions are total: `next` and `back` clamp at the ends, backward
/// jumps are allowed only to steps already passed, and every rejected
/// request leaves the state untouched. While a finalize confirmation is
/// pending, and after the plan is confirmed, step transitions are ignored.
///
/// ```rust
/// use cadence_core::{models::OutcomeData, wizard::{Navigation, Wizard, WizardStep}};
///
/// let mut wizard = Wizard::new(OutcomeData::default(), Vec::new(), Vec::new());
/// wizard.jump_to(5);
/// assert_eq!(wizard.step(), WizardStep::DefineOutcomes);
///
/// for _ in 0..10 {
///     wizard.next();
/// }
/// assert_eq!(wizard.step(), WizardStep::Review);
///
/// assert!(wizard.request_finalize());
/// assert_eq!(wizard.confirm_finalize(), Some(Navigation::SprintPlan));
/// ```
#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    long_term: Vec<Outcome>,
    mid_term: Vec<Outcome>,
    teams: Vec<RelatedTeam>,
    gate: FinalizeGate,
}

impl Wizard {
    /// Mount the wizard on externally supplied seed data.
    pub fn new(outcomes: OutcomeData, backlog: Vec<BacklogItem>, teams: Vec<RelatedTeam>) -> Self {
        let OutcomeData {
            long_term,
            mid_term,
            short_term,
        } = outcomes;
        Self {
            state: WizardState::new(short_term, BacklogStore::new(backlog)),
            long_term,
            mid_term,
            teams,
            gate: FinalizeGate::Idle,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.state.step
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn teams(&self) -> &[RelatedTeam] {
        &self.teams
    }

    pub fn is_confirmation_pending(&self) -> bool {
        self.gate == FinalizeGate::Pending
    }

    pub fn is_finished(&self) -> bool {
        self.gate == FinalizeGate::Confirmed
    }

    fn can_move(&self) -> bool {
        self.gate == FinalizeGate::Idle
    }

    fn go(&mut self, to: WizardStep) -> bool {
        if to == self.state.step {
            return false;
        }
        debug!("Wizard step {} -> {}", self.state.step.number(), to.number());
        self.state.step = to;
        true
    }

    /// Advance one step. No-op at the last step.
    pub fn next(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        let to = self.state.step.next();
        self.go(to)
    }

    /// Go back one step. No-op at the first step.
    pub fn back(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        let to = self.state.step.prev();
        self.go(to)
    }

    /// Jump to step `n` (1-based) via the step indicator.
    ///
    /// Only steps before the current one are reachable; anything else,
    /// including out-of-range numbers, is ignored.
    pub fn jump_to(&mut self, n: u8) -> bool {
        if !self.can_move() || n >= self.state.step.number() {
            return false;
        }
        match WizardStep::from_number(n) {
            Some(to) => self.go(to),
            None => false,
        }
    }

    /// Step indicator state for every step.
    pub fn progress(&self) -> Vec<(WizardStep, StepMarker)> {
        let current = self.state.step;
        WizardStep::ALL
            .into_iter()
            .map(|step| {
                let marker = match step.cmp(&current) {
                    std::cmp::Ordering::Less => StepMarker::Completed,
                    std::cmp::Ordering::Equal => StepMarker::Current,
                    std::cmp::Ordering::Greater => StepMarker::Upcoming,
                };
                (step, marker)
            })
            .collect()
    }

    /// The slice of state the current step reads.
    pub fn view(&self) -> StepView<'_> {
        let state = &self.state;
        match state.step {
            WizardStep::DefineOutcomes => StepView::DefineOutcomes {
                long_term: &self.long_term,
                mid_term: &self.mid_term,
                short_term: &state.short_term_outcomes,
            },
            WizardStep::InnovationSprint => StepView::InnovationSprint {
                innovation_sprint_url: &state.innovation_sprint_url,
                design_agent_url: &state.design_agent_url,
            },
            WizardStep::BacklogPlanning => StepView::BacklogPlanning {
                short_term: &state.short_term_outcomes,
                design_agent_url: &state.design_agent_url,
                panels: state.backlog.panels(),
                dragging: state.drag.active_item(&state.backlog),
            },
            WizardStep::TeamConnections => StepView::TeamConnections {
                short_term: &state.short_term_outcomes,
                upcoming: state.upcoming_cycle_items(),
                teams: &self.teams,
                selected: &state.selected_teams,
            },
            WizardStep::Review => StepView::Review {
                short_term: &state.short_term_outcomes,
                upcoming: state.upcoming_cycle_items(),
                selected: &state.selected_teams,
                awaiting_confirmation: self.is_confirmation_pending(),
            },
        }
    }

    pub fn set_short_term_outcomes(&mut self, outcomes: Vec<Outcome>) {
        self.state.short_term_outcomes = outcomes;
    }

    /// Replace the short-term outcome with the same id, or append it.
    ///
    /// The outcome joins the short-term slice whatever timeframe it carried.
    pub fn upsert_short_term_outcome(&mut self, mut outcome: Outcome) {
        outcome.timeframe = Timeframe::ShortTerm;
        let list = &mut self.state.short_term_outcomes;
        match list.iter_mut().find(|o| o.id == outcome.id) {
            Some(existing) => *existing = outcome,
            None => list.push(outcome),
        }
    }

    pub fn set_innovation_sprint_url(&mut self, url: impl Into<String>) {
        self.state.innovation_sprint_url = url.into();
    }

    pub fn set_design_agent_url(&mut self, url: impl Into<String>) {
        self.state.design_agent_url = url.into();
    }

    /// Begin dragging a backlog item; unknown ids are ignored.
    pub fn drag_start(&mut self, item_id: &str) -> bool {
        let WizardState { drag, backlog, .. } = &mut self.state;
        drag.drag_start(backlog, item_id)
    }

    /// End the current drag, dropping onto `over` if given.
    pub fn drag_end(&mut self, over: Option<&str>) -> Option<BacklogItem> {
        let WizardState { drag, backlog, .. } = &mut self.state;
        drag.drag_end(backlog, over)
    }

    /// Abandon the current drag without reclassifying anything.
    pub fn drag_cancel(&mut self) {
        self.state.drag.cancel();
    }

    /// Drag and drop in one call. Returns the reclassified item, or `None`
    /// if the id is unknown.
    pub fn drop_item(&mut self, item_id: &str, container_id: &str) -> Option<BacklogItem> {
        if self.drag_start(item_id) {
            self.drag_end(Some(container_id))
        } else {
            None
        }
    }

    /// Select or deselect a related team.
    pub fn toggle_team(&mut self, team_id: &str) -> bool {
        self.state.toggle_team(team_id)
    }

    /// Ask to finalize. Only available on the review step; sets the pending
    /// flag without touching planning state.
    pub fn request_finalize(&mut self) -> bool {
        if self.gate != FinalizeGate::Idle || self.state.step != WizardStep::Review {
            return false;
        }
        self.gate = FinalizeGate::Pending;
        true
    }

    /// Confirm a pending finalize and emit the navigation signal.
    pub fn confirm_finalize(&mut self) -> Option<Navigation> {
        if self.gate != FinalizeGate::Pending {
            return None;
        }
        self.gate = FinalizeGate::Confirmed;
        info!("Cycle plan finalized; navigating to sprint plan");
        Some(Navigation::SprintPlan)
    }

    /// Withdraw a pending finalize; the user stays on the review step.
    pub fn cancel_finalize(&mut self) -> bool {
        if self.gate != FinalizeGate::Pending {
            return false;
        }
        self.gate = FinalizeGate::Idle;
        true
    }

    /// Assemble the plan summary shown on the review step.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Date` if the cycle window falls outside the
    /// supported calendar range.
    pub fn summary(&self, today: Date) -> Result<PlanSummary> {
        PlanSummary::assemble(&self.state, &self.teams, today)
    }
}
