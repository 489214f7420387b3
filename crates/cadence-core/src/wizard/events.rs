//! Scripted wizard input.

use serde::{Deserialize, Serialize};

use super::machine::{Navigation, Wizard};
use crate::models::Outcome;

/// One user action against the wizard, as it appears in a session script.
///
/// ```rust
/// use cadence_core::wizard::SessionEvent;
///
/// let events: Vec<SessionEvent> = serde_json::from_str(
///     r#"[{"type": "next"}, {"type": "drop", "itemId": "b1", "containerId": "q4-backlog"}]"#,
/// )?;
/// assert_eq!(events[0], SessionEvent::Next);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SessionEvent {
    Next,
    Back,
    JumpTo { step: u8 },
    DragStart { item_id: String },
    DragEnd {
        #[serde(default)]
        over: Option<String>,
    },
    DragCancel,
    Drop { item_id: String, container_id: String },
    SaveShortTermOutcome { outcome: Outcome },
    SetInnovationSprintUrl { url: String },
    SetDesignAgentUrl { url: String },
    ToggleTeam { team_id: String },
    RequestFinalize,
    ConfirmFinalize,
    CancelFinalize,
}

impl Wizard {
    /// Dispatch one event. Returns the navigation signal if the event
    /// confirmed the plan.
    pub fn apply(&mut self, event: SessionEvent) -> Option<Navigation> {
        match event {
            SessionEvent::Next => {
                self.next();
            }
            SessionEvent::Back => {
                self.back();
            }
            SessionEvent::JumpTo { step } => {
                self.jump_to(step);
            }
            SessionEvent::DragStart { item_id } => {
                self.drag_start(&item_id);
            }
            SessionEvent::DragEnd { over } => {
                self.drag_end(over.as_deref());
            }
            SessionEvent::DragCancel => self.drag_cancel(),
            SessionEvent::Drop {
                item_id,
                container_id,
            } => {
                self.drop_item(&item_id, &container_id);
            }
            SessionEvent::SaveShortTermOutcome { outcome } => {
                self.upsert_short_term_outcome(outcome);
            }
            SessionEvent::SetInnovationSprintUrl { url } => self.set_innovation_sprint_url(url),
            SessionEvent::SetDesignAgentUrl { url } => self.set_design_agent_url(url),
            SessionEvent::ToggleTeam { team_id } => {
                self.toggle_team(&team_id);
            }
            SessionEvent::RequestFinalize => {
                self.request_finalize();
            }
            SessionEvent::ConfirmFinalize => return self.confirm_finalize(),
            SessionEvent::CancelFinalize => {
                self.cancel_finalize();
            }
        }
        None
    }

    /// Apply events in order, stopping at the first navigation signal.
    pub fn run<I>(&mut self, events: I) -> Option<Navigation>
    where
        I: IntoIterator<Item = SessionEvent>,
    {
        events.into_iter().find_map(|event| self.apply(event))
    }
}
