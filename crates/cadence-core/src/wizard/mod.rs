//! The five-step cycle planning wizard.
//!
//! [`Wizard`] owns a [`WizardState`] built from seed data at mount time and
//! moves through [`WizardStep`]s. The review step reads every earlier slice
//! to build a [`PlanSummary`](crate::models::PlanSummary); leaving the
//! wizard goes through a two-phase finalize gate.

pub mod events;
pub mod machine;
pub mod state;
pub mod step;
mod summary;

#[cfg(test)]
mod tests;

pub use events::SessionEvent;
pub use machine::{Navigation, StepView, Wizard};
pub use state::WizardState;
pub use step::{StepMarker, WizardStep};
