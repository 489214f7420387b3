//! The five steps of the 90-day planning flow.

use serde::{Deserialize, Serialize};

/// A wizard step, numbered 1 through 5.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum WizardStep {
    #[default]
    DefineOutcomes = 1,
    InnovationSprint = 2,
    BacklogPlanning = 3,
    TeamConnections = 4,
    Review = 5,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::DefineOutcomes;
    pub const LAST: WizardStep = WizardStep::Review;
    pub const ALL: [WizardStep; 5] = [
        WizardStep::DefineOutcomes,
        WizardStep::InnovationSprint,
        WizardStep::BacklogPlanning,
        WizardStep::TeamConnections,
        WizardStep::Review,
    ];

    /// The step with the given 1-based number, if it exists.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::DefineOutcomes => "Define Outcomes",
            WizardStep::InnovationSprint => "Innovation Sprint",
            WizardStep::BacklogPlanning => "Backlog Planning",
            WizardStep::TeamConnections => "Team Connections",
            WizardStep::Review => "Review & Finalize",
        }
    }

    /// Next step, clamped at the last one.
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::LAST)
    }

    /// Previous step, clamped at the first one.
    pub fn prev(self) -> Self {
        Self::from_number(self.number() - 1).unwrap_or(Self::FIRST)
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n).ok_or_else(|| format!("Invalid wizard step: {n}"))
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}

/// How the step indicator shows one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMarker {
    /// Already passed; clicking jumps back to it
    Completed,
    Current,
    Upcoming,
}
