//! The explicit store every page of the dashboard shares.
//!
//! A [`Workspace`] owns the outcome hierarchy, the backlog, the related-team
//! directory and the working agreement. Consumers borrow it; mutation goes
//! through the store operations only.
//!
//! ```rust
//! use cadence_core::{params::DropItem, WorkspaceBuilder};
//!
//! # async fn example() -> cadence_core::Result<()> {
//! let mut workspace = WorkspaceBuilder::new()
//!     .with_seed_path(Some("seed.json"))
//!     .build()
//!     .await?;
//!
//! let moved = workspace.drop_item_result(&DropItem {
//!     id: "b4".to_string(),
//!     container: "q4-backlog".to_string(),
//! })?;
//! println!("{moved}");
//!
//! let wizard = workspace.start_wizard();
//! # Ok(())
//! # }
//! ```

pub mod builder;
mod handlers;

use log::debug;

pub use builder::WorkspaceBuilder;

use crate::{
    backlog::BacklogStore,
    models::{Recommendation, RelatedTeam, UserResearchInsight, WorkingAgreement},
    outcomes::OutcomeStore,
    seed::SeedData,
    wizard::Wizard,
};

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    outcomes: OutcomeStore,
    backlog: BacklogStore,
    teams: Vec<RelatedTeam>,
    research: Vec<UserResearchInsight>,
    recommendations: Vec<Recommendation>,
    agreement: Option<WorkingAgreement>,
}

impl Workspace {
    pub fn outcomes(&self) -> &OutcomeStore {
        &self.outcomes
    }

    pub fn outcomes_mut(&mut self) -> &mut OutcomeStore {
        &mut self.outcomes
    }

    pub fn backlog(&self) -> &BacklogStore {
        &self.backlog
    }

    pub fn backlog_mut(&mut self) -> &mut BacklogStore {
        &mut self.backlog
    }

    pub fn teams(&self) -> &[RelatedTeam] {
        &self.teams
    }

    pub fn research(&self) -> &[UserResearchInsight] {
        &self.research
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn agreement(&self) -> Option<&WorkingAgreement> {
        self.agreement.as_ref()
    }

    pub fn agreement_mut(&mut self) -> Option<&mut WorkingAgreement> {
        self.agreement.as_mut()
    }

    /// Mount a planning wizard on a snapshot of the current data.
    ///
    /// The wizard works on its own copies; nothing it does is written back.
    pub fn start_wizard(&self) -> Wizard {
        debug!(
            "Starting wizard with {} backlog items and {} teams",
            self.backlog.len(),
            self.teams.len()
        );
        Wizard::new(
            self.outcomes.data().clone(),
            self.backlog.items().to_vec(),
            self.teams.clone(),
        )
    }

    /// Current contents as seed data, e.g. for writing back to disk.
    pub fn to_seed(&self) -> SeedData {
        SeedData {
            outcomes: self.outcomes.data().clone(),
            backlog: self.backlog.items().to_vec(),
            teams: self.teams.clone(),
            research: self.research.clone(),
            recommendations: self.recommendations.clone(),
            agreement: self.agreement.clone(),
        }
    }
}

impl From<SeedData> for Workspace {
    fn from(seed: SeedData) -> Self {
        Self {
            outcomes: OutcomeStore::new(seed.outcomes),
            backlog: BacklogStore::new(seed.backlog),
            teams: seed.teams,
            research: seed.research,
            recommendations: seed.recommendations,
            agreement: seed.agreement,
        }
    }
}
