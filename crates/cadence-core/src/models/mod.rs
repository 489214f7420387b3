//! Data models for outcomes, backlog items and the records around them.
//!
//! Models are plain serde structs matching the dashboard's data records
//! (camelCase on the wire). Display implementations live in
//! [`crate::display::models`] so presentation stays out of the data types.
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{BacklogItem, ItemStatus};
//!
//! let item = BacklogItem::new("b1", "Self-service onboarding")
//!     .with_tags(["Previous Cycle", "onboarding"])
//!     .with_status(ItemStatus::InProgress);
//!
//! assert!(item.has_tag("Previous Cycle"));
//! println!("{}", item);
//! ```

pub mod agreement;
pub mod backlog;
pub mod filters;
pub mod outcome;
pub mod requests;
pub mod status;
pub mod summary;
pub mod team;

#[cfg(test)]
mod tests;

pub use agreement::{AgreementSection, Approval, WorkingAgreement};
pub use backlog::{BacklogItem, Recommendation, UserResearchInsight};
pub use filters::Panel;
pub use outcome::{Metric, MetricField, Outcome, OutcomeData};
pub use requests::UpdateItemRequest;
pub use status::{
    AgreementStatus, Capacity, ItemStatus, Level, MetricStatus, RelationshipType, Timeframe,
    WorkPackageType,
};
pub use summary::{CycleWindow, PlanSummary};
pub use team::{find_team, ContactPerson, RelatedTeam};
