//! Outcome hierarchy: storage, drafts and statement feedback.
//!
//! Outcomes are edited through an [`OutcomeDraft`]: take a draft from the
//! [`OutcomeStore`], edit it, and hand it back to
//! [`OutcomeStore::commit`]. Discarding a draft is just dropping it.
//!
//! ```rust
//! use cadence_core::{models::Timeframe, outcomes::OutcomeStore};
//!
//! let mut store = OutcomeStore::default();
//! let mut draft = store.begin_new(Timeframe::LongTerm);
//! let feedback = draft.set_title("Teams will have dashboards");
//! assert!(!feedback.why.valid);
//!
//! let saved = store.commit(draft);
//! assert_eq!(saved.outcome.id, "lto-001");
//! assert!(saved.created);
//! ```

pub mod draft;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use draft::OutcomeDraft;
pub use store::{Alignment, CommittedOutcome, OutcomeStore};
pub use validation::{validate_outcome_statement, Check, StatementValidation};
