//! Headless core of the cadence team-planning dashboard.
//!
//! The crate covers 90-day cycle planning without any rendering:
//!
//! - [`classify`] and [`backlog`]: drag-and-drop classification of backlog
//!   items into the previous cycle, the upcoming cycle or the product
//!   backlog, and the board panels derived from the tags.
//! - [`wizard`]: the five-step planning wizard, its finalize confirmation
//!   gate and the plan summary built on the review step.
//! - [`outcomes`]: the long/mid/short-term outcome hierarchy, edited through
//!   drafts, with advisory who/what/why feedback on statements.
//! - [`workspace`]: the store shared by every page, loaded from seed data.
//!
//! Domain models implement [`std::fmt::Display`] as markdown; the CLI hands
//! that to its terminal renderer.
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{wizard::WizardStep, SeedData, Workspace};
//!
//! # fn example() -> cadence_core::Result<()> {
//! let workspace = Workspace::from(SeedData::sample()?);
//! let mut wizard = workspace.start_wizard();
//!
//! wizard.next();
//! wizard.next();
//! assert_eq!(wizard.step(), WizardStep::BacklogPlanning);
//! wizard.drop_item("b4", "q4-backlog");
//!
//! let summary = wizard.summary(jiff::Zoned::now().date())?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod backlog;
pub mod classify;
pub mod display;
pub mod error;
pub mod logo;
pub mod models;
pub mod outcomes;
pub mod params;
pub mod seed;
pub mod wizard;
pub mod workspace;

// Re-export commonly used types
pub use backlog::{BacklogStore, DragSession};
pub use classify::{classify, Classification, Container};
pub use display::{OperationStatus, UpdateResult};
pub use error::{CadenceError, Result};
pub use logo::{LogoGenerator, LogoOutcome, LogoRequest, PendingLogos};
pub use outcomes::{validate_outcome_statement, OutcomeStore, StatementValidation};
pub use seed::SeedData;
pub use wizard::{Navigation, SessionEvent, Wizard, WizardStep};
pub use workspace::{Workspace, WorkspaceBuilder};
