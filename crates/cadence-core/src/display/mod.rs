//! Markdown display for planning records.
//!
//! Domain models implement `Display` directly (see [`models`]); lists go
//! through the newtype wrappers in [`collections`]; command feedback uses
//! [`OperationStatus`] and the result wrappers in [`results`].
//!
//! ```rust
//! use cadence_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Moved b1 to Upcoming Cycle");
//! assert_eq!(status.to_string(), "Success: Moved b1 to Upcoming Cycle\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{BacklogItems, Outcomes, Progress, Teams};
pub use datetime::{CycleDates, LocalDateTime, LongDate};
pub use models::{ItemView, OutcomeView};
pub use results::{DeleteResult, SaveResult, UpdateResult};
pub use status::OperationStatus;
