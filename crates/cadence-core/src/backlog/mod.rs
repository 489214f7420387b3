//! Backlog collection, board panels and drag gestures.
//!
//! - [`store`]: the [`BacklogStore`] collection and its update operations
//! - [`panels`]: derived previous / product / upcoming views
//! - [`drag`]: the transient [`DragSession`] used while an item is dragged

pub mod drag;
pub mod panels;
pub mod store;


pub use drag::DragSession;
pub use panels::{in_panel, BacklogPanels};
pub use store::BacklogStore;
