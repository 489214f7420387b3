//! Transient drag gesture state.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::BacklogStore;
use crate::models::BacklogItem;

/// Tracks the item currently being dragged.
///
/// Every path through [`drag_end`](Self::drag_end) clears the active item,
/// so nothing leaks into the next gesture.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DragSession {
    active: Option<String>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `id`. Unknown ids record nothing and return `false`.
    pub fn drag_start(&mut self, store: &BacklogStore, id: &str) -> bool {
        if store.get(id).is_some() {
            debug!("Drag started on {id}");
            self.active = Some(id.to_string());
            true
        } else {
            warn!("Drag start on unknown backlog item {id}");
            false
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The dragged item, for rendering an overlay.
    pub fn active_item<'a>(&self, store: &'a BacklogStore) -> Option<&'a BacklogItem> {
        store.get(self.active.as_deref()?)
    }

    /// Finish the gesture.
    ///
    /// With a drop target the active item is reclassified in `store` and the
    /// updated copy returned. Without a target, with no active item, or if
    /// the item vanished meanwhile, nothing changes.
    pub fn drag_end(
        &mut self,
        store: &mut BacklogStore,
        over: Option<&str>,
    ) -> Option<BacklogItem> {
        let active = self.active.take()?;
        let container = over?;
        store.apply_drop(&active, container).ok().cloned()
    }

    /// Abort the gesture without touching the store.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{PREVIOUS_CYCLE_TAG, UPCOMING_CYCLE_TAG};

    fn store() -> BacklogStore {
        BacklogStore::new(vec![
            BacklogItem::new("b1", "First").with_tags([PREVIOUS_CYCLE_TAG]),
            BacklogItem::new("b2", "Second"),
        ])
    }

    #[test]
    fn test_drag_start_unknown_id_records_nothing() {
        let store = store();
        let mut drag = DragSession::new();
        assert!(!drag.drag_start(&store, "missing"));
        assert_eq!(drag.active_id(), None);
    }

    #[test]
    fn test_drop_reclassifies_and_clears_active() {
        let mut store = store();
        let mut drag = DragSession::new();
        assert!(drag.drag_start(&store, "b1"));
        assert_eq!(drag.active_item(&store).map(|i| i.title.as_str()), Some("First"));

        let moved = drag.drag_end(&mut store, Some("q4-backlog")).unwrap();
        assert_eq!(moved.tags, vec![UPCOMING_CYCLE_TAG.to_string()]);
        assert_eq!(store.get("b1").unwrap().tags, moved.tags);
        assert_eq!(drag.active_id(), None);
    }

    #[test]
    fn test_drag_end_without_target_is_noop() {
        let mut store = store();
        let before = store.clone();
        let mut drag = DragSession::new();
        drag.drag_start(&store, "b1");

        assert!(drag.drag_end(&mut store, None).is_none());
        assert_eq!(store, before);
        assert_eq!(drag.active_id(), None);
    }

    #[test]
    fn test_drag_end_without_start_is_noop() {
        let mut store = store();
        let before = store.clone();
        let mut drag = DragSession::new();
        assert!(drag.drag_end(&mut store, Some("q3-backlog")).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_cancel_clears_active_without_touching_store() {
        let mut store = store();
        let before = store.clone();
        let mut drag = DragSession::new();
        assert!(drag.drag_start(&store, "b1"));
        drag.cancel();

        assert_eq!(drag.active_id(), None);
        assert!(drag.drag_end(&mut store, Some("q4-backlog")).is_none());
        assert_eq!(store, before);
    }
}
