//! Drag classification: mapping a drop target to a backlog item's tags.
//!
//! Cycle membership is carried entirely in an item's tag list. Two tags,
//! [`PREVIOUS_CYCLE_TAG`] and [`UPCOMING_CYCLE_TAG`], are mutually exclusive
//! and every drop goes through [`classify`], which is the only code that
//! adds or removes them.
//!
//! ```rust
//! use cadence_core::{classify::classify, models::BacklogItem};
//!
//! let item = BacklogItem::new("b1", "Audit logging").with_tags(["Previous Cycle"]);
//! let moved = classify(&item, "q4-backlog");
//! assert_eq!(moved.tags, vec!["Upcoming Cycle".to_string()]);
//! ```

use std::fmt;

use crate::models::BacklogItem;

/// Tag marking an item as carried over from the previous cycle.
pub const PREVIOUS_CYCLE_TAG: &str = "Previous Cycle";

/// Tag marking an item as committed to the upcoming cycle.
pub const UPCOMING_CYCLE_TAG: &str = "Upcoming Cycle";

/// Drop-target id of the previous-cycle column.
pub const PREVIOUS_CYCLE_CONTAINER: &str = "q3-backlog";

/// Drop-target id of the upcoming-cycle column.
pub const UPCOMING_CYCLE_CONTAINER: &str = "q4-backlog";

/// Drop-target id of the product backlog column.
pub const PRODUCT_BACKLOG_CONTAINER: &str = "product-backlog";

/// Cycle membership derived from an item's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    PreviousCycle,
    UpcomingCycle,
    Unclassified,
}

impl Classification {
    /// Read the classification of an item.
    ///
    /// Should an item violate the exclusivity invariant (possible only with
    /// hand-written seed data), the first classification tag in display
    /// order wins.
    pub fn of(item: &BacklogItem) -> Self {
        item.tags
            .iter()
            .find_map(|tag| Self::from_tag(tag))
            .unwrap_or(Classification::Unclassified)
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            PREVIOUS_CYCLE_TAG => Some(Classification::PreviousCycle),
            UPCOMING_CYCLE_TAG => Some(Classification::UpcomingCycle),
            _ => None,
        }
    }

    /// The tag this classification adds, if any.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Classification::PreviousCycle => Some(PREVIOUS_CYCLE_TAG),
            Classification::UpcomingCycle => Some(UPCOMING_CYCLE_TAG),
            Classification::Unclassified => None,
        }
    }
}

/// A drop target on the planning board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Container {
    PreviousCycle,
    UpcomingCycle,
    ProductBacklog,
    /// Anything else; treated like the product backlog
    Other(String),
}

impl Container {
    pub fn from_id(id: &str) -> Self {
        match id {
            PREVIOUS_CYCLE_CONTAINER => Container::PreviousCycle,
            UPCOMING_CYCLE_CONTAINER => Container::UpcomingCycle,
            PRODUCT_BACKLOG_CONTAINER => Container::ProductBacklog,
            other => Container::Other(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Container::PreviousCycle => PREVIOUS_CYCLE_CONTAINER,
            Container::UpcomingCycle => UPCOMING_CYCLE_CONTAINER,
            Container::ProductBacklog => PRODUCT_BACKLOG_CONTAINER,
            Container::Other(id) => id,
        }
    }

    /// Classification an item takes on when dropped here.
    pub fn classification(&self) -> Classification {
        match self {
            Container::PreviousCycle => Classification::PreviousCycle,
            Container::UpcomingCycle => Classification::UpcomingCycle,
            Container::ProductBacklog | Container::Other(_) => Classification::Unclassified,
        }
    }
}

impl From<&str> for Container {
    fn from(id: &str) -> Self {
        Container::from_id(id)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Rewrite a tag list for a new classification.
///
/// Both classification tags are stripped, other tags keep their order, and
/// the target's tag (if any) is appended.
pub fn reclassify_tags(tags: &[String], target: Classification) -> Vec<String> {
    let mut next: Vec<String> = tags
        .iter()
        .filter(|tag| Classification::from_tag(tag).is_none())
        .cloned()
        .collect();
    if let Some(tag) = target.tag() {
        next.push(tag.to_string());
    }
    next
}

/// Compute the item that results from dropping `item` onto
/// `target_container_id`.
///
/// Pure: the caller replaces the item in its collection by id.
pub fn classify(item: &BacklogItem, target_container_id: &str) -> BacklogItem {
    let target = Container::from_id(target_container_id).classification();
    BacklogItem {
        tags: reclassify_tags(&item.tags, target),
        ..item.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tags: &[&str]) -> BacklogItem {
        BacklogItem::new("b1", "Item").with_tags(tags.iter().copied())
    }

    #[test]
    fn test_previous_to_upcoming_replaces_tag() {
        let moved = classify(&item(&[PREVIOUS_CYCLE_TAG]), "q4-backlog");
        assert_eq!(moved.tags, vec![UPCOMING_CYCLE_TAG.to_string()]);
    }

    #[test]
    fn test_drop_on_product_backlog_strips_classification() {
        let moved = classify(&item(&["api", UPCOMING_CYCLE_TAG, "ux"]), "product-backlog");
        assert_eq!(moved.tags, vec!["api".to_string(), "ux".to_string()]);
        assert_eq!(Classification::of(&moved), Classification::Unclassified);
    }

    #[test]
    fn test_unknown_container_unclassifies() {
        let moved = classify(&item(&[PREVIOUS_CYCLE_TAG, "api"]), "trash-can");
        assert_eq!(moved.tags, vec!["api".to_string()]);
    }

    #[test]
    fn test_redrop_is_idempotent() {
        let original = item(&["api", UPCOMING_CYCLE_TAG]);
        let once = classify(&original, "q4-backlog");
        let twice = classify(&once, "q4-backlog");
        assert_eq!(once.tags, original.tags);
        assert_eq!(twice.tags, original.tags);
    }

    #[test]
    fn test_invalid_input_with_both_tags_is_repaired() {
        let moved = classify(&item(&[PREVIOUS_CYCLE_TAG, UPCOMING_CYCLE_TAG]), "q3-backlog");
        assert_eq!(moved.tags, vec![PREVIOUS_CYCLE_TAG.to_string()]);
    }

    #[test]
    fn test_classify_keeps_other_fields() {
        let mut original = item(&[]);
        original.description = "keep me".to_string();
        original.epic_id = Some("e1".to_string());
        let moved = classify(&original, "q3-backlog");
        assert_eq!(moved.description, "keep me");
        assert_eq!(moved.epic_id.as_deref(), Some("e1"));
        assert_eq!(moved.id, original.id);
    }

    #[test]
    fn test_every_container_yields_at_most_one_classification_tag() {
        let starts: [&[&str]; 4] = [
            &[],
            &[PREVIOUS_CYCLE_TAG],
            &[UPCOMING_CYCLE_TAG, "x"],
            &[PREVIOUS_CYCLE_TAG, UPCOMING_CYCLE_TAG],
        ];
        for start in starts {
            for target in ["q3-backlog", "q4-backlog", "product-backlog", "", "q1-backlog"] {
                let moved = classify(&item(start), target);
                let prev = moved.has_tag(PREVIOUS_CYCLE_TAG);
                let next = moved.has_tag(UPCOMING_CYCLE_TAG);
                assert!(!(prev && next), "{start:?} -> {target}");
                let count = moved
                    .tags
                    .iter()
                    .filter(|t| *t == PREVIOUS_CYCLE_TAG || *t == UPCOMING_CYCLE_TAG)
                    .count();
                assert!(count <= 1);
            }
        }
    }

    #[test]
    fn test_container_round_trips_ids() {
        assert_eq!(Container::from_id("q3-backlog"), Container::PreviousCycle);
        assert_eq!(Container::from_id("q4-backlog").id(), "q4-backlog");
        assert_eq!(
            Container::from_id("elsewhere"),
            Container::Other("elsewhere".to_string())
        );
    }
}
