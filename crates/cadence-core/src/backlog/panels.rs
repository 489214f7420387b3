//! Derived panel views over a backlog collection.
//!
//! Panels are recomputed from tags on every read and never stored.

use crate::{
    classify::{PREVIOUS_CYCLE_TAG, UPCOMING_CYCLE_TAG},
    models::{BacklogItem, ItemStatus, Panel},
};

/// Whether an item shows up in a panel.
///
/// Completed previous-cycle items belong to no panel.
pub fn in_panel(item: &BacklogItem, panel: Panel) -> bool {
    let previous = item.has_tag(PREVIOUS_CYCLE_TAG);
    let upcoming = item.has_tag(UPCOMING_CYCLE_TAG);
    match panel {
        Panel::PreviousCycle => previous && item.status != ItemStatus::Completed,
        Panel::UpcomingCycle => upcoming,
        Panel::ProductBacklog => !previous && !upcoming,
    }
}

/// The three board columns, borrowed from one collection.
#[derive(Debug, Clone, Default)]
pub struct BacklogPanels<'a> {
    pub previous_cycle: Vec<&'a BacklogItem>,
    pub product_backlog: Vec<&'a BacklogItem>,
    pub upcoming_cycle: Vec<&'a BacklogItem>,
}

impl<'a> BacklogPanels<'a> {
    pub fn of(items: &'a [BacklogItem]) -> Self {
        let mut panels = Self::default();
        for item in items {
            if in_panel(item, Panel::PreviousCycle) {
                panels.previous_cycle.push(item);
            }
            if in_panel(item, Panel::ProductBacklog) {
                panels.product_backlog.push(item);
            }
            if in_panel(item, Panel::UpcomingCycle) {
                panels.upcoming_cycle.push(item);
            }
        }
        panels
    }

    pub fn get(&self, panel: Panel) -> &[&'a BacklogItem] {
        match panel {
            Panel::PreviousCycle => &self.previous_cycle,
            Panel::UpcomingCycle => &self.upcoming_cycle,
            Panel::ProductBacklog => &self.product_backlog,
        }
    }

    pub fn total(&self) -> usize {
        self.previous_cycle.len() + self.product_backlog.len() + self.upcoming_cycle.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<BacklogItem> {
        vec![
            BacklogItem::new("p1", "Carry over").with_tags([PREVIOUS_CYCLE_TAG]),
            BacklogItem::new("p2", "Done last cycle")
                .with_tags([PREVIOUS_CYCLE_TAG])
                .with_status(ItemStatus::Completed),
            BacklogItem::new("u1", "Next up").with_tags(["api", UPCOMING_CYCLE_TAG]),
            BacklogItem::new("g1", "Someday").with_tags(["ux"]),
            BacklogItem::new("g2", "Untagged"),
        ]
    }

    #[test]
    fn test_panels_split_by_tag() {
        let items = sample();
        let panels = BacklogPanels::of(&items);

        let ids = |p: Panel| panels.get(p).iter().map(|i| i.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids(Panel::PreviousCycle), vec!["p1"]);
        assert_eq!(ids(Panel::UpcomingCycle), vec!["u1"]);
        assert_eq!(ids(Panel::ProductBacklog), vec!["g1", "g2"]);
    }

    #[test]
    fn test_completed_previous_items_are_hidden() {
        let items = sample();
        let panels = BacklogPanels::of(&items);
        assert_eq!(panels.total(), items.len() - 1);
        assert!(Panel::ALL.iter().all(|p| !in_panel(&items[1], *p)));
    }

    #[test]
    fn test_panels_are_pairwise_disjoint() {
        let items = sample();
        for item in &items {
            let hits = Panel::ALL.iter().filter(|p| in_panel(item, **p)).count();
            assert!(hits <= 1, "{} is in {hits} panels", item.id);
        }
    }
}
