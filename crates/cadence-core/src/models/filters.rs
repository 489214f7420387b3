//! Panel selectors for the backlog planning board.

use std::str::FromStr;

/// One of the three columns of the backlog planning board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Items carried over from the last cycle that are not completed
    PreviousCycle,

    /// Items committed to the upcoming cycle
    UpcomingCycle,

    /// Everything without a classification tag
    ProductBacklog,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::PreviousCycle, Panel::ProductBacklog, Panel::UpcomingCycle];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::PreviousCycle => "Previous Cycle",
            Panel::UpcomingCycle => "Upcoming Cycle",
            Panel::ProductBacklog => "Product Backlog",
        }
    }
}

impl FromStr for Panel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "previous" | "previous-cycle" => Ok(Panel::PreviousCycle),
            "upcoming" | "upcoming-cycle" => Ok(Panel::UpcomingCycle),
            "product" | "product-backlog" | "unclassified" => Ok(Panel::ProductBacklog),
            _ => Err(format!("Invalid panel: {s}")),
        }
    }
}
