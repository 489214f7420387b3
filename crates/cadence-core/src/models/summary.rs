//! Plan summary produced at the review step.

use jiff::{civil::Date, ToSpan};
use serde::{Deserialize, Serialize};

use super::{BacklogItem, Outcome, RelatedTeam};
use crate::error::Result;

/// The calendar quarter a 90-day cycle covers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleWindow {
    pub quarter: i8,
    pub year: i16,
    pub start: Date,
    pub end: Date,
}

impl CycleWindow {
    /// The quarter after the one containing `today`.
    ///
    /// ```rust
    /// use cadence_core::models::CycleWindow;
    /// use jiff::civil::date;
    ///
    /// let window = CycleWindow::following(date(2025, 11, 3))?;
    /// assert_eq!(window.label(), "Q1 2026");
    /// assert_eq!(window.start, date(2026, 1, 1));
    /// assert_eq!(window.end, date(2026, 3, 31));
    /// # Ok::<(), cadence_core::CadenceError>(())
    /// ```
    pub fn following(today: Date) -> Result<Self> {
        let mut quarter = (today.month() - 1) / 3 + 2;
        let mut year = today.year();
        if quarter > 4 {
            quarter = 1;
            year += 1;
        }
        let start = Date::new(year, (quarter - 1) * 3 + 1, 1)?;
        let end = start.checked_add(2.months())?.last_of_month();
        Ok(Self {
            quarter,
            year,
            start,
            end,
        })
    }

    pub fn label(&self) -> String {
        format!("Q{} {}", self.quarter, self.year)
    }
}

/// Everything the team committed to for the upcoming cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    pub cycle: CycleWindow,
    /// Short-term outcomes in entry order
    pub outcomes: Vec<Outcome>,
    /// Items tagged for the upcoming cycle, in backlog order
    pub backlog: Vec<BacklogItem>,
    /// Selected teams found in the directory, in selection order
    pub teams: Vec<RelatedTeam>,
    /// Selected team ids with no directory entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_teams: Vec<String>,
}

impl PlanSummary {
    pub fn metric_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.metrics.len()).sum()
    }
}
