//! Collection wrappers for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::models::{ItemView, OutcomeView};
use crate::{
    backlog::BacklogPanels,
    models::{BacklogItem, Outcome, Panel, RelatedTeam},
    outcomes::Alignment,
    wizard::{StepMarker, WizardStep},
};

/// A list of backlog items, displayed with their epic links resolved.
///
/// ```rust
/// use cadence_core::{
///     display::BacklogItems,
///     models::{BacklogItem, WorkPackageType},
/// };
///
/// let mut epic = BacklogItem::new("b1", "Metrics pipeline");
/// epic.work_package_type = Some(WorkPackageType::Epic);
/// let mut chart = BacklogItem::new("b2", "Deployment chart");
/// chart.epic_id = Some("b1".to_string());
/// let mut orphan = BacklogItem::new("b5", "Dependency map");
/// orphan.epic_id = Some("b9".to_string());
///
/// let items = BacklogItems::from(vec![epic, chart, orphan]);
/// let output = items.to_string();
/// assert!(output.contains("- Epic: Metrics pipeline (b1)"));
/// assert!(!output.contains("b9"));
/// assert_eq!(BacklogItems::from(vec![]).to_string(), "No backlog items found.\n");
/// ```
pub struct BacklogItems {
    items: Vec<BacklogItem>,
    epics: Vec<BacklogItem>,
}

impl BacklogItems {
    /// Items to show, plus the epics their links may point at.
    pub fn new(items: Vec<BacklogItem>, epics: Vec<BacklogItem>) -> Self {
        let epics = epics.into_iter().filter(BacklogItem::is_epic).collect();
        Self { items, epics }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&BacklogItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BacklogItem> {
        self.items.iter()
    }

    fn epic_of(&self, item: &BacklogItem) -> Option<&BacklogItem> {
        let epic_id = item.epic_id.as_deref()?;
        self.epics.iter().find(|epic| epic.id == epic_id)
    }
}

/// Links resolve among the listed items themselves.
impl From<Vec<BacklogItem>> for BacklogItems {
    fn from(items: Vec<BacklogItem>) -> Self {
        let epics = items.clone();
        Self::new(items, epics)
    }
}

impl Index<usize> for BacklogItems {
    type Output = BacklogItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl IntoIterator for BacklogItems {
    type Item = BacklogItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a BacklogItems {
    type Item = &'a BacklogItem;
    type IntoIter = std::slice::Iter<'a, BacklogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for BacklogItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "No backlog items found.");
        }
        for item in &self.items {
            let view = ItemView {
                item,
                epic: self.epic_of(item),
            };
            write!(f, "{view}")?;
        }
        Ok(())
    }
}

/// A list of outcomes, displayed with mid-term alignment resolved.
pub struct Outcomes {
    outcomes: Vec<Outcome>,
    long_term: Vec<Outcome>,
}

impl Outcomes {
    /// Outcomes to show, plus the long-term list their parents live in.
    pub fn new(outcomes: Vec<Outcome>, long_term: Vec<Outcome>) -> Self {
        Self {
            outcomes,
            long_term,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.outcomes.iter()
    }
}

impl fmt::Display for Outcomes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outcomes.is_empty() {
            return writeln!(f, "No outcomes found.");
        }
        for outcome in &self.outcomes {
            let view = OutcomeView {
                outcome,
                alignment: Alignment::resolve(outcome, &self.long_term),
            };
            write!(f, "{view}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the related-team directory.
pub struct Teams(pub Vec<RelatedTeam>);

impl fmt::Display for Teams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No related teams found.")
        } else {
            for team in &self.0 {
                write!(f, "{team}")?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for BacklogPanels<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for panel in Panel::ALL {
            let items = self.get(panel);
            writeln!(f, "## {} ({})", panel.title(), items.len())?;
            writeln!(f)?;
            if items.is_empty() {
                writeln!(f, "_Drop items here_")?;
                writeln!(f)?;
            }
            for item in items {
                writeln!(f, "- **{}** `{}` {}", item.title, item.id, item.status.with_icon())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Step indicator line for the wizard header.
///
/// ```rust
/// use cadence_core::{display::Progress, models::OutcomeData, wizard::Wizard};
///
/// let mut wizard = Wizard::new(OutcomeData::default(), Vec::new(), Vec::new());
/// wizard.next();
/// let line = Progress(wizard.progress()).to_string();
/// assert!(line.starts_with("✓ 1 Define Outcomes"));
/// assert!(line.contains("[2 Innovation Sprint]"));
/// ```
pub struct Progress(pub Vec<(WizardStep, StepMarker)>);

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(step, marker)| match marker {
                StepMarker::Completed => format!("✓ {} {}", step.number(), step.title()),
                StepMarker::Current => format!("[{} {}]", step.number(), step.title()),
                StepMarker::Upcoming => format!("{} {}", step.number(), step.title()),
            })
            .collect();
        writeln!(f, "{}", parts.join(" → "))
    }
}
