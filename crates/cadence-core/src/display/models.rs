//! Display implementations for domain models.
//!
//! Output is markdown so the CLI can hand it straight to the terminal
//! renderer.

use std::fmt;

use super::datetime::{CycleDates, LocalDateTime};
use crate::{
    logo::LogoCandidate,
    models::{
        AgreementStatus, BacklogItem, CycleWindow, ItemStatus, Level, Metric, MetricStatus,
        Outcome, Panel, PlanSummary, RelatedTeam, Timeframe, WorkingAgreement,
    },
    outcomes::{Alignment, Check, StatementValidation},
    wizard::WizardStep,
};

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for AgreementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

impl fmt::Display for CycleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), CycleDates(self))
    }
}

impl fmt::Display for BacklogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item(f, self, None)
    }
}

/// A backlog item with its parent epic resolved through the store.
///
/// Dangling links and links to items that are not epics show no parent.
///
/// ```rust
/// use cadence_core::{display::ItemView, models::BacklogItem};
///
/// let mut feature = BacklogItem::new("b2", "Chart");
/// feature.epic_id = Some("b9".to_string());
/// let output = ItemView { item: &feature, epic: None }.to_string();
/// assert!(!output.contains("b9"));
/// ```
pub struct ItemView<'a> {
    pub item: &'a BacklogItem,
    pub epic: Option<&'a BacklogItem>,
}

impl fmt::Display for ItemView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item(f, self.item, self.epic)
    }
}

fn write_item(
    f: &mut fmt::Formatter<'_>,
    item: &BacklogItem,
    epic: Option<&BacklogItem>,
) -> fmt::Result {
    writeln!(f, "### {} ({})", item.title, item.status.with_icon())?;
    writeln!(f)?;
    writeln!(f, "- ID: {}", item.id)?;
    writeln!(
        f,
        "- Priority: {} | Impact: {} | Effort: {}",
        item.priority, item.impact, item.effort
    )?;
    if let Some(kind) = item.work_package_type {
        writeln!(f, "- Type: {}", kind.as_str())?;
    }
    if let Some(epic) = epic {
        writeln!(f, "- Epic: {} ({})", epic.title, epic.id)?;
    }
    if !item.tags.is_empty() {
        writeln!(f, "- Tags: {}", item.tags.join(", "))?;
    }
    if !item.description.is_empty() {
        writeln!(f)?;
        writeln!(f, "{}", item.description)?;
    }
    writeln!(f)
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.unit.is_empty() {
            String::new()
        } else {
            format!(" {}", self.unit)
        };
        write!(
            f,
            "{}: {}{unit} (currently {}{unit}) [{}]",
            self.name, self.target, self.current, self.status
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_outcome(f, self, None)
    }
}

/// An outcome with its long-term parent resolved through the store.
///
/// Mid-term outcomes show their parent's title, or "No alignment" when the
/// link is missing or dangling.
///
/// ```rust
/// use cadence_core::{
///     display::OutcomeView,
///     models::{Outcome, Timeframe},
///     outcomes::Alignment,
/// };
///
/// let mut mid = Outcome::new("mto-001", "Metrics dashboard", Timeframe::MidTerm);
/// mid.parent_outcome_id = Some("lto-404".to_string());
/// let alignment = Alignment::resolve(&mid, &[]);
/// let output = OutcomeView { outcome: &mid, alignment }.to_string();
/// assert!(output.contains("- No alignment"));
/// assert!(!output.contains("lto-404"));
/// ```
pub struct OutcomeView<'a> {
    pub outcome: &'a Outcome,
    pub alignment: Alignment<'a>,
}

impl fmt::Display for OutcomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alignment = (self.outcome.timeframe == Timeframe::MidTerm).then_some(self.alignment);
        write_outcome(f, self.outcome, alignment)
    }
}

fn write_outcome(
    f: &mut fmt::Formatter<'_>,
    outcome: &Outcome,
    alignment: Option<Alignment<'_>>,
) -> fmt::Result {
    writeln!(f, "### {}. {}", outcome.id, outcome.title)?;
    writeln!(f)?;
    match alignment {
        Some(Alignment::Aligned(parent)) => {
            writeln!(f, "- Aligned to: {} ({})", parent.title, parent.id)?;
        }
        Some(Alignment::Unaligned) => writeln!(f, "- No alignment")?,
        None => {}
    }
    if !outcome.description.is_empty() {
        writeln!(f, "{}", outcome.description)?;
        writeln!(f)?;
    }
    if !outcome.metrics.is_empty() {
        writeln!(f, "#### Key Measurements")?;
        writeln!(f)?;
        for metric in &outcome.metrics {
            writeln!(f, "- {metric}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.valid { "✓" } else { "✗" };
        write!(f, "{mark} {}", self.message)
    }
}

impl fmt::Display for StatementValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, check) in self.checks() {
            writeln!(f, "- **{label}**: {check}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RelatedTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.name, self.relationship_type.label())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        let contact = &self.contact_person;
        if contact.role.is_empty() {
            writeln!(f, "- Contact: {}", contact.name)?;
        } else {
            writeln!(f, "- Contact: {}, {}", contact.name, contact.role)?;
        }
        if !self.capabilities.is_empty() {
            writeln!(f, "- Capabilities: {}", self.capabilities.join(", "))?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quarter = self.cycle.label();
        writeln!(f, "# {quarter} Cycle Plan")?;
        writeln!(f)?;
        writeln!(f, "{}", CycleDates(&self.cycle))?;

        writeln!(f, "\n## Short-Term Outcomes")?;
        writeln!(f)?;
        if self.outcomes.is_empty() {
            writeln!(f, "No short-term outcomes defined.")?;
        }
        for (n, outcome) in self.outcomes.iter().enumerate() {
            writeln!(f, "{}. **{}**", n + 1, outcome.title)?;
            if !outcome.description.is_empty() {
                writeln!(f, "   {}", outcome.description)?;
            }
            for metric in &outcome.metrics {
                writeln!(
                    f,
                    "   - {}: {} (currently {})",
                    metric.name, metric.target, metric.current
                )?;
            }
        }

        writeln!(f, "\n## {quarter} Backlog Items ({} items)", self.backlog.len())?;
        writeln!(f)?;
        for (n, item) in self.backlog.iter().enumerate() {
            writeln!(
                f,
                "{}. **{}** ({} priority, Effort: {}, Impact: {})",
                n + 1,
                item.title,
                item.priority,
                item.effort,
                item.impact
            )?;
        }

        writeln!(f, "\n## Team Connections")?;
        writeln!(f)?;
        if self.teams.is_empty() {
            writeln!(
                f,
                "No teams have been selected for collaboration in this cycle."
            )?;
        } else {
            for team in &self.teams {
                writeln!(
                    f,
                    "- **{}** ({}), contact: {}",
                    team.name,
                    team.relationship_type.label(),
                    team.contact_person.name
                )?;
            }
        }
        if !self.unresolved_teams.is_empty() {
            writeln!(f)?;
            writeln!(f, "Unknown teams: {}", self.unresolved_teams.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for WorkingAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- Status: {} (v{:.1})", self.status, self.version)?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.last_updated))?;
        if !self.approvals.is_empty() {
            writeln!(f, "- Approvals: {}%", self.approval_percentage())?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        for section in &self.sections {
            writeln!(f, "\n## {}", section.title)?;
            writeln!(f)?;
            writeln!(f, "{}", section.content)?;
        }
        Ok(())
    }
}

impl fmt::Display for LogoCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {} on {} ({}, {})",
            self.initials, self.foreground, self.background, self.shape, self.id
        )
    }
}
