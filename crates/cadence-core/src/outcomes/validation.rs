//! Advisory who/what/why heuristic for outcome statements.
//!
//! The checks only produce feedback. Nothing in the crate refuses to save an
//! outcome because a check failed.

use serde::{Deserialize, Serialize};

const WHO_TERMS: &[&str] = &["teams", "users", "customers", "engineers", "managers"];
const WHAT_MODAL: &str = "will";
const WHAT_TERMS: &[&str] = &["have", "be able", "utilize", "implement", "adopt", "establish"];
const WHY_TERMS: &[&str] = &["enabling", "resulting", "improving", "reducing"];

/// Result of one heuristic check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Check {
    pub valid: bool,
    pub message: String,
}

impl Check {
    fn new(valid: bool, pass: &str, fail: &str) -> Self {
        Self {
            valid,
            message: if valid { pass } else { fail }.to_string(),
        }
    }
}

/// Feedback for an outcome statement; the three checks are independent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatementValidation {
    pub who: Check,
    pub what: Check,
    pub why: Check,
}

impl StatementValidation {
    pub fn is_complete(&self) -> bool {
        self.who.valid && self.what.valid && self.why.valid
    }

    pub fn checks(&self) -> [(&'static str, &Check); 3] {
        [("Who", &self.who), ("What", &self.what), ("Why", &self.why)]
    }
}

/// Run the who/what/why checks with case-insensitive substring matching.
///
/// ```rust
/// use cadence_core::outcomes::validate_outcome_statement;
///
/// let v = validate_outcome_statement("Teams will have dashboards");
/// assert!(v.who.valid);
/// assert!(v.what.valid);
/// assert!(!v.why.valid);
/// ```
pub fn validate_outcome_statement(text: &str) -> StatementValidation {
    let lower = text.to_lowercase();
    let contains_any = |terms: &[&str]| terms.iter().any(|term| lower.contains(term));

    StatementValidation {
        who: Check::new(
            contains_any(WHO_TERMS),
            "Clearly identifies who will be impacted",
            "Missing who will be impacted",
        ),
        what: Check::new(
            lower.contains(WHAT_MODAL) && contains_any(WHAT_TERMS),
            "Clearly states what impact is targeted",
            "Missing what impact is targeted",
        ),
        why: Check::new(
            contains_any(WHY_TERMS),
            "Clearly explains why this matters",
            "Missing why this matters",
        ),
    }
}
