//! Team working agreement model and its edit operations.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::AgreementStatus;
use crate::error::{CadenceError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgreementSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    pub member_id: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<Timestamp>,
}

impl Approval {
    pub fn pending(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            approved: false,
            approved_at: None,
        }
    }
}

/// How a team works together: sections of prose plus member sign-off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkingAgreement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sections: Vec<AgreementSection>,
    #[serde(default)]
    pub status: AgreementStatus,
    pub version: f64,
    pub last_updated: Timestamp,
    #[serde(default)]
    pub approvals: Vec<Approval>,
}

impl WorkingAgreement {
    pub fn update_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    /// Append a placeholder section and return its id.
    ///
    /// Ids follow `section-N` where N is one past the current section count,
    /// bumped further if that id is already taken after deletions.
    pub fn add_section(&mut self) -> String {
        let mut n = self.sections.len() + 1;
        while self.section(&format!("section-{n}")).is_some() {
            n += 1;
        }
        let id = format!("section-{n}");
        self.sections.push(AgreementSection {
            id: id.clone(),
            title: "New Section".to_string(),
            content: "Add content here...".to_string(),
        });
        self.touch();
        id
    }

    pub fn section(&self, id: &str) -> Option<&AgreementSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Replace a section's title and/or content.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` if no section has the given id.
    pub fn update_section(
        &mut self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<()> {
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| {
                CadenceError::invalid_input("section").with_reason(format!("no section '{id}'"))
            })?;
        if let Some(title) = title {
            section.title = title;
        }
        if let Some(content) = content {
            section.content = content;
        }
        self.touch();
        Ok(())
    }

    /// Remove a section. Returns whether anything was removed.
    pub fn delete_section(&mut self, id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        let removed = self.sections.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Record a member's approval.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidInput` if the member is not on the
    /// approval list.
    pub fn approve(&mut self, member_id: &str) -> Result<()> {
        let approval = self
            .approvals
            .iter_mut()
            .find(|a| a.member_id == member_id)
            .ok_or_else(|| {
                CadenceError::invalid_input("member")
                    .with_reason(format!("'{member_id}' is not an approver"))
            })?;
        approval.approved = true;
        approval.approved_at = Some(Timestamp::now());
        self.touch();
        Ok(())
    }

    /// Share of approvers who have signed off, rounded to a whole percent.
    pub fn approval_percentage(&self) -> u8 {
        if self.approvals.is_empty() {
            return 0;
        }
        let approved = self.approvals.iter().filter(|a| a.approved).count();
        ((approved as f64 / self.approvals.len() as f64) * 100.0).round() as u8
    }

    /// Mark the agreement active and bump the version by one tenth.
    pub fn publish(&mut self) {
        self.status = AgreementStatus::Active;
        self.version = ((self.version + 0.1) * 10.0).round() / 10.0;
        self.touch();
    }

    fn touch(&mut self) {
        self.last_updated = Timestamp::now();
    }
}
