//! Related team records, read-only from the planner's point of view.

use serde::{Deserialize, Serialize};

use super::{Capacity, Level, RelationshipType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactPerson {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
}

/// Another team whose work touches this team's outcomes, backlog or
/// capabilities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTeam {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub relationship_type: RelationshipType,
    #[serde(default)]
    pub relationship_strength: Level,
    #[serde(default)]
    pub shared_outcomes: Vec<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub capacity: Capacity,
    pub contact_person: ContactPerson,
    #[serde(default)]
    pub upcoming_milestones: Vec<String>,
}

/// Look up a team by id in a directory slice.
pub fn find_team<'a>(teams: &'a [RelatedTeam], id: &str) -> Option<&'a RelatedTeam> {
    teams.iter().find(|team| team.id == id)
}
