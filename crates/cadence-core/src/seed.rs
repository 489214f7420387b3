//! Seed data the dashboard hands to the planner at startup.

use std::{collections::HashSet, fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CadenceError, Result},
    models::{
        BacklogItem, OutcomeData, Recommendation, RelatedTeam, UserResearchInsight,
        WorkingAgreement,
    },
};

const SAMPLE_SEED: &str = include_str!("../data/sample_seed.json");

/// Boundary records supplied by external collaborators.
///
/// Every collection may be omitted from the JSON and defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub outcomes: OutcomeData,
    #[serde(default)]
    pub backlog: Vec<BacklogItem>,
    #[serde(default)]
    pub teams: Vec<RelatedTeam>,
    #[serde(default)]
    pub research: Vec<UserResearchInsight>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement: Option<WorkingAgreement>,
}

impl SeedData {
    /// The built-in sample data set.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled JSON is malformed.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_SEED)
    }

    /// Parse and check seed JSON.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Serialization` for malformed JSON and
    /// `CadenceError::DuplicateId` when two records of one kind share an id.
    pub fn from_json(json: &str) -> Result<Self> {
        let seed: Self = serde_json::from_str(json)?;
        seed.check_ids()?;
        Ok(seed)
    }

    /// Read seed data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::FileSystem` if the file cannot be read, plus
    /// anything [`from_json`](Self::from_json) returns.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading seed data from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| CadenceError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Write the seed data as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::FileSystem` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| CadenceError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }

    fn check_ids(&self) -> Result<()> {
        unique_ids("backlog item", self.backlog.iter().map(|item| item.id.as_str()))?;
        let outcomes = &self.outcomes;
        unique_ids(
            "outcome",
            outcomes
                .long_term
                .iter()
                .chain(&outcomes.mid_term)
                .chain(&outcomes.short_term)
                .map(|outcome| outcome.id.as_str()),
        )?;
        unique_ids("related team", self.teams.iter().map(|team| team.id.as_str()))
    }
}

fn unique_ids<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CadenceError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
