//! Builder for creating and configuring Workspace instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Workspace;
use crate::{
    error::{CadenceError, Result, ResultExt},
    seed::SeedData,
};

const SEED_FILE: &str = "seed.json";

/// Builder for creating and configuring [`Workspace`] instances.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceBuilder {
    seed_path: Option<PathBuf>,
}

impl WorkspaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a seed file to load.
    ///
    /// If not specified, `$XDG_CONFIG_HOME/cadence/seed.json` is used when it
    /// exists, and the built-in sample data otherwise.
    pub fn with_seed_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.seed_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the seed data and builds the workspace.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::FileSystem` if the seed file cannot be read,
    /// and any seed parsing error.
    pub async fn build(self) -> Result<Workspace> {
        let seed_path = self.seed_path.or_else(Self::default_seed_path);

        let seed = task::spawn_blocking(move || match seed_path {
            Some(path) => SeedData::load(&path),
            None => {
                debug!("No seed file found, using sample data");
                SeedData::sample()
            }
        })
        .await
        .with_context("Seed loading task failed")??;

        Ok(Workspace::from(seed))
    }

    /// The XDG seed file, if one exists.
    fn default_seed_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("cadence").find_config_file(SEED_FILE)
    }

    /// Where a user seed file goes, creating the config directory on the way.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::XdgDirectory` if the directory cannot be
    /// created.
    pub fn place_default_seed() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cadence")
            .place_config_file(SEED_FILE)
            .map_err(|e| CadenceError::XdgDirectory(e.to_string()))
    }
}
