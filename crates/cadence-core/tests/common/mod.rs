use cadence_core::{SeedData, Workspace, WorkspaceBuilder};
use tempfile::TempDir;

/// Write the sample seed to a temp dir and build a workspace from it.
pub async fn create_test_workspace() -> (TempDir, Workspace) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let seed_path = temp_dir.path().join("seed.json");
    SeedData::sample()
        .expect("Failed to load sample seed")
        .save(&seed_path)
        .expect("Failed to write seed file");
    let workspace = WorkspaceBuilder::new()
        .with_seed_path(Some(&seed_path))
        .build()
        .await
        .expect("Failed to create workspace");
    (temp_dir, workspace)
}
