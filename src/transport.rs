//! Boundary contracts to external collaborators.
//!
//! The backend store, repository sources, and any other transport are
//! external concerns; the core only flattens/hydrates across these traits.
//! Transport failures are opaque: the local model stays the durable source
//! of truth and the operation may be retried.

use crate::error::WorkspaceError;
use crate::flat::FlatFile;
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A project as held by the storage backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub files: Vec<FlatFile>,
}

/// Persistence backend for projects.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn load(&self, project_id: &str, token: &str) -> anyhow::Result<ProjectRecord>;

    async fn save(
        &self,
        project_id: &str,
        name: &str,
        files: &[FlatFile],
        token: &str,
    ) -> anyhow::Result<()>;
}

/// Remote source of importable repositories.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch the flat file list for a repository reference.
    async fn fetch(&self, reference: &str) -> anyhow::Result<Vec<FlatFile>>;
}

/// Load a project from the backend and hydrate it into a workspace.
pub async fn load_project(
    store: &dyn ProjectStore,
    project_id: &str,
    token: &str,
) -> Result<Workspace, WorkspaceError> {
    let record = store
        .load(project_id, token)
        .await
        .map_err(WorkspaceError::Transport)?;
    info!(project_id, files = record.files.len(), "loaded project");
    Ok(Workspace::from_flat(&record.files, &record.name))
}

/// Persist a workspace. The flattened snapshot is captured before the
/// transport call, so the user may keep editing while the save is in
/// flight.
pub async fn save_project(
    store: &dyn ProjectStore,
    workspace: &Workspace,
    project_id: &str,
    token: &str,
) -> Result<(), WorkspaceError> {
    let snapshot = workspace.to_flat();
    store
        .save(project_id, workspace.name(), &snapshot, token)
        .await
        .map_err(WorkspaceError::Transport)?;
    info!(project_id, files = snapshot.len(), "saved project");
    Ok(())
}

/// Fetch a remote repository and hydrate it into a fresh workspace.
pub async fn import_repository(
    source: &dyn RepositorySource,
    reference: &str,
    workspace_name: &str,
) -> Result<Workspace, WorkspaceError> {
    let files = source
        .fetch(reference)
        .await
        .map_err(WorkspaceError::Transport)?;
    info!(reference, files = files.len(), "imported repository");
    Ok(Workspace::from_flat(&files, workspace_name))
}
