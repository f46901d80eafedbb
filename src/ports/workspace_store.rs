//! Workspace Store Port - Persistence for per-user workspaces.
//!
//! Every change goes through [`WorkspaceStore::update`], which applies the
//! change and writes the result as one step. Two requests touching the same
//! workspace therefore never overwrite each other's edits.

use async_trait::async_trait;

use crate::domain::foundation::{Timestamp, WorkspaceId};
use crate::domain::workspace::{Workspace, WorkspaceError};

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceStoreError {
    #[error("Workspace not found: {0}")]
    NotFound(WorkspaceId),

    /// The change itself failed; nothing was written.
    #[error(transparent)]
    Rejected(#[from] WorkspaceError),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A change applied to a workspace inside [`WorkspaceStore::update`].
pub type WorkspaceChange<'a> = Box<dyn FnOnce(&mut Workspace) -> Result<(), WorkspaceError> + Send + 'a>;

/// Port for saving and loading workspaces.
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// Saves the workspace, replacing any previous version.
    async fn save(&self, workspace: &Workspace) -> Result<(), WorkspaceStoreError>;

    /// Loads a workspace.
    ///
    /// # Errors
    ///
    /// `NotFound` when no workspace has the id.
    async fn load(&self, id: WorkspaceId) -> Result<Workspace, WorkspaceStoreError>;

    /// Loads a workspace or starts a fresh one with the given id.
    async fn load_or_create(&self, id: WorkspaceId) -> Result<Workspace, WorkspaceStoreError> {
        match self.load(id).await {
            Ok(workspace) => Ok(workspace),
            Err(WorkspaceStoreError::NotFound(_)) => Ok(Workspace::new(id)),
            Err(e) => Err(e),
        }
    }

    /// Applies `change` to the workspace with the given id, starting a fresh
    /// one when none exists, and stores the result. No other change to the
    /// same workspace can interleave.
    ///
    /// # Errors
    ///
    /// `Rejected` when the change fails; the stored workspace is untouched.
    async fn update<'a>(&'a self, id: WorkspaceId, change: WorkspaceChange<'a>) -> Result<Workspace, WorkspaceStoreError>;

    /// Drops workspaces last updated before `cutoff`, returning how many.
    async fn delete_idle_before(&self, cutoff: Timestamp) -> Result<usize, WorkspaceStoreError>;
}

impl dyn WorkspaceStore {
    /// Runs `change` through [`WorkspaceStore::update`] and hands back its
    /// output together with the stored workspace.
    pub async fn modify<T, F>(&self, id: WorkspaceId, change: F) -> Result<(T, Workspace), WorkspaceStoreError>
    where
        T: Send,
        F: FnOnce(&mut Workspace) -> Result<T, WorkspaceError> + Send,
    {
        let mut output = None;
        let workspace = self
            .update(
                id,
                Box::new(|workspace: &mut Workspace| {
                    output = Some(change(workspace)?);
                    Ok(())
                }),
            )
            .await?;
        match output {
            Some(output) => Ok((output, workspace)),
            None => Err(WorkspaceStoreError::Unavailable(format!(
                "workspace {} was stored without applying the change",
                id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_id() {
        let id = WorkspaceId::new();
        let err = WorkspaceStoreError::NotFound(id);
        assert_eq!(err.to_string(), format!("Workspace not found: {}", id));
    }

    #[test]
    fn rejected_change_displays_cause() {
        let err = WorkspaceStoreError::from(WorkspaceError::Validation(
            crate::domain::foundation::ValidationError::empty_field("name"),
        ));
        assert_eq!(err.to_string(), "Field 'name' cannot be empty");
    }
}
