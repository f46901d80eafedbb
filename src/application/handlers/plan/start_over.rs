//! StartOverHandler - Resets the plan form for a workspace.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::WorkspaceId;
use crate::domain::workspace::Workspace;
use crate::ports::{WorkspaceStore, WorkspaceStoreError};

pub struct StartOverHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl StartOverHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    /// Resets the form. The workspace keeps its last request, checklist
    /// and competitors.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown workspace.
    pub async fn handle(&self, workspace_id: WorkspaceId) -> Result<Workspace, WorkspaceStoreError> {
        self.store.load(workspace_id).await?;
        let workspace = self
            .store
            .update(
                workspace_id,
                Box::new(|workspace: &mut Workspace| {
                    workspace.start_over();
                    Ok(())
                }),
            )
            .await?;
        debug!(%workspace_id, "Form reset");
        Ok(workspace)
    }
}
