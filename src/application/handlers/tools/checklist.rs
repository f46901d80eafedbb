//! ChecklistHandler - Research checklist view and toggle.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::WorkspaceId;
use crate::domain::toolkit::Checklist;
use crate::ports::WorkspaceStore;

use super::WorkspaceToolError;

pub struct ChecklistHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl ChecklistHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn view(&self, workspace_id: WorkspaceId) -> Result<Checklist, WorkspaceToolError> {
        let workspace = self.store.load_or_create(workspace_id).await?;
        Ok(workspace.checklist().clone())
    }

    /// Flips one item and returns the updated checklist.
    pub async fn toggle(&self, workspace_id: WorkspaceId, index: usize) -> Result<Checklist, WorkspaceToolError> {
        let (completed, workspace) = self
            .store
            .modify(workspace_id, |ws| ws.toggle_checklist(index))
            .await?;
        debug!(%workspace_id, index, completed, progress = %workspace.checklist().progress(), "Checklist toggled");
        Ok(workspace.checklist().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryWorkspaceStore;
    use crate::domain::workspace::WorkspaceError;

    #[tokio::test]
    async fn new_workspace_has_empty_checklist() {
        let handler = ChecklistHandler::new(Arc::new(InMemoryWorkspaceStore::new()));
        let checklist = handler.view(WorkspaceId::new()).await.unwrap();
        assert_eq!(checklist.items().len(), 5);
        assert_eq!(checklist.progress().value(), 0);
    }

    #[tokio::test]
    async fn toggle_persists_and_reports_progress() {
        let store = Arc::new(InMemoryWorkspaceStore::new());
        let handler = ChecklistHandler::new(store.clone());
        let id = WorkspaceId::new();

        handler.toggle(id, 0).await.unwrap();
        let checklist = handler.toggle(id, 3).await.unwrap();
        assert_eq!(checklist.progress().value(), 40);

        let checklist = handler.toggle(id, 0).await.unwrap();
        assert_eq!(checklist.completed_count(), 1);
        assert_eq!(handler.view(id).await.unwrap(), checklist);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_toggles_of_different_items_all_land() {
        let handler = Arc::new(ChecklistHandler::new(Arc::new(InMemoryWorkspaceStore::new())));
        let id = WorkspaceId::new();

        let tasks: Vec<_> = (0..5)
            .map(|index| {
                let handler = handler.clone();
                tokio::spawn(async move { handler.toggle(id, index).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(handler.view(id).await.unwrap().completed_count(), 5);
    }

    #[tokio::test]
    async fn out_of_range_index_is_rejected() {
        let handler = ChecklistHandler::new(Arc::new(InMemoryWorkspaceStore::new()));
        let err = handler.toggle(WorkspaceId::new(), 5).await.unwrap_err();
        assert!(matches!(err, WorkspaceToolError::Workspace(WorkspaceError::Validation(_))));
    }
}
