//! In-Memory Workspace Store Adapter
//!
//! Keeps workspaces in a process-local map. Workspaces are transient, so
//! this is also the production store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{Timestamp, WorkspaceId};
use crate::domain::workspace::Workspace;
use crate::ports::{WorkspaceChange, WorkspaceStore, WorkspaceStoreError};

#[derive(Debug, Clone)]
pub struct InMemoryWorkspaceStore {
    workspaces: Arc<RwLock<HashMap<WorkspaceId, Workspace>>>,
}

impl InMemoryWorkspaceStore {
    pub fn new() -> Self {
        Self {
            workspaces: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored workspaces (useful for tests)
    pub async fn clear(&self) {
        self.workspaces.write().await.clear();
    }

    pub async fn count(&self) -> usize {
        self.workspaces.read().await.len()
    }
}

impl Default for InMemoryWorkspaceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkspaceStore for InMemoryWorkspaceStore {
    async fn save(&self, workspace: &Workspace) -> Result<(), WorkspaceStoreError> {
        let mut workspaces = self.workspaces.write().await;
        workspaces.insert(workspace.id(), workspace.clone());
        Ok(())
    }

    async fn load(&self, id: WorkspaceId) -> Result<Workspace, WorkspaceStoreError> {
        let workspaces = self.workspaces.read().await;
        workspaces
            .get(&id)
            .cloned()
            .ok_or(WorkspaceStoreError::NotFound(id))
    }

    async fn update<'a>(&'a self, id: WorkspaceId, change: WorkspaceChange<'a>) -> Result<Workspace, WorkspaceStoreError> {
        let mut workspaces = self.workspaces.write().await;
        let mut workspace = workspaces.get(&id).cloned().unwrap_or_else(|| Workspace::new(id));
        change(&mut workspace)?;
        workspaces.insert(id, workspace.clone());
        Ok(workspace)
    }

    async fn delete_idle_before(&self, cutoff: Timestamp) -> Result<usize, WorkspaceStoreError> {
        let mut workspaces = self.workspaces.write().await;
        let before = workspaces.len();
        workspaces.retain(|_, ws| ws.updated_at() >= cutoff);
        Ok(before - workspaces.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::planning::PlanRequest;
    use crate::domain::toolkit::NewCompetitor;

    #[tokio::test]
    async fn save_then_load_returns_workspace() {
        let store = InMemoryWorkspaceStore::new();
        let mut ws = Workspace::new(WorkspaceId::new());
        ws.record_plan(&PlanRequest::new("Bakery", "Portland").unwrap());

        store.save(&ws).await.unwrap();
        let loaded = store.load(ws.id()).await.unwrap();

        assert_eq!(loaded, ws);
    }

    #[tokio::test]
    async fn load_missing_is_not_found() {
        let store = InMemoryWorkspaceStore::new();
        let id = WorkspaceId::new();
        assert!(matches!(store.load(id).await, Err(WorkspaceStoreError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn load_or_create_starts_empty_workspace() {
        let store = InMemoryWorkspaceStore::new();
        let id = WorkspaceId::new();
        let ws = store.load_or_create(id).await.unwrap();
        assert_eq!(ws.id(), id);
        assert!(ws.plan_context().is_none());
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn save_replaces_previous_version() {
        let store = InMemoryWorkspaceStore::new();
        let mut ws = Workspace::new(WorkspaceId::new());
        store.save(&ws).await.unwrap();

        ws.toggle_checklist(0).unwrap();
        store.save(&ws).await.unwrap();

        assert_eq!(store.count().await, 1);
        assert_eq!(store.load(ws.id()).await.unwrap().checklist().completed_count(), 1);
    }

    #[tokio::test]
    async fn update_creates_missing_workspace() {
        let store = InMemoryWorkspaceStore::new();
        let id = WorkspaceId::new();

        let ws = store
            .update(id, Box::new(|ws: &mut Workspace| ws.toggle_checklist(1).map(|_| ())))
            .await
            .unwrap();

        assert_eq!(ws.checklist().completed_count(), 1);
        assert_eq!(store.load(id).await.unwrap(), ws);
    }

    #[tokio::test]
    async fn failed_update_leaves_workspace_untouched() {
        let store = InMemoryWorkspaceStore::new();
        let mut ws = Workspace::new(WorkspaceId::new());
        ws.toggle_checklist(0).unwrap();
        store.save(&ws).await.unwrap();

        let result = store
            .update(
                ws.id(),
                Box::new(|ws: &mut Workspace| {
                    ws.toggle_checklist(0)?;
                    ws.toggle_checklist(99).map(|_| ())
                }),
            )
            .await;

        assert!(matches!(result, Err(WorkspaceStoreError::Rejected(_))));
        assert_eq!(store.load(ws.id()).await.unwrap().checklist().completed_count(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_updates_are_all_kept() {
        let store: Arc<dyn WorkspaceStore> = Arc::new(InMemoryWorkspaceStore::new());
        let id = WorkspaceId::new();

        let tasks: Vec<_> = (0..200)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .modify(id, move |ws| {
                            ws.add_competitor(NewCompetitor {
                                name: format!("Rival {}", i),
                                location: "Portland".to_string(),
                                ..Default::default()
                            })
                            .map(|c| c.id)
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.load(id).await.unwrap().competitors().len(), 200);
    }

    #[tokio::test]
    async fn idle_workspaces_are_deleted() {
        let store = InMemoryWorkspaceStore::new();
        let idle = Workspace::new(WorkspaceId::new());
        store.save(&idle).await.unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let cutoff = Timestamp::now();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let active = store
            .update(WorkspaceId::new(), Box::new(|_: &mut Workspace| Ok(())))
            .await
            .unwrap();

        assert_eq!(store.delete_idle_before(cutoff).await.unwrap(), 1);
        assert!(matches!(store.load(idle.id()).await, Err(WorkspaceStoreError::NotFound(_))));
        assert!(store.load(active.id()).await.is_ok());
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = InMemoryWorkspaceStore::new();
        store.save(&Workspace::new(WorkspaceId::new())).await.unwrap();
        store.clear().await;
        assert_eq!(store.count().await, 0);
    }
}
