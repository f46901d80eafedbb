//! RegenerateNamesHandler - Draws a fresh set of business names.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::WorkspaceId;
use crate::domain::planning::{complete_names, generate_names};
use crate::domain::workspace::{Workspace, DEFAULT_NAME_BUSINESS, DEFAULT_NAME_LOCATION};
use crate::ports::{RandomProvider, WorkspaceStore, WorkspaceStoreError};

pub struct RegenerateNamesHandler {
    store: Arc<dyn WorkspaceStore>,
    random: Arc<dyn RandomProvider>,
}

impl RegenerateNamesHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>, random: Arc<dyn RandomProvider>) -> Self {
        Self { store, random }
    }

    /// Names for the workspace's last business, or for the defaults when no
    /// plan has been generated.
    pub async fn handle(&self, workspace_id: Option<WorkspaceId>) -> Result<Vec<String>, WorkspaceStoreError> {
        let workspace = match workspace_id {
            Some(id) => Some(self.store.load_or_create(id).await?),
            None => None,
        };
        let (business, location) = workspace
            .as_ref()
            .map(Workspace::name_inputs)
            .unwrap_or((DEFAULT_NAME_BUSINESS, DEFAULT_NAME_LOCATION));

        let names = {
            let mut rng = self.random.source();
            complete_names(generate_names(business, rng.as_mut()), business, location)
        };
        debug!(business, ?names, "Regenerated business names");
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::StdRandomProvider;
    use crate::adapters::storage::InMemoryWorkspaceStore;
    use crate::domain::planning::PlanRequest;

    fn handler(store: Arc<InMemoryWorkspaceStore>) -> RegenerateNamesHandler {
        RegenerateNamesHandler::new(store, Arc::new(StdRandomProvider::seeded(99)))
    }

    #[tokio::test]
    async fn uses_workspace_business() {
        let store = Arc::new(InMemoryWorkspaceStore::new());
        let mut ws = Workspace::new(WorkspaceId::new());
        ws.record_plan(&PlanRequest::new("Coffee Shop", "Seattle").unwrap());
        store.save(&ws).await.unwrap();

        let names = handler(store).handle(Some(ws.id())).await.unwrap();

        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|n| n.contains("Coffee")));
    }

    #[tokio::test]
    async fn falls_back_to_general_without_plan() {
        let names = handler(Arc::new(InMemoryWorkspaceStore::new()))
            .handle(None)
            .await
            .unwrap();

        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|n| n.contains("General")));
    }
}
