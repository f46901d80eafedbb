//! CompetitorsHandler - Manual competitor research.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{CompetitorId, WorkspaceId};
use crate::domain::toolkit::{CompetitiveInsights, Competitor, NewCompetitor};
use crate::ports::WorkspaceStore;

use super::WorkspaceToolError;

pub struct CompetitorsHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl CompetitorsHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, workspace_id: WorkspaceId) -> Result<Vec<Competitor>, WorkspaceToolError> {
        let workspace = self.store.load_or_create(workspace_id).await?;
        Ok(workspace.competitors().to_vec())
    }

    pub async fn add(&self, workspace_id: WorkspaceId, input: NewCompetitor) -> Result<Competitor, WorkspaceToolError> {
        let (competitor, _) = self
            .store
            .modify(workspace_id, |ws| ws.add_competitor(input).cloned())
            .await?;
        debug!(%workspace_id, competitor = %competitor.name, "Competitor added");
        Ok(competitor)
    }

    pub async fn remove(
        &self,
        workspace_id: WorkspaceId,
        competitor_id: CompetitorId,
    ) -> Result<Competitor, WorkspaceToolError> {
        let (removed, _) = self
            .store
            .modify(workspace_id, |ws| ws.remove_competitor(competitor_id))
            .await?;
        debug!(%workspace_id, %competitor_id, "Competitor removed");
        Ok(removed)
    }

    /// Insights over the list; `None` when no competitors have been added.
    ///
    /// # Errors
    ///
    /// `PlanRequired` before a plan has been generated. Insights quote the
    /// plan's location, so they are withheld until one exists.
    pub async fn insights(&self, workspace_id: WorkspaceId) -> Result<Option<CompetitiveInsights>, WorkspaceToolError> {
        let workspace = self.store.load_or_create(workspace_id).await?;
        if workspace.plan_context().is_none() {
            return Err(WorkspaceToolError::PlanRequired);
        }
        Ok(workspace.competitive_insights())
    }
}
