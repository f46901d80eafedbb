//! MarketingMaterialsHandler - Names, taglines and keywords for the last plan.

use std::sync::Arc;

use crate::domain::foundation::WorkspaceId;
use crate::domain::toolkit::MarketingMaterials;
use crate::ports::WorkspaceStore;

use super::WorkspaceToolError;

pub struct MarketingMaterialsHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl MarketingMaterialsHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, workspace_id: WorkspaceId) -> Result<MarketingMaterials, WorkspaceToolError> {
        let workspace = self.store.load_or_create(workspace_id).await?;
        Ok(workspace.marketing_materials())
    }
}
