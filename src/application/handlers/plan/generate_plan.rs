//! GeneratePlanHandler - Command handler for submitting the plan form.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error};

use crate::application::handlers::support::pace;
use crate::domain::foundation::{ValidationError, WorkspaceId};
use crate::domain::planning::{assemble_plan, PlanContent, PlanRequest};
use crate::domain::workspace::Workspace;
use crate::ports::{
    ActionGate, ActionGateError, ActionKey, GatedAction, RandomProvider, WorkspaceStore,
    WorkspaceStoreError,
};

/// Shown to the user when a plan could not be produced.
pub const GENERATION_FAILURE_NOTICE: &str =
    "Sorry, there was an error generating your business plan. Please try again.";

/// Command to generate a business plan.
#[derive(Debug, Clone)]
pub struct GeneratePlanCommand {
    pub business: String,
    pub location: String,
    /// Existing workspace to update; a new one is created when absent.
    pub workspace_id: Option<WorkspaceId>,
}

/// Result of successful plan generation.
#[derive(Debug, Clone)]
pub struct GeneratePlanResult {
    pub workspace_id: WorkspaceId,
    pub plan: PlanContent,
}

#[derive(Debug, Error)]
pub enum GeneratePlanError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Busy(#[from] ActionGateError),

    #[error("{}", GENERATION_FAILURE_NOTICE)]
    Storage(#[from] WorkspaceStoreError),
}

/// Handler for generating business plans.
pub struct GeneratePlanHandler {
    store: Arc<dyn WorkspaceStore>,
    gate: Arc<dyn ActionGate>,
    random: Arc<dyn RandomProvider>,
    delay: Duration,
}

impl GeneratePlanHandler {
    pub fn new(
        store: Arc<dyn WorkspaceStore>,
        gate: Arc<dyn ActionGate>,
        random: Arc<dyn RandomProvider>,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            gate,
            random,
            delay,
        }
    }

    pub async fn handle(&self, cmd: GeneratePlanCommand) -> Result<GeneratePlanResult, GeneratePlanError> {
        // 1. Validate form input
        let request = PlanRequest::new(&cmd.business, &cmd.location)?;

        // 2. One generation per workspace at a time
        let workspace_id = cmd.workspace_id.unwrap_or_default();
        let _permit = self
            .gate
            .try_acquire(ActionKey::new(workspace_id, GatedAction::GeneratePlan))?;

        debug!(
            business = request.business(),
            location = request.location(),
            %workspace_id,
            "Generating business plan"
        );
        pace(self.delay).await;

        // 3. Assemble
        let plan = {
            let mut rng = self.random.source();
            assemble_plan(&request, rng.as_mut())
        };

        // 4. Remember the request for the tools
        let recorded = self
            .store
            .update(
                workspace_id,
                Box::new(|workspace: &mut Workspace| {
                    workspace.record_plan(&request);
                    Ok(())
                }),
            )
            .await;
        if let Err(e) = recorded {
            error!(%workspace_id, error = %e, "Failed to save workspace after plan generation");
            return Err(e.into());
        }

        debug!(%workspace_id, category = ?plan.category, names = ?plan.business_names, "Plan generated");
        Ok(GeneratePlanResult { workspace_id, plan })
    }
}
