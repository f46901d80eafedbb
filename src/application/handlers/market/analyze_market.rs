//! AnalyzeMarketHandler - Automated competitive research for the current plan.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::application::handlers::support::pace;
use crate::domain::foundation::WorkspaceId;
use crate::domain::market::{analyze_market, MarketAnalysis};
use crate::ports::{
    ActionGate, ActionGateError, ActionKey, GatedAction, RandomProvider, WorkspaceStore,
    WorkspaceStoreError,
};

/// Shown when research is requested before any plan exists.
pub const PLAN_REQUIRED_NOTICE: &str = "Please generate a business plan first to analyze the market.";

#[derive(Debug, Error)]
pub enum AnalyzeMarketError {
    #[error("{}", PLAN_REQUIRED_NOTICE)]
    PlanRequired,

    #[error(transparent)]
    Busy(#[from] ActionGateError),

    #[error(transparent)]
    Storage(WorkspaceStoreError),
}

impl From<WorkspaceStoreError> for AnalyzeMarketError {
    fn from(err: WorkspaceStoreError) -> Self {
        match err {
            WorkspaceStoreError::NotFound(_) => AnalyzeMarketError::PlanRequired,
            other => AnalyzeMarketError::Storage(other),
        }
    }
}

pub struct AnalyzeMarketHandler {
    store: Arc<dyn WorkspaceStore>,
    gate: Arc<dyn ActionGate>,
    random: Arc<dyn RandomProvider>,
    delay: Duration,
}

impl AnalyzeMarketHandler {
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

    pub async fn handle(&self, workspace_id: WorkspaceId) -> Result<MarketAnalysis, AnalyzeMarketError> {
        let workspace = self.store.load(workspace_id).await?;
        let context = workspace.plan_context().ok_or(AnalyzeMarketError::PlanRequired)?;
        let (business, location) = (context.business.to_string(), context.location.to_string());

        let _permit = self
            .gate
            .try_acquire(ActionKey::new(workspace_id, GatedAction::AnalyzeMarket))?;
        debug!(%workspace_id, %business, %location, "Running market analysis");
        pace(self.delay).await;

        let analysis = {
            let mut rng = self.random.source();
            analyze_market(&business, &location, rng.as_mut())
        };
        debug!(
            %workspace_id,
            grade = %analysis.competition_grade.grade,
            competitors = analysis.competitor_count,
            "Market analysis complete"
        );
        Ok(analysis)
    }
}
