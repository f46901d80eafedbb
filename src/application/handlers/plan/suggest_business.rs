//! SuggestBusinessHandler - Picks a business idea that suits a location.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::application::handlers::support::{acquire_permit, pace};
use crate::domain::foundation::{ValidationError, WorkspaceId};
use crate::domain::planning::suggest_business;
use crate::ports::{ActionGate, ActionGateError, GatedAction, RandomProvider};

#[derive(Debug, Clone)]
pub struct SuggestBusinessCommand {
    pub location: String,
    pub workspace_id: Option<WorkspaceId>,
}

#[derive(Debug, Error)]
pub enum SuggestBusinessError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Busy(#[from] ActionGateError),
}

pub struct SuggestBusinessHandler {
    gate: Arc<dyn ActionGate>,
    random: Arc<dyn RandomProvider>,
    delay: Duration,
}

impl SuggestBusinessHandler {
    pub fn new(gate: Arc<dyn ActionGate>, random: Arc<dyn RandomProvider>, delay: Duration) -> Self {
        Self { gate, random, delay }
    }

    /// Returns one suggested business type.
    pub async fn handle(&self, cmd: SuggestBusinessCommand) -> Result<String, SuggestBusinessError> {
        let location = cmd.location.trim();
        if location.is_empty() {
            return Err(ValidationError::empty_field("location").into());
        }
        let _permit = acquire_permit(self.gate.as_ref(), cmd.workspace_id, GatedAction::SuggestBusiness)?;

        pace(self.delay).await;
        let suggestion = {
            let mut rng = self.random.source();
            suggest_business(location, rng.as_mut())?
        };
        debug!(location, suggestion = %suggestion, "Suggested business");
        Ok(suggestion)
    }
}
