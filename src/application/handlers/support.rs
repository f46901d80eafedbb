//! Helpers shared by the handlers.

use std::time::Duration;

use crate::domain::foundation::WorkspaceId;
use crate::ports::{ActionGate, ActionGateError, ActionKey, ActionPermit, GatedAction};

/// Waits out a pacing delay. Zero returns immediately.
pub(crate) async fn pace(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Takes the action slot for a workspace. Requests without a workspace
/// have nothing to collide with and get an unguarded permit.
pub(crate) fn acquire_permit(
    gate: &dyn ActionGate,
    workspace_id: Option<WorkspaceId>,
    action: GatedAction,
) -> Result<ActionPermit, ActionGateError> {
    match workspace_id {
        Some(id) => gate.try_acquire(ActionKey::new(id, action)),
        None => Ok(ActionPermit::unguarded(ActionKey::new("anonymous", action))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gate::InMemoryActionGate;

    #[test]
    fn anonymous_requests_never_collide() {
        let gate = InMemoryActionGate::new();
        let _a = acquire_permit(&gate, None, GatedAction::SuggestBusiness).unwrap();
        let _b = acquire_permit(&gate, None, GatedAction::SuggestBusiness).unwrap();
        assert_eq!(gate.held_count(), 0);
    }

    #[test]
    fn workspace_requests_are_gated() {
        let gate = InMemoryActionGate::new();
        let id = WorkspaceId::new();
        let _a = acquire_permit(&gate, Some(id), GatedAction::SuggestBusiness).unwrap();
        assert!(acquire_permit(&gate, Some(id), GatedAction::SuggestBusiness).is_err());
    }

    #[tokio::test]
    async fn zero_pace_returns_immediately() {
        let started = std::time::Instant::now();
        pace(Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
