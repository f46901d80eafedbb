//! Action gate port for rejecting duplicate submissions.
//!
//! Each user action (plan generation, suggestion, location lookup, market
//! analysis) may run at most once at a time per workspace. A handler
//! acquires an [`ActionPermit`] before starting and holds it until the
//! work is done; dropping the permit releases the slot, so success, error
//! and cancellation all free it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A gated user action.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatedAction {
    GeneratePlan,
    SuggestBusiness,
    ResolveLocation,
    AnalyzeMarket,
}

impl GatedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatedAction::GeneratePlan => "generate_plan",
            GatedAction::SuggestBusiness => "suggest_business",
            GatedAction::ResolveLocation => "resolve_location",
            GatedAction::AnalyzeMarket => "analyze_market",
        }
    }
}

impl fmt::Display for GatedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifies one action slot.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct ActionKey {
    /// Usually the workspace id.
    pub scope: String,
    pub action: GatedAction,
}

impl ActionKey {
    pub fn new(scope: impl fmt::Display, action: GatedAction) -> Self {
        Self {
            scope: scope.to_string(),
            action,
        }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scope, self.action)
    }
}

/// Holds an action slot until dropped.
pub struct ActionPermit {
    key: ActionKey,
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ActionPermit {
    /// Creates a permit that runs `release` when dropped.
    pub fn new(key: ActionKey, release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            key,
            release: Some(Box::new(release)),
        }
    }

    /// A permit that guards nothing.
    pub fn unguarded(key: ActionKey) -> Self {
        Self { key, release: None }
    }

    pub fn key(&self) -> &ActionKey {
        &self.key
    }
}

impl fmt::Debug for ActionPermit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionPermit").field("key", &self.key).finish()
    }
}

impl Drop for ActionPermit {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Errors from the action gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionGateError {
    #[error("action already in progress: {0}")]
    Busy(ActionKey),
}

/// Port handing out action permits.
pub trait ActionGate: Send + Sync {
    /// Takes the slot for `key`, failing if it is already held.
    fn try_acquire(&self, key: ActionKey) -> Result<ActionPermit, ActionGateError>;
}
