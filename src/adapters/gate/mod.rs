//! In-memory action gate.
//!
//! Held slots live in a shared set; each permit removes its key when
//! dropped. Single-process only.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::{ActionGate, ActionGateError, ActionKey, ActionPermit};

#[derive(Debug, Clone, Default)]
pub struct InMemoryActionGate {
    held: Arc<Mutex<HashSet<ActionKey>>>,
}

fn lock(held: &Mutex<HashSet<ActionKey>>) -> MutexGuard<'_, HashSet<ActionKey>> {
    // A panic while holding the lock leaves the set itself consistent.
    match held.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl InMemoryActionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently held.
    pub fn held_count(&self) -> usize {
        lock(&self.held).len()
    }
}

impl ActionGate for InMemoryActionGate {
    fn try_acquire(&self, key: ActionKey) -> Result<ActionPermit, ActionGateError> {
        if !lock(&self.held).insert(key.clone()) {
            return Err(ActionGateError::Busy(key));
        }
        let held = self.held.clone();
        let released = key.clone();
        Ok(ActionPermit::new(key, move || {
            lock(&held).remove(&released);
        }))
    }
}
