//! WorkspaceSweeper - Background eviction of idle workspaces.
//!
//! Workspaces are created on demand and only live in memory, so anything a
//! client stops touching must eventually go. The sweeper wakes every
//! `sweep_interval` and deletes workspaces whose `updated_at` is older than
//! `idle_ttl`.
//!
//! ## Graceful Shutdown
//!
//! The loop exits as soon as the shutdown channel flips to `true`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{debug, warn};

use crate::config::StorageConfig;
use crate::domain::foundation::Timestamp;
use crate::ports::{WorkspaceStore, WorkspaceStoreError};

pub struct WorkspaceSweeper {
    store: Arc<dyn WorkspaceStore>,
    idle_ttl: Duration,
    sweep_interval: Duration,
}

impl WorkspaceSweeper {
    pub fn new(store: Arc<dyn WorkspaceStore>, config: &StorageConfig) -> Self {
        Self {
            store,
            idle_ttl: config.idle_ttl(),
            sweep_interval: config.sweep_interval(),
        }
    }

    /// Sweeps on every interval tick until shutdown is signalled.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.sweep_interval);
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        debug!("Workspace sweeper stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    if let Err(e) = self.sweep_once().await {
                        warn!(error = %e, "Workspace sweep failed");
                    }
                }
            }
        }
    }

    /// Deletes workspaces idle for longer than the TTL.
    pub async fn sweep_once(&self) -> Result<usize, WorkspaceStoreError> {
        let cutoff = Timestamp::now().earlier_by(self.idle_ttl);
        let evicted = self.store.delete_idle_before(cutoff).await?;
        if evicted > 0 {
            debug!(evicted, %cutoff, "Evicted idle workspaces");
        }
        Ok(evicted)
    }
}
