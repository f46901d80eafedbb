//! Workspace storage configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest idle lifetime accepted for a workspace (30 days).
pub const MAX_IDLE_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// How long workspaces live without activity and how often they are swept.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Workspaces untouched for this long are dropped
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl_secs: u64,

    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl StorageConfig {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.idle_ttl_secs == 0 || self.idle_ttl_secs > MAX_IDLE_TTL_SECS {
            return Err(ValidationError::InvalidIdleTtl);
        }
        if self.sweep_interval_secs == 0 || self.sweep_interval_secs > self.idle_ttl_secs {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: default_idle_ttl(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_idle_ttl() -> u64 {
    24 * 60 * 60
}

fn default_sweep_interval() -> u64 {
    5 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.idle_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.sweep_interval(), Duration::from_secs(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let no_ttl = StorageConfig {
            idle_ttl_secs: 0,
            ..Default::default()
        };
        assert_eq!(no_ttl.validate(), Err(ValidationError::InvalidIdleTtl));

        let sweep_longer_than_ttl = StorageConfig {
            idle_ttl_secs: 60,
            sweep_interval_secs: 120,
        };
        assert_eq!(sweep_longer_than_ttl.validate(), Err(ValidationError::InvalidSweepInterval));
    }
}
