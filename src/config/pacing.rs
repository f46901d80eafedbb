//! Pacing configuration
//!
//! Artificial delays before results are shown, so generated content feels
//! considered. Tests set everything to zero.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for any single delay.
pub const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PacingConfig {
    #[serde(default = "default_plan_delay")]
    pub plan_delay_ms: u64,

    #[serde(default = "default_suggestion_delay")]
    pub suggestion_delay_ms: u64,

    #[serde(default = "default_analysis_delay")]
    pub analysis_delay_ms: u64,
}

impl PacingConfig {
    /// No delays at all.
    pub fn immediate() -> Self {
        Self {
            plan_delay_ms: 0,
            suggestion_delay_ms: 0,
            analysis_delay_ms: 0,
        }
    }

    pub fn plan_delay(&self) -> Duration {
        Duration::from_millis(self.plan_delay_ms)
    }

    pub fn suggestion_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_delay_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let delays = [
            ("plan_delay_ms", self.plan_delay_ms),
            ("suggestion_delay_ms", self.suggestion_delay_ms),
            ("analysis_delay_ms", self.analysis_delay_ms),
        ];
        for (field, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(ValidationError::PacingTooLong {
                    field,
                    max_ms: MAX_DELAY_MS,
                });
            }
        }
        Ok(())
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            plan_delay_ms: default_plan_delay(),
            suggestion_delay_ms: default_suggestion_delay(),
            analysis_delay_ms: default_analysis_delay(),
        }
    }
}

fn default_plan_delay() -> u64 {
    2000
}

fn default_suggestion_delay() -> u64 {
    1500
}

fn default_analysis_delay() -> u64 {
    3000
}
