//! Randomness configuration

use serde::Deserialize;

/// Set `seed` for reproducible names and market research.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RandomnessConfig {
    #[serde(default)]
    pub seed: Option<u64>,
}
