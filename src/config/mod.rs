//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STARTUP_PLANNER` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use startup_planner::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod features;
mod geocoding;
mod pacing;
mod randomness;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use geocoding::GeocodingConfig;
pub use pacing::{PacingConfig, MAX_DELAY_MS};
pub use randomness::RandomnessConfig;
pub use server::{Environment, ServerConfig};
pub use storage::{StorageConfig, MAX_IDLE_TTL_SECS};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Delays before plans, suggestions and market research are returned
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Reverse geocoding for "use my location"
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Optional fixed seed
    #[serde(default)]
    pub randomness: RandomnessConfig,

    /// Idle workspace eviction
    #[serde(default)]
    pub storage: StorageConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STARTUP_PLANNER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STARTUP_PLANNER__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `STARTUP_PLANNER__PACING__PLAN_DELAY_MS=0` -> `pacing.plan_delay_ms = 0`
    /// - `STARTUP_PLANNER__RANDOMNESS__SEED=42` -> `randomness.seed = Some(42)`
    /// - `STARTUP_PLANNER__STORAGE__IDLE_TTL_SECS=3600` -> `storage.idle_ttl_secs = 3600`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STARTUP_PLANNER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.pacing.validate()?;
        self.geocoding.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "STARTUP_PLANNER__SERVER__PORT",
        "STARTUP_PLANNER__SERVER__ENVIRONMENT",
        "STARTUP_PLANNER__PACING__PLAN_DELAY_MS",
        "STARTUP_PLANNER__RANDOMNESS__SEED",
        "STARTUP_PLANNER__GEOCODING__TIMEOUT_SECS",
        "STARTUP_PLANNER__STORAGE__IDLE_TTL_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.pacing, PacingConfig::default());
        assert_eq!(config.randomness.seed, None);
        assert_eq!(config.storage, StorageConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STARTUP_PLANNER__SERVER__PORT", "3000");
        env::set_var("STARTUP_PLANNER__PACING__PLAN_DELAY_MS", "0");
        env::set_var("STARTUP_PLANNER__RANDOMNESS__SEED", "42");
        env::set_var("STARTUP_PLANNER__STORAGE__IDLE_TTL_SECS", "3600");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.idle_ttl_secs, 3600);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.pacing.plan_delay_ms, 0);
        assert_eq!(config.randomness.seed, Some(42));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STARTUP_PLANNER__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_validate_reports_bad_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("STARTUP_PLANNER__GEOCODING__TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidGeocodingTimeout));
    }
}
