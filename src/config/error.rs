//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Pacing delay '{field}' exceeds {max_ms} ms")]
    PacingTooLong { field: &'static str, max_ms: u64 },

    #[error("Geocoding base URL must be http(s)")]
    InvalidGeocodingUrl,

    #[error("Geocoding timeout must be between 1 and 60 seconds")]
    InvalidGeocodingTimeout,

    #[error("Locality language cannot be empty")]
    MissingLocalityLanguage,

    #[error("Workspace idle TTL must be between 1 second and 30 days")]
    InvalidIdleTtl,

    #[error("Sweep interval must be positive and no longer than the idle TTL")]
    InvalidSweepInterval,
}
