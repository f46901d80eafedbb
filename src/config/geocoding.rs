//! Geocoding configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Reverse geocoding (current location lookup) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingConfig {
    /// Endpoint receiving `latitude`, `longitude` and `localityLanguage`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Oldest device position accepted, in seconds
    #[serde(default = "default_max_position_age")]
    pub max_position_age_secs: u64,

    #[serde(default = "default_locality_language")]
    pub locality_language: String,
}

impl GeocodingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn max_position_age(&self) -> Duration {
        Duration::from_secs(self.max_position_age_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidGeocodingUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidGeocodingTimeout);
        }
        if self.locality_language.trim().is_empty() {
            return Err(ValidationError::MissingLocalityLanguage);
        }
        Ok(())
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_position_age_secs: default_max_position_age(),
            locality_language: default_locality_language(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.bigdatacloud.net/data/reverse-geocode-client".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_max_position_age() -> u64 {
    300
}

fn default_locality_language() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_defaults() {
        let config = GeocodingConfig::default();
        assert!(config.base_url.contains("bigdatacloud"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.max_position_age(), Duration::from_secs(300));
        assert_eq!(config.locality_language, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_url = GeocodingConfig {
            base_url: "ftp://geo".to_string(),
            ..Default::default()
        };
        assert_eq!(bad_url.validate(), Err(ValidationError::InvalidGeocodingUrl));

        let bad_timeout = GeocodingConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(bad_timeout.validate(), Err(ValidationError::InvalidGeocodingTimeout));

        let no_language = GeocodingConfig {
            locality_language: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(no_language.validate(), Err(ValidationError::MissingLocalityLanguage));
    }
}
