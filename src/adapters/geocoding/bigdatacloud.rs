//! BigDataCloud reverse geocoder over `reqwest`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = BigDataCloudConfig::default()
//!     .with_timeout(Duration::from_secs(5))
//!     .with_locality_language("de");
//!
//! let geocoder = BigDataCloudGeocoder::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::{Coordinates, GeocodedPlace, GeocodingError, ReverseGeocoder};

/// Free client-side endpoint; needs no API key.
pub const DEFAULT_BASE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Configuration for the BigDataCloud geocoder.
#[derive(Debug, Clone)]
pub struct BigDataCloudConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub locality_language: String,
}

impl Default for BigDataCloudConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            locality_language: "en".to_string(),
        }
    }
}

impl BigDataCloudConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_locality_language(mut self, language: impl Into<String>) -> Self {
        self.locality_language = language.into();
        self
    }
}

pub struct BigDataCloudGeocoder {
    config: BigDataCloudConfig,
    client: Client,
}

impl BigDataCloudGeocoder {
    /// # Errors
    ///
    /// `Network` when the HTTP client cannot be built.
    pub fn new(config: BigDataCloudConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeocodingError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &BigDataCloudConfig {
        &self.config
    }

    fn query(&self, coordinates: Coordinates) -> [(&'static str, String); 3] {
        [
            ("latitude", coordinates.latitude().to_string()),
            ("longitude", coordinates.longitude().to_string()),
            ("localityLanguage", self.config.locality_language.clone()),
        ]
    }
}

fn map_request_error(e: reqwest::Error) -> GeocodingError {
    if e.is_timeout() {
        GeocodingError::Timeout
    } else if e.is_connect() {
        GeocodingError::Network(format!("Connection failed: {}", e))
    } else {
        GeocodingError::Network(e.to_string())
    }
}

#[async_trait]
impl ReverseGeocoder for BigDataCloudGeocoder {
    async fn reverse(&self, coordinates: Coordinates) -> Result<GeocodedPlace, GeocodingError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.query(coordinates))
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Network(format!("Unexpected status {}", status)));
        }

        response
            .json::<GeocodedPlace>()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::MalformedPayload(e.to_string())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_client_endpoint() {
        let config = BigDataCloudConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.locality_language, "en");
    }

    #[test]
    fn builder_overrides_fields() {
        let config = BigDataCloudConfig::default()
            .with_base_url("http://localhost:9/geo")
            .with_timeout(Duration::from_millis(250))
            .with_locality_language("fr");
        assert_eq!(config.base_url, "http://localhost:9/geo");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.locality_language, "fr");
    }

    #[test]
    fn query_carries_coordinates_and_language() {
        let geocoder = BigDataCloudGeocoder::new(BigDataCloudConfig::default()).unwrap();
        let query = geocoder.query(Coordinates::new(30.25, -97.75).unwrap());
        assert_eq!(query[0], ("latitude", "30.25".to_string()));
        assert_eq!(query[1], ("longitude", "-97.75".to_string()));
        assert_eq!(query[2], ("localityLanguage", "en".to_string()));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let config = BigDataCloudConfig::default()
            .with_base_url("http://127.0.0.1:9/reverse")
            .with_timeout(Duration::from_secs(2));
        let geocoder = BigDataCloudGeocoder::new(config).unwrap();
        let result = geocoder.reverse(Coordinates::new(0.0, 0.0).unwrap()).await;
        assert!(matches!(
            result,
            Err(GeocodingError::Network(_)) | Err(GeocodingError::Timeout)
        ));
    }
}
