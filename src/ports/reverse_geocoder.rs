//! Reverse Geocoder Port - Coordinates to a human-readable place.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// # Errors
    ///
    /// `OutOfRange` for latitude outside ±90 or longitude outside ±180.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::out_of_range("latitude", -90.0, 90.0, latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::out_of_range("longitude", -180.0, 180.0, longitude));
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Place fields returned by a geocoder. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedPlace {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub principal_subdivision: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl GeocodedPlace {
    /// "City, Region", preferring city over locality and region over
    /// country. `None` when either half is missing.
    pub fn display_name(&self) -> Option<String> {
        let place = present(&self.city).or_else(|| present(&self.locality))?;
        let region = present(&self.principal_subdivision).or_else(|| present(&self.country_name))?;
        Some(format!("{}, {}", place, region))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocodingError {
    #[error("geocoding request failed: {0}")]
    Network(String),

    #[error("geocoding request timed out")]
    Timeout,

    #[error("geocoding response was malformed: {0}")]
    MalformedPayload(String),
}

/// Port for reverse geocoding.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Looks up the place at the given coordinates.
    async fn reverse(&self, coordinates: Coordinates) -> Result<GeocodedPlace, GeocodingError>;
}
