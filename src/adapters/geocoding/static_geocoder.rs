//! Static Geocoder - Canned answers for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::{Coordinates, GeocodedPlace, GeocodingError, ReverseGeocoder};

/// Returns the same place (or error) for every lookup and counts calls.
#[derive(Debug, Clone)]
pub struct StaticGeocoder {
    response: Result<GeocodedPlace, GeocodingError>,
    calls: Arc<AtomicUsize>,
}

impl StaticGeocoder {
    pub fn returning(place: GeocodedPlace) -> Self {
        Self {
            response: Ok(place),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shortcut for a city/region pair.
    pub fn city(city: &str, region: &str) -> Self {
        Self::returning(GeocodedPlace {
            city: Some(city.to_string()),
            principal_subdivision: Some(region.to_string()),
            ..Default::default()
        })
    }

    pub fn failing(error: GeocodingError) -> Self {
        Self {
            response: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReverseGeocoder for StaticGeocoder {
    async fn reverse(&self, _coordinates: Coordinates) -> Result<GeocodedPlace, GeocodingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords() -> Coordinates {
        Coordinates::new(40.0, -105.0).unwrap()
    }

    #[tokio::test]
    async fn returns_configured_place() {
        let geocoder = StaticGeocoder::city("Boulder", "Colorado");
        let place = geocoder.reverse(coords()).await.unwrap();
        assert_eq!(place.display_name().as_deref(), Some("Boulder, Colorado"));
        assert_eq!(geocoder.call_count(), 1);
    }

    #[tokio::test]
    async fn returns_configured_error() {
        let geocoder = StaticGeocoder::failing(GeocodingError::Timeout);
        assert_eq!(geocoder.reverse(coords()).await, Err(GeocodingError::Timeout));
    }
}
