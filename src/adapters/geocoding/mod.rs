//! Geocoding adapters - Reverse geocoder implementations.

mod bigdatacloud;
mod static_geocoder;

pub use bigdatacloud::{BigDataCloudConfig, BigDataCloudGeocoder, DEFAULT_BASE_URL};
pub use static_geocoder::StaticGeocoder;
