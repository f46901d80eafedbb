//! ResolveLocationHandler - Turns a device position into a location string.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::application::handlers::support::acquire_permit;
use crate::domain::foundation::{ValidationError, WorkspaceId};
use crate::ports::{ActionGate, ActionGateError, Coordinates, GatedAction, GeocodingError, ReverseGeocoder};

/// Shown whenever the position cannot be turned into a place.
pub const LOCATION_FAILURE_NOTICE: &str =
    "Unable to get your current location. Please enter it manually.";

#[derive(Debug, Clone)]
pub struct ResolveLocationCommand {
    pub latitude: f64,
    pub longitude: f64,
    /// Seconds since the device took the fix, when known.
    pub position_age_secs: Option<u64>,
    pub workspace_id: Option<WorkspaceId>,
}

#[derive(Debug, Error)]
pub enum ResolveLocationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Busy(#[from] ActionGateError),

    /// `reason` is for logs; users see the fixed notice.
    #[error("{}", LOCATION_FAILURE_NOTICE)]
    Unavailable { reason: String },
}

impl ResolveLocationError {
    fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable { reason: reason.into() }
    }
}

pub struct ResolveLocationHandler {
    geocoder: Arc<dyn ReverseGeocoder>,
    gate: Arc<dyn ActionGate>,
    timeout: Duration,
    max_position_age: Duration,
}

impl ResolveLocationHandler {
    pub fn new(
        geocoder: Arc<dyn ReverseGeocoder>,
        gate: Arc<dyn ActionGate>,
        timeout: Duration,
        max_position_age: Duration,
    ) -> Self {
        Self {
            geocoder,
            gate,
            timeout,
            max_position_age,
        }
    }

    /// Returns "City, Region" for the position.
    pub async fn handle(&self, cmd: ResolveLocationCommand) -> Result<String, ResolveLocationError> {
        let coordinates = Coordinates::new(cmd.latitude, cmd.longitude)?;
        let _permit = acquire_permit(self.gate.as_ref(), cmd.workspace_id, GatedAction::ResolveLocation)?;

        if let Some(age) = cmd.position_age_secs {
            if Duration::from_secs(age) > self.max_position_age {
                warn!(age_secs = age, "Rejected stale device position");
                return Err(ResolveLocationError::unavailable(format!("position is {}s old", age)));
            }
        }

        let lookup = tokio::time::timeout(self.timeout, self.geocoder.reverse(coordinates)).await;
        let place = match lookup {
            Ok(Ok(place)) => place,
            Ok(Err(e)) => {
                warn!(error = %e, "Reverse geocoding failed");
                return Err(ResolveLocationError::unavailable(e.to_string()));
            }
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Reverse geocoding timed out");
                return Err(ResolveLocationError::unavailable(GeocodingError::Timeout.to_string()));
            }
        };

        match place.display_name() {
            Some(location) => {
                debug!(%location, "Resolved current location");
                Ok(location)
            }
            None => {
                warn!(?place, "Geocoder returned no usable place name");
                Err(ResolveLocationError::unavailable("no place name in response"))
            }
        }
    }
}
