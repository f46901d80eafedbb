//! HTTP DTOs for location endpoints.

use serde::{Deserialize, Serialize};

/// A device position fix.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Reported accuracy radius; informational only.
    #[serde(default)]
    pub accuracy_meters: Option<f64>,
    /// Seconds since the fix was taken.
    #[serde(default)]
    pub position_age_secs: Option<u64>,
    #[serde(default)]
    pub workspace_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveLocationResponse {
    pub location: String,
}
