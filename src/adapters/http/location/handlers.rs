//! HTTP handlers for location endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::adapters::http::state::{parse_optional_workspace_id, AppState};
use crate::application::ResolveLocationCommand;

use super::dto::{ResolveLocationRequest, ResolveLocationResponse};

/// POST /api/location/resolve - Reverse geocode a position fix
pub async fn resolve_location(
    State(state): State<AppState>,
    Json(req): Json<ResolveLocationRequest>,
) -> Response {
    let workspace_id = match parse_optional_workspace_id(req.workspace_id.as_deref()) {
        Ok(id) => id,
        Err(e) => return state.fail(e).into_response(),
    };
    debug!(accuracy_meters = ?req.accuracy_meters, "Resolving position fix");
    let cmd = ResolveLocationCommand {
        latitude: req.latitude,
        longitude: req.longitude,
        position_age_secs: req.position_age_secs,
        workspace_id,
    };

    match state.resolve_location.handle(cmd).await {
        Ok(location) => (StatusCode::OK, Json(ResolveLocationResponse { location })).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}
