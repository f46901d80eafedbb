//! HTTP routes for location endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::resolve_location;

pub fn location_routes() -> Router<AppState> {
    Router::new().route("/location/resolve", post(resolve_location))
}
