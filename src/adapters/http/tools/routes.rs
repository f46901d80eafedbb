//! HTTP routes for stateless tool endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{calculate_financials, copy_name, naming_tips};

pub fn tools_routes() -> Router<AppState> {
    Router::new()
        .route("/tools/financials", post(calculate_financials))
        .route("/tools/naming-tips", get(naming_tips))
        .route("/tools/copy-name", post(copy_name))
}
