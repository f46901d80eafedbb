//! HTTP routes for plan endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{generate_plan, generate_plan_markdown, suggest_business};

/// Plan routes; the markdown export is only mounted when enabled.
pub fn plan_routes(markdown_export: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/plans", post(generate_plan))
        .route("/suggestions", post(suggest_business));

    if markdown_export {
        router.route("/plans/markdown", post(generate_plan_markdown))
    } else {
        router
    }
}
