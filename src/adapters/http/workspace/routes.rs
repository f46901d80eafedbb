//! HTTP routes for workspace endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    add_competitor, analyze_market, competitor_insights, get_checklist, list_competitors,
    marketing_materials, regenerate_names, remove_competitor, start_over, toggle_checklist_item,
};

pub fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route("/workspaces/:id/names", post(regenerate_names))
        .route("/workspaces/:id/start-over", post(start_over))
        .route("/workspaces/:id/market-analysis", post(analyze_market))
        .route("/workspaces/:id/checklist", get(get_checklist))
        .route("/workspaces/:id/checklist/:index", post(toggle_checklist_item))
        .route("/workspaces/:id/competitors", get(list_competitors).post(add_competitor))
        .route("/workspaces/:id/competitors/insights", get(competitor_insights))
        .route("/workspaces/:id/competitors/:competitor_id", delete(remove_competitor))
        .route("/workspaces/:id/marketing-materials", get(marketing_materials))
}
