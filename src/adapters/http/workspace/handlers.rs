//! HTTP handlers for workspace endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::adapters::http::state::{parse_competitor_id, parse_workspace_id, AppState};
use crate::domain::foundation::ValidationError;
use crate::domain::toolkit::NewCompetitor;

use super::dto::{ChecklistResponse, CompetitorListResponse, InsightsResponse, NamesResponse, WorkspaceResponse};

macro_rules! workspace_id_or_return {
    ($state:expr, $raw:expr) => {
        match parse_workspace_id(&$raw) {
            Ok(id) => id,
            Err(e) => return $state.fail(e).into_response(),
        }
    };
}

// ════════════════════════════════════════════════════════════════════════════
// Plan state
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/workspaces/:id/names - Draw a fresh set of names
pub async fn regenerate_names(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);

    match state.regenerate_names.handle(Some(workspace_id)).await {
        Ok(names) => (StatusCode::OK, Json(NamesResponse { names })).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}

/// POST /api/workspaces/:id/start-over - Reset the plan form
pub async fn start_over(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);

    match state.start_over.handle(workspace_id).await {
        Ok(workspace) => {
            info!(%workspace_id, "Plan form reset");
            (StatusCode::OK, Json(WorkspaceResponse::from(&workspace))).into_response()
        }
        Err(e) => state.fail(e).into_response(),
    }
}

/// POST /api/workspaces/:id/market-analysis - Run automated market research
pub async fn analyze_market(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);

    match state.analyze_market.handle(workspace_id).await {
        Ok(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Checklist
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/workspaces/:id/checklist
pub async fn get_checklist(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);

    match state.checklist.view(workspace_id).await {
        Ok(checklist) => (StatusCode::OK, Json(ChecklistResponse::from(checklist))).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}

/// POST /api/workspaces/:id/checklist/:index - Toggle one item
pub async fn toggle_checklist_item(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, String)>,
) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);
    let index = match index.parse::<usize>() {
        Ok(index) => index,
        Err(_) => {
            return state
                .fail(ValidationError::invalid_format("index", "must be a non-negative integer"))
                .into_response()
        }
    };

    match state.checklist.toggle(workspace_id, index).await {
        Ok(checklist) => (StatusCode::OK, Json(ChecklistResponse::from(checklist))).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Competitors
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/workspaces/:id/competitors
pub async fn list_competitors(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);

    match state.competitors.list(workspace_id).await {
        Ok(competitors) => (StatusCode::OK, Json(CompetitorListResponse { competitors })).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}

/// POST /api/workspaces/:id/competitors - Add a competitor
pub async fn add_competitor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<NewCompetitor>,
) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);

    match state.competitors.add(workspace_id, input).await {
        Ok(competitor) => (StatusCode::CREATED, Json(competitor)).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}

/// DELETE /api/workspaces/:id/competitors/:competitor_id
pub async fn remove_competitor(
    State(state): State<AppState>,
    Path((id, competitor_id)): Path<(String, String)>,
) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);
    let competitor_id = match parse_competitor_id(&competitor_id) {
        Ok(id) => id,
        Err(e) => return state.fail(e).into_response(),
    };

    match state.competitors.remove(workspace_id, competitor_id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}

/// GET /api/workspaces/:id/competitors/insights
pub async fn competitor_insights(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);

    match state.competitors.insights(workspace_id).await {
        Ok(insights) => (StatusCode::OK, Json(InsightsResponse { insights })).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Marketing
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/workspaces/:id/marketing-materials
pub async fn marketing_materials(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let workspace_id = workspace_id_or_return!(state, id);

    match state.marketing.handle(workspace_id).await {
        Ok(materials) => (StatusCode::OK, Json(materials)).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}
