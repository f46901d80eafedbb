//! HTTP handlers for plan endpoints.

use axum::{
    extract::{Query, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::{parse_optional_workspace_id, AppState};
use crate::application::{GeneratePlanCommand, SuggestBusinessCommand};
use crate::ports::RenderOptions;

use super::dto::{GeneratePlanRequest, PlanResponse, RenderPlanQuery, SuggestBusinessRequest, SuggestionResponse};

/// Header carrying the workspace id on non-JSON responses.
pub const WORKSPACE_ID_HEADER: HeaderName = HeaderName::from_static("x-workspace-id");

fn to_command(state: &AppState, req: GeneratePlanRequest) -> Result<GeneratePlanCommand, ApiError> {
    let workspace_id = parse_optional_workspace_id(req.workspace_id.as_deref()).map_err(|e| state.fail(e))?;
    Ok(GeneratePlanCommand {
        business: req.business,
        location: req.location,
        workspace_id,
    })
}

/// POST /api/plans - Generate a business plan
pub async fn generate_plan(State(state): State<AppState>, Json(req): Json<GeneratePlanRequest>) -> Response {
    let cmd = match to_command(&state, req) {
        Ok(cmd) => cmd,
        Err(e) => return e.into_response(),
    };

    match state.generate_plan.handle(cmd).await {
        Ok(result) => {
            info!(workspace_id = %result.workspace_id, "Plan generated");
            let response = PlanResponse {
                workspace_id: result.workspace_id.to_string(),
                plan: result.plan,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => state.fail(e).into_response(),
    }
}

/// POST /api/plans/markdown - Generate a plan rendered as markdown
pub async fn generate_plan_markdown(
    State(state): State<AppState>,
    Query(query): Query<RenderPlanQuery>,
    Json(req): Json<GeneratePlanRequest>,
) -> Response {
    let cmd = match to_command(&state, req) {
        Ok(cmd) => cmd,
        Err(e) => return e.into_response(),
    };
    let options = if query.compact {
        RenderOptions::compact()
    } else {
        RenderOptions::default()
    };

    match state.render_plan.handle(cmd, options).await {
        Ok(result) => {
            let workspace_id = HeaderValue::from_str(&result.workspace_id.to_string());
            let mut response = (
                StatusCode::OK,
                [(header::CONTENT_TYPE, result.content_type)],
                result.document,
            )
                .into_response();
            if let Ok(value) = workspace_id {
                response.headers_mut().insert(WORKSPACE_ID_HEADER, value);
            }
            response
        }
        Err(e) => state.fail(e).into_response(),
    }
}

/// POST /api/suggestions - Suggest a business for a location
pub async fn suggest_business(
    State(state): State<AppState>,
    Json(req): Json<SuggestBusinessRequest>,
) -> Response {
    let workspace_id = match parse_optional_workspace_id(req.workspace_id.as_deref()) {
        Ok(id) => id,
        Err(e) => return state.fail(e).into_response(),
    };
    let cmd = SuggestBusinessCommand {
        location: req.location,
        workspace_id,
    };

    match state.suggest_business.handle(cmd).await {
        Ok(business) => (StatusCode::OK, Json(SuggestionResponse { business })).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}
