//! HTTP handlers for stateless tool endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::state::AppState;
use crate::application::handlers::tools::CopyNameCommand;
use crate::domain::toolkit::{FinancialInputs, NAMING_TIPS};

use super::dto::{CopyNameRequest, FinancialsResponse, NamingTipsResponse};

/// POST /api/tools/financials - Break-even calculator
pub async fn calculate_financials(
    State(state): State<AppState>,
    Json(inputs): Json<FinancialInputs>,
) -> Response {
    match state.financials.handle(inputs) {
        Ok(summary) => (StatusCode::OK, Json(FinancialsResponse::from(summary))).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}

/// GET /api/tools/naming-tips
pub async fn naming_tips() -> Json<NamingTipsResponse> {
    Json(NamingTipsResponse { tips: &NAMING_TIPS })
}

/// POST /api/tools/copy-name - Copy a business name
pub async fn copy_name(State(state): State<AppState>, Json(req): Json<CopyNameRequest>) -> Response {
    match state.copy_name.handle(CopyNameCommand { name: req.name }).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => state.fail(e).into_response(),
    }
}
