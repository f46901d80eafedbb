//! API error mapping.
//!
//! Every handler error becomes an [`ApiError`] with a JSON body
//! `{ code, message, details? }`. Internal failures are logged here and
//! carry their cause in `details.reason`, which is stripped unless verbose
//! errors are enabled.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::application::handlers::location::{ResolveLocationError, LOCATION_FAILURE_NOTICE};
use crate::application::handlers::market::{AnalyzeMarketError, PLAN_REQUIRED_NOTICE};
use crate::application::handlers::plan::{
    GeneratePlanError, RenderPlanError, SuggestBusinessError, GENERATION_FAILURE_NOTICE,
};
use crate::application::handlers::tools::WorkspaceToolError;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::workspace::WorkspaceError;
use crate::ports::{ActionGateError, WorkspaceStoreError};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                code: code.to_string(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.body.details = Some(details);
        self
    }

    fn with_reason(self, reason: impl Into<String>) -> Self {
        self.with_details(serde_json::json!({ "reason": reason.into() }))
    }

    pub fn not_found(code: ErrorCode, resource: &str, id: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, format!("{} not found: {}", resource, id))
    }

    pub fn plan_required(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ErrorCode::PlanRequired, message)
    }

    pub fn internal(code: ErrorCode, message: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let reason = reason.to_string();
        error!(%code, %reason, "Request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, code, message).with_reason(reason)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }

    /// Drops internal reasons from server-side failures.
    pub fn redacted(mut self) -> Self {
        if self.status.is_server_error() {
            self.body.details = None;
        }
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, ErrorCode::ValidationFailed, err.to_string()).with_details(
            serde_json::json!({ "field": err.field(), "kind": ErrorCode::from(&err).to_string() }),
        )
    }
}

impl From<ActionGateError> for ApiError {
    fn from(err: ActionGateError) -> Self {
        ApiError::new(
            StatusCode::CONFLICT,
            ErrorCode::ActionInProgress,
            "This action is already in progress. Please wait for it to finish.",
        )
        .with_reason(err.to_string())
    }
}

impl From<WorkspaceStoreError> for ApiError {
    fn from(err: WorkspaceStoreError) -> Self {
        match err {
            WorkspaceStoreError::NotFound(id) => ApiError::not_found(ErrorCode::WorkspaceNotFound, "Workspace", id),
            WorkspaceStoreError::Rejected(w) => w.into(),
            other => ApiError::internal(ErrorCode::StorageError, "Workspace storage is unavailable", other),
        }
    }
}

impl From<WorkspaceError> for ApiError {
    fn from(err: WorkspaceError) -> Self {
        match err {
            WorkspaceError::Validation(v) => v.into(),
            WorkspaceError::CompetitorNotFound(id) => {
                ApiError::not_found(ErrorCode::CompetitorNotFound, "Competitor", id)
            }
        }
    }
}

impl From<GeneratePlanError> for ApiError {
    fn from(err: GeneratePlanError) -> Self {
        match err {
            GeneratePlanError::Validation(v) => v.into(),
            GeneratePlanError::Busy(b) => b.into(),
            GeneratePlanError::Storage(s) => {
                ApiError::internal(ErrorCode::GenerationFailed, GENERATION_FAILURE_NOTICE, s)
            }
        }
    }
}

impl From<RenderPlanError> for ApiError {
    fn from(err: RenderPlanError) -> Self {
        match err {
            RenderPlanError::Generate(g) => g.into(),
            RenderPlanError::Render(r) => {
                ApiError::internal(ErrorCode::GenerationFailed, GENERATION_FAILURE_NOTICE, r)
            }
        }
    }
}

impl From<SuggestBusinessError> for ApiError {
    fn from(err: SuggestBusinessError) -> Self {
        match err {
            SuggestBusinessError::Validation(v) => v.into(),
            SuggestBusinessError::Busy(b) => b.into(),
        }
    }
}

impl From<ResolveLocationError> for ApiError {
    fn from(err: ResolveLocationError) -> Self {
        match err {
            ResolveLocationError::Validation(v) => v.into(),
            ResolveLocationError::Busy(b) => b.into(),
            ResolveLocationError::Unavailable { reason } => {
                ApiError::new(StatusCode::BAD_GATEWAY, ErrorCode::LocationUnavailable, LOCATION_FAILURE_NOTICE)
                    .with_reason(reason)
            }
        }
    }
}

impl From<AnalyzeMarketError> for ApiError {
    fn from(err: AnalyzeMarketError) -> Self {
        match err {
            AnalyzeMarketError::PlanRequired => ApiError::plan_required(PLAN_REQUIRED_NOTICE),
            AnalyzeMarketError::Busy(b) => b.into(),
            AnalyzeMarketError::Storage(s) => s.into(),
        }
    }
}

impl From<WorkspaceToolError> for ApiError {
    fn from(err: WorkspaceToolError) -> Self {
        match err {
            WorkspaceToolError::Workspace(w) => w.into(),
            WorkspaceToolError::Storage(s) => s.into(),
            WorkspaceToolError::PlanRequired => {
                ApiError::plan_required(WorkspaceToolError::PlanRequired.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::WorkspaceId;
    use crate::ports::{ActionKey, GatedAction};

    #[test]
    fn validation_maps_to_400_with_field() {
        let err = ApiError::from(ValidationError::empty_field("business"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().code, "VALIDATION_FAILED");
        assert_eq!(err.body().details.as_ref().unwrap()["field"], "business");
    }

    #[test]
    fn busy_maps_to_409() {
        let key = ActionKey::new("ws", GatedAction::GeneratePlan);
        let err = ApiError::from(ActionGateError::Busy(key));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.body().code, "ACTION_IN_PROGRESS");
    }

    #[test]
    fn plan_required_maps_to_409() {
        let err = ApiError::from(AnalyzeMarketError::PlanRequired);
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.body().code, "PLAN_REQUIRED");
        assert_eq!(err.body().message, "Please generate a business plan first to analyze the market.");
    }

    #[test]
    fn location_failure_maps_to_502_with_notice() {
        let err = ApiError::from(ResolveLocationError::Unavailable {
            reason: "timeout".to_string(),
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.body().code, "LOCATION_UNAVAILABLE");
        assert_eq!(err.body().message, LOCATION_FAILURE_NOTICE);
    }

    #[test]
    fn storage_failure_during_generation_maps_to_500_notice() {
        let err = ApiError::from(GeneratePlanError::Storage(WorkspaceStoreError::Unavailable(
            "disk".to_string(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().code, "GENERATION_FAILED");
        assert_eq!(err.body().message, GENERATION_FAILURE_NOTICE);
        assert!(err.body().details.is_some());
        assert!(err.redacted().body().details.is_none());
    }

    #[test]
    fn redaction_keeps_client_error_details() {
        let err = ApiError::from(ValidationError::empty_field("location")).redacted();
        assert!(err.body().details.is_some());
    }

    #[test]
    fn rejected_change_maps_like_the_workspace_error() {
        let err = ApiError::from(WorkspaceStoreError::Rejected(WorkspaceError::Validation(
            ValidationError::empty_field("name"),
        )));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().code, "VALIDATION_FAILED");
    }

    #[test]
    fn missing_workspace_maps_to_404() {
        let err = ApiError::from(WorkspaceStoreError::NotFound(WorkspaceId::new()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.body().code, "WORKSPACE_NOT_FOUND");
    }
}
