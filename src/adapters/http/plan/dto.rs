//! HTTP DTOs for plan endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::planning::PlanContent;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Plan form submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub business: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub workspace_id: Option<String>,
}

/// Options for the markdown export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderPlanQuery {
    /// Omit resource links and the entity section.
    #[serde(default)]
    pub compact: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestBusinessRequest {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub workspace_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub workspace_id: String,
    pub plan: PlanContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub business: String,
}
