//! HTTP DTOs for workspace endpoints.

use serde::Serialize;

use crate::domain::toolkit::{Checklist, ChecklistItem, CompetitiveInsights, Competitor};
use crate::domain::workspace::Workspace;

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct NamesResponse {
    pub names: Vec<String>,
}

/// Workspace state after a reset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceResponse {
    pub workspace_id: String,
    pub has_plan: bool,
    pub checklist_progress: u8,
    pub competitor_count: usize,
    pub updated_at: String,
}

impl From<&Workspace> for WorkspaceResponse {
    fn from(ws: &Workspace) -> Self {
        Self {
            workspace_id: ws.id().to_string(),
            has_plan: ws.plan_context().is_some(),
            checklist_progress: ws.checklist().progress().value(),
            competitor_count: ws.competitors().len(),
            updated_at: ws.updated_at().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResponse {
    pub items: Vec<ChecklistItem>,
    pub completed_count: usize,
    /// Whole percent, 0..=100.
    pub progress: u8,
    pub progress_label: String,
}

impl From<Checklist> for ChecklistResponse {
    fn from(checklist: Checklist) -> Self {
        let progress = checklist.progress();
        Self {
            completed_count: checklist.completed_count(),
            progress: progress.value(),
            progress_label: format!("{} Complete", progress),
            items: checklist.items().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetitorListResponse {
    pub competitors: Vec<Competitor>,
}

/// Insights are `null` until a competitor has been added.
#[derive(Debug, Clone, Serialize)]
pub struct InsightsResponse {
    pub insights: Option<CompetitiveInsights>,
}
