//! Handlers for the action tools shown beneath a plan.

mod calculate_financials;
mod checklist;
mod competitors;
mod copy_name;
mod marketing_materials;

pub use calculate_financials::CalculateFinancialsHandler;
pub use checklist::ChecklistHandler;
pub use competitors::CompetitorsHandler;
pub use copy_name::{CopyNameCommand, CopyNameHandler, CopyNameResult};
pub use marketing_materials::MarketingMaterialsHandler;

use thiserror::Error;

use crate::domain::workspace::WorkspaceError;
use crate::ports::WorkspaceStoreError;

/// Errors from workspace-backed tools.
#[derive(Debug, Error)]
pub enum WorkspaceToolError {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error(transparent)]
    Storage(WorkspaceStoreError),

    #[error("Please generate a business plan first.")]
    PlanRequired,
}

impl From<WorkspaceStoreError> for WorkspaceToolError {
    fn from(err: WorkspaceStoreError) -> Self {
        match err {
            WorkspaceStoreError::Rejected(e) => WorkspaceToolError::Workspace(e),
            other => WorkspaceToolError::Storage(other),
        }
    }
}
