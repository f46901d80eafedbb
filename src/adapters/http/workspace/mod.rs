//! HTTP adapter for workspace-backed tools.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChecklistResponse, CompetitorListResponse, InsightsResponse, NamesResponse, WorkspaceResponse};
pub use routes::workspace_routes;
