//! HTTP adapter for plan generation and business suggestions.

mod dto;
mod handlers;
mod routes;

pub use dto::{GeneratePlanRequest, PlanResponse, RenderPlanQuery, SuggestBusinessRequest, SuggestionResponse};
pub use handlers::WORKSPACE_ID_HEADER;
pub use routes::plan_routes;
