//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers own validation order, action gating, pacing and logging; the
//! domain functions they call stay pure.

pub mod handlers;

pub use handlers::location::{ResolveLocationCommand, ResolveLocationHandler};
pub use handlers::market::AnalyzeMarketHandler;
pub use handlers::plan::{
    GeneratePlanCommand, GeneratePlanHandler, RegenerateNamesHandler, RenderPlanHandler,
    StartOverHandler, SuggestBusinessCommand, SuggestBusinessHandler,
};
pub use handlers::tools::{
    CalculateFinancialsHandler, ChecklistHandler, CompetitorsHandler, CopyNameHandler,
    MarketingMaterialsHandler,
};
