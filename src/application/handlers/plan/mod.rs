//! Plan handlers - Generation, rendering, suggestions and names.

mod generate_plan;
mod regenerate_names;
mod render_plan;
mod start_over;
mod suggest_business;

pub use generate_plan::{
    GeneratePlanCommand, GeneratePlanError, GeneratePlanHandler, GeneratePlanResult,
    GENERATION_FAILURE_NOTICE,
};
pub use regenerate_names::RegenerateNamesHandler;
pub use render_plan::{RenderPlanError, RenderPlanHandler, RenderPlanResult};
pub use start_over::StartOverHandler;
pub use suggest_business::{SuggestBusinessCommand, SuggestBusinessError, SuggestBusinessHandler};
