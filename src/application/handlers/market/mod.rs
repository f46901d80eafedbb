//! Market research handlers.

mod analyze_market;

pub use analyze_market::{AnalyzeMarketError, AnalyzeMarketHandler, PLAN_REQUIRED_NOTICE};
