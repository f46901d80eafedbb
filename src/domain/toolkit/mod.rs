//! Toolkit module - Interactive tools shown under a generated plan.

mod checklist;
mod competitors;
mod financials;
mod marketing;

pub use checklist::{Checklist, ChecklistItem, CHECKLIST_ITEMS};
pub use competitors::{analyze_competitors, CompetitiveInsights, Competitor, NewCompetitor, HIGH_COMPETITION};
pub use financials::{calculate_financials, format_dollars, BreakEven, FinancialInputs, FinancialSummary};
pub use marketing::{marketing_materials, MarketingMaterials, NamingTip, DEFAULT_BUSINESS, NAMING_TIPS};

/// Confirmation shown after a business name is copied.
pub fn copy_notice(name: &str) -> String {
    format!("Business name \"{}\" copied to clipboard!", name)
}
