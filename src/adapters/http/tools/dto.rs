//! HTTP DTOs for stateless tool endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::toolkit::{FinancialSummary, NamingTip};

#[derive(Debug, Clone, Deserialize)]
pub struct CopyNameRequest {
    #[serde(default)]
    pub name: String,
}

/// Raw figures plus the formatted strings shown next to the calculator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialsResponse {
    #[serde(flatten)]
    pub summary: FinancialSummary,
    pub monthly_profit_display: String,
    pub break_even_display: String,
    pub annual_profit_display: String,
}

impl From<FinancialSummary> for FinancialsResponse {
    fn from(summary: FinancialSummary) -> Self {
        Self {
            monthly_profit_display: summary.monthly_profit_display(),
            break_even_display: summary.break_even_display(),
            annual_profit_display: summary.annual_profit_display(),
            summary,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NamingTipsResponse {
    pub tips: &'static [NamingTip],
}
