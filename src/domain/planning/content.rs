//! Plan content - The assembled business plan bundle.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// One row of the pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingItem {
    pub item: String,
    pub price: String,
}

/// One row of the five-year revenue projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueYear {
    pub year: String,
    pub revenue: String,
}

/// An external link attached to a startup step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub link: String,
    pub description: String,
}

/// A startup step with its supporting resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupStep {
    pub title: String,
    pub description: String,
    pub resources: Vec<Resource>,
}

/// Suggested legal structure for the business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecommendation {
    pub recommended: String,
    pub reasoning: String,
    pub benefits: Vec<String>,
    pub considerations: Vec<String>,
}

/// The full business plan handed to renderers.
///
/// Everything except `business_names` and `alternative_suggestion` is a
/// deterministic function of the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanContent {
    pub business: String,
    pub location: String,
    pub category: Category,
    pub overview: String,
    pub target_market: String,
    pub revenue_streams: Vec<String>,
    pub pricing: Vec<PricingItem>,
    pub revenue_projection: Vec<RevenueYear>,
    pub startup_steps: Vec<StartupStep>,
    pub marketing_strategies: Vec<String>,
    pub challenges: Vec<String>,
    pub business_names: Vec<String>,
    pub location_rationale: String,
    pub alternative_suggestion: String,
    pub entity_recommendation: EntityRecommendation,
}

impl PlanContent {
    /// Looks up a price by item name.
    pub fn price_of(&self, item: &str) -> Option<&str> {
        self.pricing
            .iter()
            .find(|p| p.item == item)
            .map(|p| p.price.as_str())
    }

    /// Total number of resources across all steps.
    pub fn resource_count(&self) -> usize {
        self.startup_steps.iter().map(|s| s.resources.len()).sum()
    }
}
