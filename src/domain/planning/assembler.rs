//! Report Assembler - Composes one plan from the rule-driven pieces.

use super::alternatives::alternative_suggestion;
use super::content::{PlanContent, StartupStep};
use super::entity::recommend_entity;
use super::names::{generate_names, NAME_COUNT};
use super::rationale::location_rationale;
use super::request::PlanRequest;
use super::resources::step_resources;
use super::rules::TEMPLATE_TABLE;
use super::templates::PlanTemplate;
use crate::ports::RandomSource;

/// Deterministic names built from the raw request text.
pub fn fallback_names(business: &str, location: &str) -> [String; NAME_COUNT] {
    [
        format!("{} {} Co.", business, location),
        format!("{} {} LLC", business, location),
        format!("{} {} & Co.", business, location),
    ]
}

/// Tops up a short name list with fallback names, keeping entries distinct.
pub fn complete_names(mut names: Vec<String>, business: &str, location: &str) -> Vec<String> {
    if names.len() < NAME_COUNT {
        tracing::warn!(count = names.len(), "name generator came up short, using fallback names");
        for fallback in fallback_names(business, location) {
            if names.len() == NAME_COUNT {
                break;
            }
            if !names.contains(&fallback) {
                names.push(fallback);
            }
        }
    }
    names.truncate(NAME_COUNT);
    names
}

/// Builds the plan for a request.
pub fn assemble_plan(request: &PlanRequest, rng: &mut dyn RandomSource) -> PlanContent {
    let business = request.business();
    let location = request.location();
    let business_lower = business.to_lowercase();

    let category = TEMPLATE_TABLE.resolve(business);
    let template = PlanTemplate::for_category(category);

    let startup_steps = template
        .startup_steps
        .iter()
        .enumerate()
        .map(|(i, (title, description))| StartupStep {
            title: (*title).to_string(),
            description: (*description).to_string(),
            resources: step_resources(&business_lower, i + 1),
        })
        .collect();

    let alternative = alternative_suggestion(business, location, rng);
    let names = complete_names(generate_names(business, rng), business, location);

    PlanContent {
        business: business.to_string(),
        location: location.to_string(),
        category,
        overview: template.overview(business),
        target_market: template.target_market.to_string(),
        revenue_streams: to_strings(&template.revenue_streams),
        pricing: template.pricing_items(),
        revenue_projection: template.revenue_years(),
        startup_steps,
        marketing_strategies: to_strings(&template.marketing_strategies),
        challenges: to_strings(&template.challenges),
        business_names: names,
        location_rationale: location_rationale(location, business),
        alternative_suggestion: alternative,
        entity_recommendation: recommend_entity(business),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
