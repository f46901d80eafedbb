//! Market module - Synthetic market analysis.
//!
//! All statistics are fabricated from a [`RandomSource`]; the grade and the
//! advice lists are deterministic functions of those draws, so a seeded
//! source reproduces an analysis exactly.

mod analysis;
mod grade;
mod insights;
mod simulator;
mod summary;

pub use analysis::{
    BusinessResearch, CompetitionGrade, CompetitorStat, GradeLetter, LocationProfile, MarketAnalysis,
    MarketSummary, RegionalStats,
};
pub use grade::{calculate_grade, competition_score, grade_for_score, mean_regional_saturation};
pub use insights::{generate_recommendations, identify_opportunities, identify_risks};
pub use simulator::{
    simulate_business, simulate_location, simulate_regions, COMPARISON_REGIONS, MAX_COMPETITOR_RECORDS,
};
pub use summary::{format_saturation, saturation_level, summarize};

use crate::ports::RandomSource;

/// Produces a full analysis for a business type and location.
///
/// Inputs are used only for labels; they are not validated.
pub fn analyze_market(business_type: &str, location: &str, rng: &mut dyn RandomSource) -> MarketAnalysis {
    let location_profile = simulate_location(rng);
    let research = simulate_business(business_type, rng);
    let regional_comparison = simulate_regions(rng);

    let competition_grade = calculate_grade(research.saturation, research.competitor_count, &regional_comparison);
    let opportunities = identify_opportunities(&research, rng);
    let risks = identify_risks(&research);
    let recommendations = generate_recommendations(&research);
    let summary = summarize(business_type, location, research.saturation, &research.local_competitors);

    MarketAnalysis {
        business_type: business_type.to_string(),
        location: location.to_string(),
        location_profile,
        competitor_count: research.competitor_count,
        local_competitors: research.local_competitors,
        market_saturation: research.saturation,
        average_rating: research.average_rating,
        market_growth: research.market_growth,
        competition_grade,
        regional_comparison,
        opportunities,
        risks,
        recommendations,
        summary,
    }
}
