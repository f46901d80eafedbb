//! Random draws behind the synthetic market research.
//!
//! Distributions:
//! - competitor count: integer in [1, 20], at most five detailed records
//! - saturation: [0, 1)
//! - competitor rating: [3, 5); years in business 1..=10; revenue [50k, 350k)
//! - regions: count [1, 25], saturation [0, 1), rating [3, 5), growth [0.03, 0.23)

use super::analysis::{BusinessResearch, CompetitorStat, LocationProfile, RegionalStats};
use crate::domain::foundation::StarRating;
use crate::ports::RandomSource;

/// Regions every analysis is compared against.
pub const COMPARISON_REGIONS: [&str; 5] = [
    "Austin, TX",
    "Denver, CO",
    "Portland, OR",
    "Nashville, TN",
    "Raleigh, NC",
];

/// Detailed competitor records kept per analysis.
pub const MAX_COMPETITOR_RECORDS: usize = 5;

const NAME_PREFIXES: [&str; 7] = ["Elite", "Premium", "Pro", "Express", "First", "Best", "Quality"];
const NAME_SUFFIXES: [&str; 6] = ["Services", "Solutions", "Group", "Company", "Inc", "LLC"];

const STRENGTHS: [&str; 6] = [
    "Excellent customer service",
    "Convenient location",
    "Competitive pricing",
    "Quality products",
    "Fast turnaround",
    "Experienced staff",
];

const WEAKNESSES: [&str; 6] = [
    "Limited hours",
    "High prices",
    "Poor customer service",
    "Outdated technology",
    "Limited selection",
    "Inconsistent quality",
];

fn rating_draw(rng: &mut dyn RandomSource) -> StarRating {
    StarRating::clamped(rng.uniform(3.0, 5.0))
}

fn whole(rng: &mut dyn RandomSource, low: f64, high: f64) -> u32 {
    rng.uniform(low, high).floor() as u32
}

pub fn simulate_location(rng: &mut dyn RandomSource) -> LocationProfile {
    LocationProfile {
        population: whole(rng, 50_000.0, 550_000.0),
        median_income: whole(rng, 30_000.0, 80_000.0),
        business_density: rng.uniform(0.2, 1.0),
        growth_rate: rng.uniform(0.02, 0.12),
        unemployment_rate: rng.uniform(0.03, 0.11),
    }
}

pub fn competitor_name(business_type: &str, rng: &mut dyn RandomSource) -> String {
    let prefix = NAME_PREFIXES[rng.index(NAME_PREFIXES.len())];
    let suffix = NAME_SUFFIXES[rng.index(NAME_SUFFIXES.len())];
    format!("{} {} {}", prefix, business_type, suffix)
}

pub fn simulate_competitor(business_type: &str, rng: &mut dyn RandomSource) -> CompetitorStat {
    CompetitorStat {
        name: competitor_name(business_type, rng),
        rating: rating_draw(rng),
        years_in_business: rng.int_inclusive(1, 10),
        estimated_revenue: whole(rng, 50_000.0, 350_000.0),
        strengths: STRENGTHS[rng.index(STRENGTHS.len())].to_string(),
        weaknesses: WEAKNESSES[rng.index(WEAKNESSES.len())].to_string(),
    }
}

pub fn simulate_business(business_type: &str, rng: &mut dyn RandomSource) -> BusinessResearch {
    let competitor_count = rng.int_inclusive(1, 20);
    let saturation = rng.next_unit();
    let average_rating = rating_draw(rng);
    let average_revenue = whole(rng, 100_000.0, 600_000.0);

    let records = (competitor_count as usize).min(MAX_COMPETITOR_RECORDS);
    let local_competitors = (0..records)
        .map(|_| simulate_competitor(business_type, rng))
        .collect();

    BusinessResearch {
        competitor_count,
        local_competitors,
        saturation,
        average_rating,
        average_revenue,
        market_growth: rng.uniform(0.05, 0.20),
    }
}

pub fn simulate_regions(rng: &mut dyn RandomSource) -> Vec<RegionalStats> {
    COMPARISON_REGIONS
        .iter()
        .map(|region| RegionalStats {
            region: (*region).to_string(),
            competitor_count: rng.int_inclusive(1, 25),
            saturation: rng.next_unit(),
            average_rating: rating_draw(rng),
            market_growth: rng.uniform(0.03, 0.23),
        })
        .collect()
}
