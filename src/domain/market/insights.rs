//! Threshold rules turning research numbers into advice.

use super::analysis::BusinessResearch;
use crate::ports::RandomSource;

pub const LOW_SATURATION: f64 = 0.4;
pub const HIGH_SATURATION: f64 = 0.7;
pub const QUALITY_GAP_RATING: f64 = 4.0;
pub const HIGH_QUALITY_RATING: f64 = 4.5;
/// Compared against the drawn market-wide count, not the local sample.
pub const CROWDED_MARKET: u32 = 10;
pub const GROWING_MARKET: f64 = 0.1;

const UNDERSERVED_SEGMENTS: [&str; 4] = [
    "premium services",
    "eco-friendly options",
    "mobile services",
    "24/7 availability",
];

pub fn identify_opportunities(research: &BusinessResearch, rng: &mut dyn RandomSource) -> Vec<String> {
    let mut opportunities = Vec::new();
    if research.saturation < LOW_SATURATION {
        opportunities.push("Low market saturation - room for new entrants".to_string());
    }
    if research.average_rating.value() < QUALITY_GAP_RATING {
        opportunities.push("Below-average competitor ratings - quality gap exists".to_string());
    }
    let segment = UNDERSERVED_SEGMENTS[rng.index(UNDERSERVED_SEGMENTS.len())];
    opportunities.push(format!("Potential to serve underserved segments: {}", segment));
    if research.market_growth > GROWING_MARKET {
        opportunities.push("Growing market - timing is favorable".to_string());
    }
    opportunities
}

pub fn identify_risks(research: &BusinessResearch) -> Vec<String> {
    let mut risks = Vec::new();
    if research.saturation > HIGH_SATURATION {
        risks.push("High market saturation - difficult to differentiate".to_string());
    }
    if research.competitor_count > CROWDED_MARKET {
        risks.push("Many established competitors - challenging to gain market share".to_string());
    }
    if research.average_rating.value() > HIGH_QUALITY_RATING {
        risks.push("High-quality competitors - difficult to compete on quality alone".to_string());
    }
    risks
}

pub fn generate_recommendations(research: &BusinessResearch) -> Vec<String> {
    let mut recommendations = Vec::new();
    if research.saturation < LOW_SATURATION {
        recommendations.push("Focus on rapid market entry and brand building".to_string());
    } else {
        recommendations.push("Emphasize unique value propositions and differentiation".to_string());
    }
    if research.average_rating.value() < QUALITY_GAP_RATING {
        recommendations.push("Prioritize exceptional customer service and quality".to_string());
    }
    recommendations.push("Develop strong local partnerships and community connections".to_string());
    recommendations.push("Consider mobile or online services to expand reach".to_string());
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StarRating;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    fn research(saturation: f64, rating: f64, count: u32, growth: f64) -> BusinessResearch {
        BusinessResearch {
            competitor_count: count,
            local_competitors: Vec::new(),
            saturation,
            average_rating: StarRating::clamped(rating),
            average_revenue: 250_000,
            market_growth: growth,
        }
    }

    #[test]
    fn open_market_lists_every_opportunity() {
        let r = research(0.2, 3.5, 2, 0.15);
        let opportunities = identify_opportunities(&r, &mut Fixed(0.0));
        assert_eq!(
            opportunities,
            vec![
                "Low market saturation - room for new entrants",
                "Below-average competitor ratings - quality gap exists",
                "Potential to serve underserved segments: premium services",
                "Growing market - timing is favorable",
            ]
        );
        assert!(identify_risks(&r).is_empty());
    }

    #[test]
    fn segment_opportunity_is_always_present() {
        let r = research(0.9, 4.8, 15, 0.06);
        let opportunities = identify_opportunities(&r, &mut Fixed(0.99));
        assert_eq!(opportunities, vec!["Potential to serve underserved segments: 24/7 availability"]);
    }

    #[test]
    fn crowded_market_lists_every_risk() {
        let risks = identify_risks(&research(0.9, 4.8, 15, 0.06));
        assert_eq!(risks.len(), 3);
        assert!(risks[1].starts_with("Many established competitors"));
    }

    #[test]
    fn recommendations_switch_on_saturation() {
        let low = generate_recommendations(&research(0.2, 4.2, 2, 0.1));
        assert_eq!(low[0], "Focus on rapid market entry and brand building");
        assert_eq!(low.len(), 3);

        let high = generate_recommendations(&research(0.5, 3.2, 2, 0.1));
        assert_eq!(high[0], "Emphasize unique value propositions and differentiation");
        assert_eq!(high[1], "Prioritize exceptional customer service and quality");
        assert_eq!(high.len(), 4);
    }
}
