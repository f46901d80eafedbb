//! Summary sentences for an analysis.

use super::analysis::{CompetitorStat, MarketSummary};
use super::insights::{HIGH_SATURATION, LOW_SATURATION};
use crate::domain::foundation::StarRating;

/// "low", "moderate" or "high".
pub fn saturation_level(saturation: f64) -> &'static str {
    if saturation < LOW_SATURATION {
        "low"
    } else if saturation < HIGH_SATURATION {
        "moderate"
    } else {
        "high"
    }
}

/// Saturation as a percentage with one decimal, e.g. "45.3%".
pub fn format_saturation(saturation: f64) -> String {
    format!("{:.1}%", saturation * 100.0)
}

/// Mean competitor rating with one decimal, or "N/A" without competitors.
pub fn average_competitor_rating(competitors: &[CompetitorStat]) -> String {
    StarRating::average(competitors.iter().map(|c| c.rating))
        .map(|r| r.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn summarize(
    business_type: &str,
    location: &str,
    saturation: f64,
    competitors: &[CompetitorStat],
) -> MarketSummary {
    let business = if business_type.is_empty() { "business" } else { business_type };
    let area = if location.is_empty() { "your area" } else { location };
    let favorable = saturation < LOW_SATURATION;

    MarketSummary {
        saturation_display: format_saturation(saturation),
        average_competitor_rating: average_competitor_rating(competitors),
        market_overview: format!(
            "The {} market in {} shows {} saturation with {} established competitors.",
            business,
            area,
            saturation_level(saturation),
            competitors.len()
        ),
        regional_analysis: format!(
            "Your market shows {} saturation compared to similar regions, indicating {} competitive conditions.",
            if favorable { "lower" } else { "higher" },
            if favorable { "favorable" } else { "challenging" }
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(rating: f64) -> CompetitorStat {
        CompetitorStat {
            name: "Elite coffee Inc".to_string(),
            rating: StarRating::clamped(rating),
            years_in_business: 3,
            estimated_revenue: 100_000,
            strengths: "Fast turnaround".to_string(),
            weaknesses: "High prices".to_string(),
        }
    }

    #[test]
    fn saturation_levels() {
        assert_eq!(saturation_level(0.39), "low");
        assert_eq!(saturation_level(0.4), "moderate");
        assert_eq!(saturation_level(0.7), "high");
    }

    #[test]
    fn saturation_formats_one_decimal() {
        assert_eq!(format_saturation(0.4531), "45.3%");
    }

    #[test]
    fn average_rating_is_na_without_competitors() {
        assert_eq!(average_competitor_rating(&[]), "N/A");
        assert_eq!(average_competitor_rating(&[competitor(4.0), competitor(3.0)]), "3.5");
    }

    #[test]
    fn summary_sentences() {
        let summary = summarize("coffee shop", "Austin", 0.2, &[competitor(4.0)]);
        assert_eq!(
            summary.market_overview,
            "The coffee shop market in Austin shows low saturation with 1 established competitors."
        );
        assert!(summary.regional_analysis.contains("lower saturation"));
        assert!(summary.regional_analysis.contains("favorable"));

        let crowded = summarize("", "", 0.8, &[]);
        assert!(crowded.market_overview.starts_with("The business market in your area shows high"));
        assert!(crowded.regional_analysis.contains("challenging"));
    }
}
