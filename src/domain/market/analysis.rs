//! Market analysis value types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StarRating;

/// Fabricated demographics for the requested location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationProfile {
    pub population: u32,
    pub median_income: u32,
    pub business_density: f64,
    pub growth_rate: f64,
    pub unemployment_rate: f64,
}

/// One fabricated local competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorStat {
    pub name: String,
    pub rating: StarRating,
    pub years_in_business: u32,
    pub estimated_revenue: u32,
    pub strengths: String,
    pub weaknesses: String,
}

/// Fabricated statistics for a comparison region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalStats {
    pub region: String,
    pub competitor_count: u32,
    pub saturation: f64,
    pub average_rating: StarRating,
    pub market_growth: f64,
}

/// Fabricated statistics for the requested business in its location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessResearch {
    /// Size of the local market, 1 through 20.
    pub competitor_count: u32,
    /// At most five detailed records.
    pub local_competitors: Vec<CompetitorStat>,
    pub saturation: f64,
    pub average_rating: StarRating,
    pub average_revenue: u32,
    pub market_growth: f64,
}

/// Letter grade A through F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeLetter {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GradeLetter::A => "A",
            GradeLetter::B => "B",
            GradeLetter::C => "C",
            GradeLetter::D => "D",
            GradeLetter::F => "F",
        };
        write!(f, "{}", s)
    }
}

/// Competition grade derived from saturation and competitor density.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionGrade {
    pub grade: GradeLetter,
    pub score: u8,
    pub description: String,
}

/// Display-ready sentences summarizing an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    pub saturation_display: String,
    pub average_competitor_rating: String,
    pub market_overview: String,
    pub regional_analysis: String,
}

/// A complete simulated market analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub business_type: String,
    pub location: String,
    pub location_profile: LocationProfile,
    pub competitor_count: u32,
    pub local_competitors: Vec<CompetitorStat>,
    pub market_saturation: f64,
    pub average_rating: StarRating,
    pub market_growth: f64,
    pub competition_grade: CompetitionGrade,
    pub regional_comparison: Vec<RegionalStats>,
    pub opportunities: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: MarketSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_letters_order_best_first() {
        assert!(GradeLetter::A < GradeLetter::F);
        assert_eq!(GradeLetter::C.to_string(), "C");
    }

    #[test]
    fn grade_letter_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&GradeLetter::B).unwrap(), "\"B\"");
    }
}
