//! Manual competitor research and the insights derived from it.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompetitorId, ValidationError};

/// A competitor entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub location: String,
    pub website: Option<String>,
    pub pricing: Option<String>,
    pub strengths: Option<String>,
    pub weaknesses: Option<String>,
    pub target_market: Option<String>,
}

/// Form input for a new competitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompetitor {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub pricing: Option<String>,
    #[serde(default)]
    pub strengths: Option<String>,
    #[serde(default)]
    pub weaknesses: Option<String>,
    #[serde(default)]
    pub target_market: Option<String>,
}

fn optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Competitor {
    /// Validates the form input.
    ///
    /// # Errors
    ///
    /// `EmptyField` when name or location is blank.
    pub fn from_input(input: NewCompetitor) -> Result<Self, ValidationError> {
        let name = input.name.trim();
        let location = input.location.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if location.is_empty() {
            return Err(ValidationError::empty_field("location"));
        }
        Ok(Self {
            id: CompetitorId::new(),
            name: name.to_string(),
            location: location.to_string(),
            website: optional(input.website),
            pricing: optional(input.pricing),
            strengths: optional(input.strengths),
            weaknesses: optional(input.weaknesses),
            target_market: optional(input.target_market),
        })
    }
}

/// Insights over the current competitor list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveInsights {
    pub pricing_landscape: Option<String>,
    pub geographic_coverage: Option<String>,
    pub common_strengths: Option<String>,
    pub market_gaps: Option<String>,
    pub target_market_coverage: Option<String>,
    pub competition_level: Option<String>,
    pub strategies: Vec<String>,
    pub advantages: Vec<String>,
}

/// Competitor count at which competition is called high.
pub const HIGH_COMPETITION: usize = 3;

fn collect<'a>(values: impl Iterator<Item = Option<&'a String>>) -> Vec<&'a str> {
    values.flatten().map(String::as_str).collect()
}

fn sentence(values: &[&str], separator: &str, template: impl FnOnce(String) -> String) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(template(values.join(separator)))
    }
}

/// Derives insights; `None` for an empty list.
pub fn analyze_competitors(competitors: &[Competitor], user_location: &str) -> Option<CompetitiveInsights> {
    if competitors.is_empty() {
        return None;
    }

    let pricing = collect(competitors.iter().map(|c| c.pricing.as_ref()));
    let locations: Vec<&str> = competitors.iter().map(|c| c.location.as_str()).collect();
    let strengths = collect(competitors.iter().map(|c| c.strengths.as_ref()));
    let weaknesses = collect(competitors.iter().map(|c| c.weaknesses.as_ref()));
    let targets = collect(competitors.iter().map(|c| c.target_market.as_ref()));

    let competition_level = if competitors.len() >= HIGH_COMPETITION {
        format!(
            "High Competition: With {} competitors identified, focus on unique value propositions and exceptional customer service.",
            competitors.len()
        )
    } else {
        "Moderate Competition: Opportunity exists to establish market presence. Focus on building strong local relationships.".to_string()
    };

    Some(CompetitiveInsights {
        pricing_landscape: sentence(&pricing, " to ", |joined| {
            format!("Competitors range from {}. Consider positioning yourself in the mid-range for optimal value perception.", joined)
        }),
        geographic_coverage: sentence(&locations, ", ", |joined| {
            format!("Competitors are located in {}. Identify underserved areas or consider mobile services.", joined)
        }),
        common_strengths: sentence(&strengths, "; ", |joined| {
            format!("{}. Focus on differentiating yourself from these common features.", joined)
        }),
        market_gaps: sentence(&weaknesses, "; ", |joined| {
            format!("{}. These represent opportunities for your business to excel.", joined)
        }),
        target_market_coverage: sentence(&targets, ", ", |joined| {
            format!("Competitors focus on {}. Consider underserved segments or niche markets.", joined)
        }),
        competition_level: Some(competition_level),
        strategies: vec![
            "Differentiation Strategy: Emphasize your unique strengths, location advantages, and customer service excellence.".to_string(),
            "Pricing Strategy: Position yourself competitively while highlighting value-added services.".to_string(),
            "Marketing Focus: Target underserved customer segments and emphasize your local expertise.".to_string(),
        ],
        advantages: vec![
            format!("Local Expertise: Deep knowledge of {} market and community needs", user_location),
            "Personalized Service: Ability to provide customized solutions and personal attention".to_string(),
            "Flexibility: Quick adaptation to market changes and customer feedback".to_string(),
            "Community Connection: Strong local relationships and community involvement".to_string(),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, location: &str, pricing: Option<&str>) -> Competitor {
        Competitor::from_input(NewCompetitor {
            name: name.to_string(),
            location: location.to_string(),
            pricing: pricing.map(str::to_string),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn name_and_location_are_required() {
        let err = Competitor::from_input(NewCompetitor {
            name: " ".to_string(),
            location: "Austin".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), "name");

        let err = Competitor::from_input(NewCompetitor {
            name: "Paws".to_string(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), "location");
    }

    #[test]
    fn blank_optional_fields_become_none() {
        let c = Competitor::from_input(NewCompetitor {
            name: "Paws".to_string(),
            location: "Austin".to_string(),
            website: Some("   ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(c.website, None);
    }

    #[test]
    fn empty_list_has_no_insights() {
        assert!(analyze_competitors(&[], "Austin").is_none());
    }

    #[test]
    fn single_competitor_is_moderate_competition() {
        let insights = analyze_competitors(&[entry("Paws", "North Austin", None)], "Austin").unwrap();
        assert!(insights.competition_level.unwrap().starts_with("Moderate Competition"));
        assert_eq!(insights.pricing_landscape, None);
        assert_eq!(
            insights.geographic_coverage.as_deref(),
            Some("Competitors are located in North Austin. Identify underserved areas or consider mobile services.")
        );
        assert_eq!(insights.strategies.len(), 3);
        assert_eq!(
            insights.advantages[0],
            "Local Expertise: Deep knowledge of Austin market and community needs"
        );
    }

    #[test]
    fn three_competitors_is_high_competition() {
        let list = vec![
            entry("A", "North", Some("$40")),
            entry("B", "South", None),
            entry("C", "East", Some("$90")),
        ];
        let insights = analyze_competitors(&list, "Austin").unwrap();
        assert!(insights.competition_level.unwrap().contains("With 3 competitors identified"));
        assert!(insights.pricing_landscape.unwrap().starts_with("Competitors range from $40 to $90."));
    }
}
