//! Marketing materials and naming tips.

use serde::{Deserialize, Serialize};

/// Business label used when no plan has been generated.
pub const DEFAULT_BUSINESS: &str = "Business";

const TAGLINES: [&str; 5] = [
    "Excellence in every service",
    "Your success is our priority",
    "Quality you can trust",
    "Professional results, personal touch",
    "Building your future, one project at a time",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingMaterials {
    pub name_suggestions: Vec<String>,
    pub taglines: Vec<String>,
    pub seo_keywords: Vec<String>,
}

/// Builds materials for the last business type, or [`DEFAULT_BUSINESS`].
pub fn marketing_materials(business: Option<&str>) -> MarketingMaterials {
    let b = business
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .unwrap_or(DEFAULT_BUSINESS);

    MarketingMaterials {
        name_suggestions: vec![
            format!("{b} Pro"),
            format!("Elite {b}"),
            format!("{b} Solutions"),
            format!("Premium {b}"),
            format!("{b} Express"),
        ],
        taglines: TAGLINES.iter().map(|t| t.to_string()).collect(),
        seo_keywords: vec![
            format!("{b} services"),
            format!("Professional {b}"),
            format!("{b} near me"),
            format!("Best {b} company"),
            format!("{b} experts"),
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamingTip {
    pub title: &'static str,
    pub advice: &'static str,
}

pub const NAMING_TIPS: [NamingTip; 6] = [
    NamingTip {
        title: "Keep it Simple",
        advice: "Choose names that are easy to pronounce, spell, and remember.",
    },
    NamingTip {
        title: "Check Availability",
        advice: "Verify domain names and business registration availability.",
    },
    NamingTip {
        title: "Consider Social Media",
        advice: "Ensure the name works well as social media handles.",
    },
    NamingTip {
        title: "Make it Memorable",
        advice: "Use alliteration, rhyme, or unique word combinations.",
    },
    NamingTip {
        title: "Reflect Your Brand",
        advice: "The name should convey your business personality and values.",
    },
    NamingTip {
        title: "Think Long-term",
        advice: "Avoid overly trendy names that might feel dated later.",
    },
];
