//! Name Generator - Three distinct business names from word patterns.
//!
//! A primary token is taken from the business description and dropped into
//! one of ten patterns, each drawing a word from its own list. Sampling is
//! bounded; once the attempt budget is spent the remaining slots are filled
//! with numbered variants of the primary token, so generation always
//! terminates with exactly [`NAME_COUNT`] distinct names.

use super::templates::capitalize_first;
use crate::ports::RandomSource;

/// Number of names produced per request.
pub const NAME_COUNT: usize = 3;

/// Draws allowed before falling back to numbered variants.
pub const MAX_ATTEMPTS: usize = 32;

struct NamePattern {
    /// `{P}` is the primary token, `{W}` the drawn word.
    shape: &'static str,
    words: [&'static str; 10],
}

const PATTERNS: [NamePattern; 10] = [
    NamePattern {
        shape: "{P} & {W}",
        words: ["Excellence", "Elite", "Express", "Expert", "Extra", "Exclusive", "Essential", "Epic", "Elegant", "Empire"],
    },
    NamePattern {
        shape: "The {P} {W}",
        words: ["Company", "Collective", "Corner", "Crew", "Club", "Co.", "Center", "Circle", "Craft", "Culture"],
    },
    NamePattern {
        shape: "{W} {P}",
        words: ["Go", "Get", "Give", "Grow", "Guide", "Guard", "Gather", "Gain", "Glow", "Grace"],
    },
    NamePattern {
        shape: "{P} {W}",
        words: ["Now", "Next", "New", "Nice", "Noble", "Natural", "Nurture", "Navigate", "Network", "Nest"],
    },
    NamePattern {
        shape: "{W} {P}",
        words: ["Super", "Smart", "Swift", "Strong", "Sweet", "Smooth", "Sharp", "Special", "Simple", "Solid"],
    },
    NamePattern {
        shape: "{P} {W}",
        words: ["Works", "Wonders", "Wins", "Worth", "World", "Way", "Wise", "Warm", "Wild", "Wonderful"],
    },
    NamePattern {
        shape: "The {W} {P}",
        words: ["Amazing", "Awesome", "Adorable", "Ambitious", "Artistic", "Authentic", "Adventurous", "Affordable", "Attractive", "Amazing"],
    },
    NamePattern {
        shape: "{P} & {W}",
        words: ["Success", "Solutions", "Service", "Studio", "Space", "Spot", "Shop", "Store", "Style", "Support"],
    },
    NamePattern {
        shape: "{P} {W}",
        words: ["Pro", "Plus", "Prime", "Perfect", "Premium", "Professional", "Pioneer", "Partner", "Provider", "Producer"],
    },
    NamePattern {
        shape: "{P} {W}",
        words: ["& Co.", "& Company", "& Crew", "& Collective", "& Corner", "& Craft", "& Culture", "& Circle", "& Club", "& Company"],
    },
];

/// First word longer than two characters, else the whole input; lowercased.
pub fn primary_token(business: &str) -> String {
    let lowered = business.to_lowercase();
    lowered
        .split_whitespace()
        .find(|word| word.chars().count() > 2)
        .map(str::to_string)
        .unwrap_or(lowered)
}

/// Draws a single name.
pub fn draw_name(primary: &str, rng: &mut dyn RandomSource) -> String {
    let pattern = &PATTERNS[rng.index(PATTERNS.len())];
    let word = pattern.words[rng.index(pattern.words.len())];
    pattern
        .shape
        .replace("{P}", &capitalize_first(primary))
        .replace("{W}", word)
}

/// Generates [`NAME_COUNT`] pairwise-distinct names.
pub fn generate_names(business: &str, rng: &mut dyn RandomSource) -> Vec<String> {
    let primary = primary_token(business);
    let mut names: Vec<String> = Vec::with_capacity(NAME_COUNT);

    for _ in 0..MAX_ATTEMPTS {
        if names.len() == NAME_COUNT {
            return names;
        }
        let name = draw_name(&primary, rng);
        if !names.contains(&name) {
            names.push(name);
        }
    }

    if names.len() < NAME_COUNT {
        tracing::warn!(
            primary = %primary,
            collected = names.len(),
            "name sampling exhausted, filling with numbered variants"
        );
    }

    let base = capitalize_first(&primary);
    let mut suffix = 2;
    while names.len() < NAME_COUNT {
        let candidate = format!("{} {}", base, suffix).trim().to_string();
        if !names.contains(&candidate) {
            names.push(candidate);
        }
        suffix += 1;
    }
    names
}
