//! Keyword rule tables.
//!
//! Each table is evaluated by [`RuleTable::resolve`]; order is priority.
//! Business-description tables decide the template body, location tables
//! decide rationale, suggestions and location-based alternatives.

use super::category::{Category, EntityProfile, LocationKind, ResourceTrack};
use super::matcher::{Rule, RuleTable};

const TEMPLATE_RULES: &[Rule<Category>] = &[
    Rule::contains("coffee", Category::CoffeeCafe),
    Rule::contains("cafe", Category::CoffeeCafe),
    Rule::contains("pet", Category::PetGrooming),
    Rule::contains("grooming", Category::PetGrooming),
    Rule::contains("web", Category::WebDesign),
    Rule::contains("design", Category::WebDesign),
    Rule::contains("development", Category::WebDesign),
    Rule::contains("food truck", Category::FoodTruck),
    Rule::all_of(&["food", "truck"], Category::FoodTruck),
    Rule::all_of(&["personal", "train"], Category::PersonalTraining),
];

/// Business description → template category.
pub const TEMPLATE_TABLE: RuleTable<Category> = RuleTable::new(TEMPLATE_RULES, Category::Generic);

// Alternatives use a looser food rule: any mention of food counts.
const ALTERNATIVE_BUSINESS_RULES: &[Rule<Category>] = &[
    Rule::contains("coffee", Category::CoffeeCafe),
    Rule::contains("cafe", Category::CoffeeCafe),
    Rule::contains("pet", Category::PetGrooming),
    Rule::contains("grooming", Category::PetGrooming),
    Rule::contains("web", Category::WebDesign),
    Rule::contains("design", Category::WebDesign),
    Rule::contains("food truck", Category::FoodTruck),
    Rule::contains("food", Category::FoodTruck),
    Rule::all_of(&["personal", "train"], Category::PersonalTraining),
];

/// Business description → category whose alternatives join the pool.
pub const ALTERNATIVE_BUSINESS_TABLE: RuleTable<Category> =
    RuleTable::new(ALTERNATIVE_BUSINESS_RULES, Category::Generic);

const RATIONALE_RULES: &[Rule<LocationKind>] = &[
    Rule::contains("university", LocationKind::Campus),
    Rule::contains("college", LocationKind::Campus),
    Rule::contains("downtown", LocationKind::Downtown),
    Rule::contains("city center", LocationKind::Downtown),
    Rule::contains("beach", LocationKind::Beach),
    Rule::contains("coastal", LocationKind::Beach),
    Rule::contains("suburban", LocationKind::Suburban),
    Rule::contains("residential", LocationKind::Suburban),
];

/// Location → rationale paragraph.
pub const RATIONALE_TABLE: RuleTable<LocationKind> =
    RuleTable::new(RATIONALE_RULES, LocationKind::Anywhere);

const ALTERNATIVE_LOCATION_RULES: &[Rule<LocationKind>] = &[
    Rule::contains("university", LocationKind::Campus),
    Rule::contains("college", LocationKind::Campus),
    Rule::contains("downtown", LocationKind::Downtown),
    Rule::contains("city center", LocationKind::Downtown),
    Rule::contains("beach", LocationKind::Beach),
    Rule::contains("coastal", LocationKind::Beach),
    Rule::contains("suburban", LocationKind::Suburban),
    Rule::contains("residential", LocationKind::Suburban),
    Rule::contains("tech", LocationKind::TechHub),
    Rule::contains("silicon", LocationKind::TechHub),
    Rule::contains("tourist", LocationKind::Tourist),
    Rule::contains("vacation", LocationKind::Tourist),
];

/// Location → location-based alternatives.
pub const ALTERNATIVE_LOCATION_TABLE: RuleTable<LocationKind> =
    RuleTable::new(ALTERNATIVE_LOCATION_RULES, LocationKind::Anywhere);

const SUGGESTION_RULES: &[Rule<LocationKind>] = &[
    Rule::contains("university", LocationKind::Campus),
    Rule::contains("college", LocationKind::Campus),
    Rule::contains("beach", LocationKind::Beach),
    Rule::contains("downtown", LocationKind::Downtown),
    Rule::contains("tech", LocationKind::TechHub),
    Rule::contains("family", LocationKind::Family),
    Rule::contains("tourist", LocationKind::Tourist),
    Rule::contains("suburban", LocationKind::Suburban),
];

/// Location → list of business ideas to suggest.
pub const SUGGESTION_TABLE: RuleTable<LocationKind> =
    RuleTable::new(SUGGESTION_RULES, LocationKind::Anywhere);

const FIRST_STEP_TRACK_RULES: &[Rule<Option<ResourceTrack>>] = &[
    Rule::contains("coffee", Some(ResourceTrack::FoodService)),
    Rule::contains("food", Some(ResourceTrack::FoodService)),
    Rule::contains("restaurant", Some(ResourceTrack::FoodService)),
    Rule::contains("pet", Some(ResourceTrack::PetCare)),
    Rule::contains("grooming", Some(ResourceTrack::PetCare)),
    Rule::contains("web", Some(ResourceTrack::WebStudio)),
    Rule::contains("design", Some(ResourceTrack::WebStudio)),
    Rule::contains("development", Some(ResourceTrack::WebStudio)),
];

/// Business → resource track for the registration step.
pub const FIRST_STEP_TRACK_TABLE: RuleTable<Option<ResourceTrack>> =
    RuleTable::new(FIRST_STEP_TRACK_RULES, None);

const LATER_STEP_TRACK_RULES: &[Rule<Option<ResourceTrack>>] = &[
    Rule::contains("coffee", Some(ResourceTrack::FoodService)),
    Rule::contains("cafe", Some(ResourceTrack::FoodService)),
    Rule::contains("pet", Some(ResourceTrack::PetCare)),
    Rule::contains("grooming", Some(ResourceTrack::PetCare)),
    Rule::contains("web", Some(ResourceTrack::WebStudio)),
    Rule::contains("design", Some(ResourceTrack::WebStudio)),
];

/// Business → resource track for steps two through five.
pub const LATER_STEP_TRACK_TABLE: RuleTable<Option<ResourceTrack>> =
    RuleTable::new(LATER_STEP_TRACK_RULES, None);

const ENTITY_RULES: &[Rule<EntityProfile>] = &[
    Rule::contains("coffee", EntityProfile::FoodService),
    Rule::contains("cafe", EntityProfile::FoodService),
    Rule::contains("restaurant", EntityProfile::FoodService),
    Rule::contains("food", EntityProfile::FoodService),
    Rule::contains("pet", EntityProfile::PetService),
    Rule::contains("grooming", EntityProfile::PetService),
    Rule::contains("veterinary", EntityProfile::PetService),
    Rule::contains("animal", EntityProfile::PetService),
    Rule::contains("web", EntityProfile::Technology),
    Rule::contains("design", EntityProfile::Technology),
    Rule::contains("development", EntityProfile::Technology),
    Rule::contains("tech", EntityProfile::Technology),
    Rule::contains("software", EntityProfile::Technology),
    Rule::contains("digital", EntityProfile::Technology),
    Rule::contains("personal", EntityProfile::PersonalService),
    Rule::contains("train", EntityProfile::PersonalService),
    Rule::contains("consult", EntityProfile::PersonalService),
    Rule::contains("coach", EntityProfile::PersonalService),
    Rule::contains("tutor", EntityProfile::PersonalService),
    Rule::contains("mobile", EntityProfile::Mobile),
    Rule::contains("truck", EntityProfile::Mobile),
    Rule::contains("delivery", EntityProfile::Mobile),
    Rule::contains("transport", EntityProfile::Mobile),
    Rule::contains("retail", EntityProfile::Retail),
    Rule::contains("shop", EntityProfile::Retail),
    Rule::contains("store", EntityProfile::Retail),
    Rule::contains("product", EntityProfile::Retail),
];

/// Business → legal-entity profile.
pub const ENTITY_TABLE: RuleTable<EntityProfile> =
    RuleTable::new(ENTITY_RULES, EntityProfile::General);
