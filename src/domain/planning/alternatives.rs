//! Alternative business suggestion shown alongside the plan.

use super::category::{Category, LocationKind};
use super::rules::{ALTERNATIVE_BUSINESS_TABLE, ALTERNATIVE_LOCATION_TABLE};
use crate::ports::RandomSource;

/// Used when every candidate overlaps with the requested business.
pub const NO_ALTERNATIVE: &str =
    "Consider a mobile or online version of your business for lower overhead and broader reach.";

const CAMPUS: &[&str] = &[
    "Student Tutoring Service - Higher demand and recurring revenue",
    "Campus Food Delivery - Leverage existing student population",
    "Student Housing Services - Address housing shortages",
    "Campus Tech Support - Students always need tech help",
    "Student Fitness Coaching - Health-conscious demographic",
];

const DOWNTOWN: &[&str] = &[
    "Food Truck - Lower overhead than brick-and-mortar",
    "Personal Training - High-income professionals",
    "Web Design Agency - Business-to-business opportunities",
    "Pet Grooming - Urban pet owners with disposable income",
    "Mobile Car Detailing - Convenience for busy professionals",
];

const BEACH: &[&str] = &[
    "Beach Equipment Rental - Seasonal tourism revenue",
    "Surf Lessons - Leverage natural environment",
    "Beach Photography - Tourist market opportunities",
    "Beach Food Truck - Mobile and seasonal flexibility",
    "Water Sports Equipment - Year-round local market",
];

const SUBURBAN: &[&str] = &[
    "Lawn Care Services - Steady residential demand",
    "House Cleaning - Busy families need help",
    "Pet Sitting - Suburban pet owners travel",
    "Personal Training - Health-conscious suburbanites",
    "Home Maintenance - Aging homes need upkeep",
];

const TECH_HUB: &[&str] = &[
    "Web Development Agency - Tech-savvy clientele",
    "IT Consulting - Growing tech companies",
    "Digital Marketing - Tech companies need marketing",
    "Tech Support - Always in demand",
    "Software Training - Skill development market",
];

const TOURIST: &[&str] = &[
    "Tour Guide Services - Direct tourism revenue",
    "Souvenir Shop - Tourist impulse purchases",
    "Local Food Tours - Experience-based tourism",
    "Photography Services - Tourist memories",
    "Transportation Services - Tourist mobility needs",
];

const COFFEE: &[&str] = &[
    "Food Truck - Lower overhead and flexibility",
    "Mobile Coffee Service - Office and event catering",
    "Coffee Bean Subscription - Recurring revenue model",
    "Coffee Equipment Sales - B2B opportunities",
    "Coffee Consulting - Help others start coffee businesses",
];

const PET: &[&str] = &[
    "Mobile Pet Grooming - Convenience premium",
    "Pet Sitting Services - Lower overhead",
    "Pet Photography - Creative and profitable",
    "Pet Training - Higher value services",
    "Pet Supplies Store - Recurring purchases",
];

const WEB: &[&str] = &[
    "Digital Marketing Agency - Broader service offering",
    "SEO Services - Recurring revenue model",
    "E-commerce Consulting - Growing market",
    "Content Creation - Scalable service",
    "App Development - Higher value projects",
];

const FOOD: &[&str] = &[
    "Ghost Kitchen - Lower overhead, delivery focus",
    "Catering Services - Higher value events",
    "Meal Prep Service - Subscription model",
    "Food Delivery Aggregator - Technology platform",
    "Food Consulting - Help others start food businesses",
];

const FITNESS: &[&str] = &[
    "Online Fitness Coaching - Scalable and global",
    "Group Fitness Classes - Higher revenue per hour",
    "Nutrition Consulting - Complementary service",
    "Fitness Equipment Sales - Product revenue",
    "Corporate Wellness Programs - B2B opportunities",
];

const ANY_BUSINESS: &[&str] = &[
    "Online Service - Lower overhead and global reach",
    "Subscription Model - Predictable recurring revenue",
    "B2B Services - Higher value clients",
    "Mobile Service - Convenience premium",
    "Consulting - Leverage expertise for higher rates",
];

fn location_pool(location: &str) -> &'static [&'static str] {
    match ALTERNATIVE_LOCATION_TABLE.resolve(location) {
        LocationKind::Campus => CAMPUS,
        LocationKind::Downtown => DOWNTOWN,
        LocationKind::Beach => BEACH,
        LocationKind::Suburban => SUBURBAN,
        LocationKind::TechHub => TECH_HUB,
        LocationKind::Tourist => TOURIST,
        LocationKind::Family | LocationKind::Anywhere => &[],
    }
}

fn business_pool(business: &str) -> &'static [&'static str] {
    match ALTERNATIVE_BUSINESS_TABLE.resolve(business) {
        Category::CoffeeCafe => COFFEE,
        Category::PetGrooming => PET,
        Category::WebDesign => WEB,
        Category::FoodTruck => FOOD,
        Category::PersonalTraining => FITNESS,
        Category::Generic => &[],
    }
}

/// Alternatives that do not overlap with the requested business.
///
/// An entry is dropped when it mentions the first word of the business, or
/// when its own first word appears in the business.
pub fn candidate_alternatives(business: &str, location: &str) -> Vec<&'static str> {
    let business = business.to_lowercase();
    let first_word = business.split(' ').next().unwrap_or_default();

    location_pool(location)
        .iter()
        .chain(business_pool(&business))
        .chain(ANY_BUSINESS)
        .copied()
        .filter(|alt| {
            let alt_lower = alt.to_lowercase();
            let alt_first = alt_lower.split(' ').next().unwrap_or_default();
            !alt_lower.contains(first_word) && !business.contains(alt_first)
        })
        .collect()
}

/// Picks one non-overlapping alternative, or [`NO_ALTERNATIVE`].
pub fn alternative_suggestion(business: &str, location: &str, rng: &mut dyn RandomSource) -> String {
    let candidates = candidate_alternatives(business, location);
    rng.pick(&candidates)
        .copied()
        .unwrap_or(NO_ALTERNATIVE)
        .to_string()
}
