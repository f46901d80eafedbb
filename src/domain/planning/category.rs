//! Business and location categories the rule tables resolve to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed business-template bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CoffeeCafe,
    PetGrooming,
    WebDesign,
    FoodTruck,
    PersonalTraining,
    Generic,
}

impl Category {
    /// All categories, fallback last.
    pub const ALL: [Category; 6] = [
        Category::CoffeeCafe,
        Category::PetGrooming,
        Category::WebDesign,
        Category::FoodTruck,
        Category::PersonalTraining,
        Category::Generic,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::CoffeeCafe => "Coffee / Cafe",
            Category::PetGrooming => "Pet Grooming",
            Category::WebDesign => "Web Design & Development",
            Category::FoodTruck => "Food Truck",
            Category::PersonalTraining => "Personal Training",
            Category::Generic => "General Business",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Kind of place a location string describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Campus,
    Downtown,
    Beach,
    Suburban,
    TechHub,
    Tourist,
    Family,
    Anywhere,
}

/// Resource track used to pick step-specific links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceTrack {
    FoodService,
    PetCare,
    WebStudio,
}

/// Business profile used for the legal-entity recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityProfile {
    FoodService,
    PetService,
    Technology,
    PersonalService,
    Mobile,
    Retail,
    General,
}
