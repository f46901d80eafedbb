//! Planning module - Business plan generation from keyword rules.
//!
//! - [`matcher`]: generic ordered rule tables
//! - [`rules`]: the concrete tables keyed on business and location text
//! - [`templates`]: fixed content per category
//! - [`names`]: bounded three-name generator
//! - [`assembler`]: composition into a [`PlanContent`]

pub mod alternatives;
pub mod assembler;
pub mod category;
pub mod content;
pub mod entity;
pub mod matcher;
pub mod names;
pub mod rationale;
pub mod request;
pub mod resources;
pub mod rules;
pub mod suggestions;
pub mod templates;

pub use alternatives::{alternative_suggestion, NO_ALTERNATIVE};
pub use assembler::{assemble_plan, complete_names, fallback_names};
pub use category::{Category, EntityProfile, LocationKind, ResourceTrack};
pub use content::{EntityRecommendation, PlanContent, PricingItem, Resource, RevenueYear, StartupStep};
pub use entity::recommend_entity;
pub use matcher::{Predicate, Rule, RuleTable};
pub use names::{generate_names, primary_token, NAME_COUNT};
pub use rationale::location_rationale;
pub use request::PlanRequest;
pub use resources::step_resources;
pub use suggestions::suggest_business;
pub use templates::PlanTemplate;
