//! Startup Planner - Rule-based business plan generator
//!
//! Turns a business idea and a location into a templated business plan,
//! with generated names, a synthetic market analysis and a set of planning
//! tools (checklist, financial calculator, competitor notes, marketing copy).
//! No external AI is involved: content comes from keyword rules and fixed
//! templates, and market figures are drawn from an injectable random source.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
