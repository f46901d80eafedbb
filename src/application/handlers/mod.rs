//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//! One handler per user action, grouped by area.

pub mod location;
pub mod market;
pub mod plan;
pub mod tools;

pub(crate) mod support;
