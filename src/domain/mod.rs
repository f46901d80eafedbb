//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `planning` - Rule-driven business plan generation
//! - `market` - Synthetic market research and competition grading
//! - `toolkit` - Checklist, financial calculator, competitor research, marketing
//! - `workspace` - Transient per-user state behind the tools

pub mod foundation;
pub mod market;
pub mod planning;
pub mod toolkit;
pub mod workspace;
