//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the planning domain.

mod errors;
mod ids;
mod percentage;
mod rating;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{CompetitorId, WorkspaceId};
pub use percentage::Percentage;
pub use rating::StarRating;
pub use timestamp::Timestamp;
