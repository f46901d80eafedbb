//! HTTP adapter for resolving the user's current location.

mod dto;
mod handlers;
mod routes;

pub use dto::{ResolveLocationRequest, ResolveLocationResponse};
pub use routes::location_routes;
