//! HTTP adapter for the calculator, naming tips and name copying.

mod dto;
mod handlers;
mod routes;

pub use dto::{CopyNameRequest, FinancialsResponse, NamingTipsResponse};
pub use routes::tools_routes;
