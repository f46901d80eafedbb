//! Location handlers.

mod resolve_location;

pub use resolve_location::{
    ResolveLocationCommand, ResolveLocationError, ResolveLocationHandler, LOCATION_FAILURE_NOTICE,
};
