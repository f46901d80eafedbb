//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` / `RandomProvider` - Injectable randomness
//! - `ReverseGeocoder` - Coordinates to place names
//! - `WorkspaceStore` - Per-user workspace persistence
//! - `Clipboard` - Copying business names
//! - `ActionGate` - One in-flight submission per action
//! - `PlanRenderer` - Document output for plans

mod action_gate;
mod clipboard;
mod plan_renderer;
mod random_source;
mod reverse_geocoder;
mod workspace_store;

pub use action_gate::{ActionGate, ActionGateError, ActionKey, ActionPermit, GatedAction};
pub use clipboard::{Clipboard, ClipboardError};
pub use plan_renderer::{PlanFormat, PlanRenderer, RenderError, RenderOptions};
pub use random_source::{RandomProvider, RandomSource};
pub use reverse_geocoder::{Coordinates, GeocodedPlace, GeocodingError, ReverseGeocoder};
pub use workspace_store::{WorkspaceChange, WorkspaceStore, WorkspaceStoreError};
