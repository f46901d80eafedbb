//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `http` - REST API (axum)
//! - `geocoding` - Reverse geocoding over HTTP, plus a static double
//! - `storage` - In-memory workspace store
//! - `random` - Seedable and scripted randomness
//! - `gate` - In-memory action gate
//! - `clipboard` - Clipboard stand-ins for a headless server
//! - `rendering` - Markdown plan documents

pub mod clipboard;
pub mod gate;
pub mod geocoding;
pub mod http;
pub mod random;
pub mod rendering;
pub mod storage;

pub use clipboard::{InMemoryClipboard, UnavailableClipboard};
pub use gate::InMemoryActionGate;
pub use geocoding::{BigDataCloudConfig, BigDataCloudGeocoder, StaticGeocoder};
pub use random::{ScriptedRandomSource, SharedScript, StdRandomProvider, StdRandomSource};
pub use rendering::MarkdownPlanRenderer;
pub use storage::{InMemoryWorkspaceStore, WorkspaceSweeper};
