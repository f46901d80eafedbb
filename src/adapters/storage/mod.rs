//! Storage adapters - Workspace persistence and idle eviction.

mod in_memory_workspace_store;
mod workspace_sweeper;

pub use in_memory_workspace_store::InMemoryWorkspaceStore;
pub use workspace_sweeper::WorkspaceSweeper;
