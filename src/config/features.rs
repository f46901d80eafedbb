//! Feature toggles.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Keep internal failure reasons in 5xx error bodies.
    pub verbose_errors: bool,

    /// Per-request spans from `TraceLayer`.
    pub enable_tracing: bool,

    /// Mount `POST /api/plans/markdown`.
    pub enable_markdown_export: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            verbose_errors: false,
            enable_tracing: true,
            enable_markdown_export: true,
        }
    }
}
