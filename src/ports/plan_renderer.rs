//! Plan Renderer Port - Turning a plan into a shareable document.
//!
//! The domain produces [`PlanContent`]; adapters such as the markdown
//! renderer decide how it looks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::planning::PlanContent;

/// Output format of a rendered plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanFormat {
    #[default]
    Markdown,
}

impl PlanFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            PlanFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }
}

/// Which optional sections to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub include_resources: bool,
    pub include_entity: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_resources: true,
            include_entity: true,
        }
    }
}

impl RenderOptions {
    /// Plan body only, no links or legal advice.
    pub fn compact() -> Self {
        Self {
            include_resources: false,
            include_entity: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Plan is missing section: {0}")]
    MissingSection(&'static str),

    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Port for rendering plans.
pub trait PlanRenderer: Send + Sync {
    fn format(&self) -> PlanFormat;

    /// Renders the full document.
    ///
    /// # Errors
    ///
    /// `MissingSection` when a required list is empty.
    fn render(&self, plan: &PlanContent, options: RenderOptions) -> Result<String, RenderError>;
}
