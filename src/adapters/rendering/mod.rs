//! Rendering adapters - Plan documents.

mod markdown_plan_renderer;

pub use markdown_plan_renderer::MarkdownPlanRenderer;
