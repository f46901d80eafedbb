//! RenderPlanHandler - Generates a plan and renders it as a document.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::WorkspaceId;
use crate::ports::{PlanRenderer, RenderError, RenderOptions};

use super::generate_plan::{GeneratePlanCommand, GeneratePlanError, GeneratePlanHandler};

#[derive(Debug, Clone)]
pub struct RenderPlanResult {
    pub workspace_id: WorkspaceId,
    pub document: String,
    pub content_type: &'static str,
}

#[derive(Debug, Error)]
pub enum RenderPlanError {
    #[error(transparent)]
    Generate(#[from] GeneratePlanError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub struct RenderPlanHandler {
    generator: Arc<GeneratePlanHandler>,
    renderer: Arc<dyn PlanRenderer>,
}

impl RenderPlanHandler {
    pub fn new(generator: Arc<GeneratePlanHandler>, renderer: Arc<dyn PlanRenderer>) -> Self {
        Self {
            generator,
            renderer,
        }
    }

    pub async fn handle(
        &self,
        cmd: GeneratePlanCommand,
        options: RenderOptions,
    ) -> Result<RenderPlanResult, RenderPlanError> {
        let generated = self.generator.handle(cmd).await?;
        let document = self.renderer.render(&generated.plan, options)?;
        Ok(RenderPlanResult {
            workspace_id: generated.workspace_id,
            document,
            content_type: self.renderer.format().content_type(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gate::InMemoryActionGate;
    use crate::adapters::random::StdRandomProvider;
    use crate::adapters::rendering::MarkdownPlanRenderer;
    use crate::adapters::storage::InMemoryWorkspaceStore;
    use std::time::Duration;

    fn handler() -> RenderPlanHandler {
        let generator = GeneratePlanHandler::new(
            Arc::new(InMemoryWorkspaceStore::new()),
            Arc::new(InMemoryActionGate::new()),
            Arc::new(StdRandomProvider::seeded(1)),
            Duration::ZERO,
        );
        RenderPlanHandler::new(Arc::new(generator), Arc::new(MarkdownPlanRenderer::new()))
    }

    #[tokio::test]
    async fn renders_generated_plan_as_markdown() {
        let result = handler()
            .handle(
                GeneratePlanCommand {
                    business: "Food Truck".to_string(),
                    location: "Miami Beach".to_string(),
                    workspace_id: None,
                },
                RenderOptions::default(),
            )
            .await
            .unwrap();

        assert!(result.document.starts_with("# Food Truck in Miami Beach"));
        assert!(result.content_type.starts_with("text/markdown"));
    }

    #[tokio::test]
    async fn generation_errors_pass_through() {
        let err = handler()
            .handle(
                GeneratePlanCommand {
                    business: "Food Truck".to_string(),
                    location: "".to_string(),
                    workspace_id: None,
                },
                RenderOptions::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RenderPlanError::Generate(GeneratePlanError::Validation(_))));
    }
}
