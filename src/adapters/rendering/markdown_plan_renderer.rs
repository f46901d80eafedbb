//! Markdown plan renderer adapter.
//!
//! Produces a shareable document with the same section order as the on-page
//! report: names, location rationale, overview, market, revenue, pricing,
//! projection, steps, marketing and challenges.

use std::fmt::Write;

use crate::domain::planning::{PlanContent, StartupStep};
use crate::ports::{PlanFormat, PlanRenderer, RenderError, RenderOptions};

#[derive(Debug, Clone, Default)]
pub struct MarkdownPlanRenderer;

impl MarkdownPlanRenderer {
    pub fn new() -> Self {
        Self
    }

    fn check_sections(plan: &PlanContent) -> Result<(), RenderError> {
        let required: [(&'static str, bool); 6] = [
            ("businessNames", plan.business_names.is_empty()),
            ("revenueStreams", plan.revenue_streams.is_empty()),
            ("pricing", plan.pricing.is_empty()),
            ("revenueProjection", plan.revenue_projection.is_empty()),
            ("startupSteps", plan.startup_steps.is_empty()),
            ("marketingStrategies", plan.marketing_strategies.is_empty()),
        ];
        match required.iter().find(|(_, empty)| *empty) {
            Some((name, _)) => Err(RenderError::MissingSection(*name)),
            None => Ok(()),
        }
    }

    fn write_bullets(out: &mut String, heading: &str, items: &[String]) -> Result<(), RenderError> {
        writeln!(out, "## {}\n", heading)?;
        for item in items {
            writeln!(out, "- {}", item)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_step(
        out: &mut String,
        number: usize,
        step: &StartupStep,
        with_resources: bool,
    ) -> Result<(), RenderError> {
        writeln!(out, "### {}. {}\n", number, step.title)?;
        writeln!(out, "{}\n", step.description)?;
        if with_resources && !step.resources.is_empty() {
            writeln!(out, "Helpful resources:\n")?;
            for resource in &step.resources {
                writeln!(
                    out,
                    "- [{}]({}) - {}",
                    resource.name, resource.link, resource.description
                )?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl PlanRenderer for MarkdownPlanRenderer {
    fn format(&self) -> PlanFormat {
        PlanFormat::Markdown
    }

    fn render(&self, plan: &PlanContent, options: RenderOptions) -> Result<String, RenderError> {
        Self::check_sections(plan)?;
        let mut out = String::new();

        writeln!(out, "# {} in {}\n", plan.business, plan.location)?;

        writeln!(out, "## Potential Business Names\n")?;
        for (i, name) in plan.business_names.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, name)?;
        }
        writeln!(out)?;

        writeln!(out, "## Why This Location?\n\n{}\n", plan.location_rationale)?;
        writeln!(out, "## Business Overview\n\n{}\n", plan.overview)?;
        writeln!(out, "## Target Market\n\n{}\n", plan.target_market)?;

        Self::write_bullets(&mut out, "Revenue Streams", &plan.revenue_streams)?;

        writeln!(out, "## Suggested Pricing\n")?;
        writeln!(out, "| Item | Price |")?;
        writeln!(out, "|------|-------|")?;
        for row in &plan.pricing {
            writeln!(out, "| {} | {} |", row.item, row.price)?;
        }
        writeln!(out)?;

        writeln!(out, "## 5-Year Revenue Projection\n")?;
        writeln!(out, "| Year | Revenue |")?;
        writeln!(out, "|------|---------|")?;
        for row in &plan.revenue_projection {
            writeln!(out, "| {} | {} |", row.year, row.revenue)?;
        }
        writeln!(out)?;

        writeln!(out, "## First 5 Steps to Get Started\n")?;
        for (i, step) in plan.startup_steps.iter().enumerate() {
            Self::write_step(&mut out, i + 1, step, options.include_resources)?;
        }

        Self::write_bullets(&mut out, "Marketing Strategies", &plan.marketing_strategies)?;
        Self::write_bullets(&mut out, "Potential Challenges", &plan.challenges)?;

        if options.include_entity {
            let entity = &plan.entity_recommendation;
            writeln!(out, "## Recommended Business Structure\n")?;
            writeln!(out, "**{}**: {}\n", entity.recommended, entity.reasoning)?;
            Self::write_bullets(&mut out, "Benefits", &entity.benefits)?;
            Self::write_bullets(&mut out, "Considerations", &entity.considerations)?;
        }

        writeln!(out, "## Alternative Idea\n\n{}", plan.alternative_suggestion)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::planning::{assemble_plan, PlanRequest};
    use crate::ports::RandomSource;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    fn plan() -> PlanContent {
        let request = PlanRequest::new("Coffee Shop", "Near the University").unwrap();
        assemble_plan(&request, &mut Fixed(0.3))
    }

    #[test]
    fn renders_title_and_sections_in_order() {
        let doc = MarkdownPlanRenderer::new()
            .render(&plan(), RenderOptions::default())
            .unwrap();

        assert!(doc.starts_with("# Coffee Shop in Near the University\n"));
        let order = [
            "## Potential Business Names",
            "## Why This Location?",
            "## Business Overview",
            "## Target Market",
            "## Revenue Streams",
            "## Suggested Pricing",
            "## 5-Year Revenue Projection",
            "## First 5 Steps to Get Started",
            "## Marketing Strategies",
            "## Potential Challenges",
            "## Recommended Business Structure",
            "## Alternative Idea",
        ];
        let positions: Vec<usize> = order.iter().map(|h| doc.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn renders_tables_and_numbered_names() {
        let plan = plan();
        let doc = MarkdownPlanRenderer::new()
            .render(&plan, RenderOptions::default())
            .unwrap();

        assert!(doc.contains(&format!("1. {}", plan.business_names[0])));
        assert!(doc.contains(&format!("3. {}", plan.business_names[2])));
        let first_price = &plan.pricing[0];
        assert!(doc.contains(&format!("| {} | {} |", first_price.item, first_price.price)));
        assert!(doc.contains("| Year 1 |"));
    }

    #[test]
    fn resources_render_as_links() {
        let plan = plan();
        let doc = MarkdownPlanRenderer::new()
            .render(&plan, RenderOptions::default())
            .unwrap();
        let resource = &plan.startup_steps[0].resources[0];
        assert!(doc.contains(&format!("- [{}]({})", resource.name, resource.link)));
    }

    #[test]
    fn compact_render_skips_resources_and_entity() {
        let doc = MarkdownPlanRenderer::new()
            .render(&plan(), RenderOptions::compact())
            .unwrap();
        assert!(!doc.contains("Helpful resources:"));
        assert!(!doc.contains("## Recommended Business Structure"));
        assert!(doc.contains("## Alternative Idea"));
    }

    #[test]
    fn empty_names_is_missing_section() {
        let mut plan = plan();
        plan.business_names.clear();
        let err = MarkdownPlanRenderer::new()
            .render(&plan, RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingSection("businessNames")));
    }

    #[test]
    fn reports_markdown_format() {
        assert_eq!(MarkdownPlanRenderer::new().format(), PlanFormat::Markdown);
    }
}
