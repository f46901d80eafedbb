//! Shared application state for all routers.

use std::str::FromStr;
use std::sync::Arc;

use crate::application::{
    AnalyzeMarketHandler, CalculateFinancialsHandler, ChecklistHandler, CompetitorsHandler,
    CopyNameHandler, GeneratePlanHandler, MarketingMaterialsHandler, RegenerateNamesHandler,
    RenderPlanHandler, ResolveLocationHandler, StartOverHandler, SuggestBusinessHandler,
};
use crate::config::AppConfig;
use crate::domain::foundation::{CompetitorId, ValidationError, WorkspaceId};
use crate::ports::{ActionGate, Clipboard, PlanRenderer, RandomProvider, ReverseGeocoder, WorkspaceStore};

use super::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub generate_plan: Arc<GeneratePlanHandler>,
    pub render_plan: Arc<RenderPlanHandler>,
    pub suggest_business: Arc<SuggestBusinessHandler>,
    pub regenerate_names: Arc<RegenerateNamesHandler>,
    pub start_over: Arc<StartOverHandler>,
    pub resolve_location: Arc<ResolveLocationHandler>,
    pub analyze_market: Arc<AnalyzeMarketHandler>,
    pub checklist: Arc<ChecklistHandler>,
    pub competitors: Arc<CompetitorsHandler>,
    pub marketing: Arc<MarketingMaterialsHandler>,
    pub financials: Arc<CalculateFinancialsHandler>,
    pub copy_name: Arc<CopyNameHandler>,
    /// Keep internal failure reasons in error bodies.
    pub verbose_errors: bool,
    pub markdown_export: bool,
}

/// Port implementations the handlers are built from.
#[derive(Clone)]
pub struct AppAdapters {
    pub store: Arc<dyn WorkspaceStore>,
    pub gate: Arc<dyn ActionGate>,
    pub random: Arc<dyn RandomProvider>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
    pub clipboard: Arc<dyn Clipboard>,
    pub renderer: Arc<dyn PlanRenderer>,
}

impl AppState {
    pub fn new(adapters: AppAdapters, config: &AppConfig) -> Self {
        let AppAdapters {
            store,
            gate,
            random,
            geocoder,
            clipboard,
            renderer,
        } = adapters;
        let pacing = &config.pacing;

        let generate_plan = Arc::new(GeneratePlanHandler::new(
            store.clone(),
            gate.clone(),
            random.clone(),
            pacing.plan_delay(),
        ));

        Self {
            render_plan: Arc::new(RenderPlanHandler::new(generate_plan.clone(), renderer)),
            generate_plan,
            suggest_business: Arc::new(SuggestBusinessHandler::new(
                gate.clone(),
                random.clone(),
                pacing.suggestion_delay(),
            )),
            regenerate_names: Arc::new(RegenerateNamesHandler::new(store.clone(), random.clone())),
            start_over: Arc::new(StartOverHandler::new(store.clone())),
            resolve_location: Arc::new(ResolveLocationHandler::new(
                geocoder,
                gate.clone(),
                config.geocoding.timeout(),
                config.geocoding.max_position_age(),
            )),
            analyze_market: Arc::new(AnalyzeMarketHandler::new(
                store.clone(),
                gate,
                random,
                pacing.analysis_delay(),
            )),
            checklist: Arc::new(ChecklistHandler::new(store.clone())),
            competitors: Arc::new(CompetitorsHandler::new(store.clone())),
            marketing: Arc::new(MarketingMaterialsHandler::new(store)),
            financials: Arc::new(CalculateFinancialsHandler::new()),
            copy_name: Arc::new(CopyNameHandler::new(clipboard)),
            verbose_errors: config.features.verbose_errors,
            markdown_export: config.features.enable_markdown_export,
        }
    }

    /// Converts a handler error, redacting internals unless verbose.
    pub fn fail(&self, err: impl Into<ApiError>) -> ApiError {
        let err = err.into();
        if self.verbose_errors {
            err
        } else {
            err.redacted()
        }
    }
}

fn parse_id<T: FromStr>(field: &str, raw: &str) -> Result<T, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::invalid_format(field, "must be a UUID"))
}

pub fn parse_workspace_id(raw: &str) -> Result<WorkspaceId, ValidationError> {
    parse_id("workspaceId", raw)
}

pub fn parse_competitor_id(raw: &str) -> Result<CompetitorId, ValidationError> {
    parse_id("competitorId", raw)
}

/// Optional workspace id from a request body; blank counts as absent.
pub fn parse_optional_workspace_id(raw: Option<&str>) -> Result<Option<WorkspaceId>, ValidationError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => parse_workspace_id(raw).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_workspace_ids() {
        let id = WorkspaceId::new();
        assert_eq!(parse_workspace_id(&id.to_string()).unwrap(), id);
        assert_eq!(parse_workspace_id("nope").unwrap_err().field(), "workspaceId");
    }

    #[test]
    fn blank_optional_id_is_absent() {
        assert_eq!(parse_optional_workspace_id(None).unwrap(), None);
        assert_eq!(parse_optional_workspace_id(Some("  ")).unwrap(), None);
        assert!(parse_optional_workspace_id(Some("x")).is_err());
    }

    #[test]
    fn competitor_id_errors_name_field() {
        assert_eq!(parse_competitor_id("x").unwrap_err().field(), "competitorId");
    }
}
