//! Workspace module - Per-user transient state behind the interactive tools.
//!
//! A workspace remembers the last submitted request so that names, market
//! research and marketing materials can be regenerated without asking again.
//! It also holds the checklist and the manual competitor list.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{CompetitorId, Timestamp, ValidationError, WorkspaceId};
use crate::domain::planning::PlanRequest;
use crate::domain::toolkit::{
    analyze_competitors, marketing_materials, Checklist, CompetitiveInsights, Competitor, MarketingMaterials,
    NewCompetitor,
};

/// Business used for name regeneration before any plan exists.
pub const DEFAULT_NAME_BUSINESS: &str = "general";

/// Location used for name regeneration before any plan exists.
pub const DEFAULT_NAME_LOCATION: &str = "Local";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Competitor not found: {0}")]
    CompetitorNotFound(CompetitorId),
}

/// The last request, present once a plan has been generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanContext<'a> {
    pub business: &'a str,
    pub location: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    id: WorkspaceId,
    last_business: Option<String>,
    last_location: Option<String>,
    checklist: Checklist,
    competitors: Vec<Competitor>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Workspace {
    pub fn new(id: WorkspaceId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            last_business: None,
            last_location: None,
            checklist: Checklist::new(),
            competitors: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> WorkspaceId {
        self.id
    }

    pub fn last_business(&self) -> Option<&str> {
        self.last_business.as_deref()
    }

    pub fn last_location(&self) -> Option<&str> {
        self.last_location.as_deref()
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    /// Remembers the request of a newly generated plan.
    pub fn record_plan(&mut self, request: &PlanRequest) {
        self.last_business = Some(request.business().to_string());
        self.last_location = Some(request.location().to_string());
        self.touch();
    }

    /// Form reset. The last request stays so the tools keep working on the
    /// most recent plan until a new one is generated.
    pub fn start_over(&mut self) {
        self.touch();
    }

    /// The last request, if both fields are known.
    pub fn plan_context(&self) -> Option<PlanContext<'_>> {
        match (self.last_business.as_deref(), self.last_location.as_deref()) {
            (Some(business), Some(location)) => Some(PlanContext { business, location }),
            _ => None,
        }
    }

    /// Inputs for name regeneration, with defaults when no plan exists.
    pub fn name_inputs(&self) -> (&str, &str) {
        (
            self.last_business.as_deref().unwrap_or(DEFAULT_NAME_BUSINESS),
            self.last_location.as_deref().unwrap_or(DEFAULT_NAME_LOCATION),
        )
    }

    pub fn toggle_checklist(&mut self, index: usize) -> Result<bool, WorkspaceError> {
        let completed = self.checklist.toggle(index)?;
        self.touch();
        Ok(completed)
    }

    pub fn add_competitor(&mut self, input: NewCompetitor) -> Result<&Competitor, WorkspaceError> {
        let competitor = Competitor::from_input(input)?;
        self.competitors.push(competitor);
        self.touch();
        Ok(&self.competitors[self.competitors.len() - 1])
    }

    pub fn remove_competitor(&mut self, id: CompetitorId) -> Result<Competitor, WorkspaceError> {
        let index = self
            .competitors
            .iter()
            .position(|c| c.id == id)
            .ok_or(WorkspaceError::CompetitorNotFound(id))?;
        self.touch();
        Ok(self.competitors.remove(index))
    }

    /// Insights over the competitor list; `None` when it is empty.
    pub fn competitive_insights(&self) -> Option<CompetitiveInsights> {
        analyze_competitors(&self.competitors, self.last_location.as_deref().unwrap_or_default())
    }

    pub fn marketing_materials(&self) -> MarketingMaterials {
        marketing_materials(self.last_business.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_with_plan() -> Workspace {
        let mut ws = Workspace::new(WorkspaceId::new());
        ws.record_plan(&PlanRequest::new("Mobile Pet Grooming", "Downtown Springfield").unwrap());
        ws
    }

    fn competitor(name: &str) -> NewCompetitor {
        NewCompetitor {
            name: name.to_string(),
            location: "Springfield".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn new_workspace_has_no_plan_context() {
        let ws = Workspace::new(WorkspaceId::new());
        assert!(ws.plan_context().is_none());
        assert_eq!(ws.name_inputs(), ("general", "Local"));
    }

    #[test]
    fn recording_a_plan_overwrites_last_request() {
        let mut ws = workspace_with_plan();
        ws.record_plan(&PlanRequest::new("Coffee Shop", "Austin").unwrap());
        let ctx = ws.plan_context().unwrap();
        assert_eq!(ctx.business, "Coffee Shop");
        assert_eq!(ctx.location, "Austin");
    }

    #[test]
    fn start_over_keeps_last_request_and_tools() {
        let mut ws = workspace_with_plan();
        ws.toggle_checklist(0).unwrap();
        ws.add_competitor(competitor("Paws")).unwrap();
        let before = ws.updated_at();

        ws.start_over();

        let ctx = ws.plan_context().unwrap();
        assert_eq!(ctx.business, "Mobile Pet Grooming");
        assert_eq!(ctx.location, "Downtown Springfield");
        assert_eq!(ws.checklist().completed_count(), 1);
        assert_eq!(ws.competitors().len(), 1);
        assert!(ws.updated_at() >= before);
    }

    #[test]
    fn competitors_can_be_added_and_removed() {
        let mut ws = workspace_with_plan();
        let id = ws.add_competitor(competitor("Paws")).unwrap().id;
        ws.add_competitor(competitor("Suds")).unwrap();
        let removed = ws.remove_competitor(id).unwrap();
        assert_eq!(removed.name, "Paws");
        assert_eq!(ws.competitors().len(), 1);
        assert_eq!(ws.remove_competitor(id), Err(WorkspaceError::CompetitorNotFound(id)));
    }

    #[test]
    fn invalid_competitor_is_not_added() {
        let mut ws = workspace_with_plan();
        let err = ws.add_competitor(competitor("")).unwrap_err();
        assert!(matches!(err, WorkspaceError::Validation(_)));
        assert!(ws.competitors().is_empty());
    }

    #[test]
    fn insights_use_last_location() {
        let mut ws = workspace_with_plan();
        assert!(ws.competitive_insights().is_none());
        ws.add_competitor(competitor("Paws")).unwrap();
        let insights = ws.competitive_insights().unwrap();
        assert!(insights.advantages[0].contains("Downtown Springfield"));
    }

    #[test]
    fn marketing_materials_follow_last_business() {
        let mut ws = workspace_with_plan();
        assert_eq!(ws.marketing_materials().name_suggestions[0], "Mobile Pet Grooming Pro");
        ws.start_over();
        assert_eq!(ws.marketing_materials().name_suggestions[0], "Mobile Pet Grooming Pro");
        assert_eq!(
            Workspace::new(WorkspaceId::new()).marketing_materials().name_suggestions[0],
            "Business Pro"
        );
    }
}
