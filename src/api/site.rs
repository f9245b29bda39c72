//! Whole-page endpoint.
//!
//! Configuration errors fail the page; collection errors only mark their
//! own section as failed.

use axum::extract::{Query, State};
use serde::Serialize;
use serde_json::Value;

use super::{success, ApiResult, ProjectQuery};
use crate::content::projects::CategoryFilter;
use crate::content::SiteContent;
use crate::hub::ConfigIssue;
use crate::models::RecruitmentText;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePayload {
    pub config: Value,
    pub warnings: Vec<ConfigIssue>,
    pub recruitment: RecruitmentText,
    pub projects_description: String,
    #[serde(flatten)]
    pub content: SiteContent,
}

/// GET /api/site - Configuration plus every collection.
pub async fn get_site(
    State(state): State<AppState>,
    Query(params): Query<ProjectQuery>,
) -> ApiResult<SitePayload> {
    let loaded = state.hub.load().await?;
    let filter = CategoryFilter::parse(params.category.as_deref());
    let content = SiteContent::load(&state.store, &filter).await;

    success(SitePayload {
        config: loaded.document.clone(),
        warnings: loaded.warnings.clone(),
        recruitment: loaded.config.recruitment(),
        projects_description: loaded.config.projects_description().to_string(),
        content,
    })
}
