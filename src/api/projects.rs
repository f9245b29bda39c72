//! Project API endpoints.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::content::projects::{CategoryFilter, ProjectGallery};
use crate::models::Project;
use crate::store::Collection;
use crate::AppState;

/// Project query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    /// Category to show; absent or `all` shows every project.
    #[serde(default)]
    pub category: Option<String>,
}

/// GET /api/projects - Projects filtered by category, with the category set.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectQuery>,
) -> ApiResult<ProjectGallery> {
    state.hub.load().await?;

    let projects = state
        .store
        .fetch_collection::<Project>(Collection::Projects)
        .await?;
    let filter = CategoryFilter::parse(params.category.as_deref());

    success(ProjectGallery::new(projects, &filter))
}
