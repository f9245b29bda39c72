//! Events and impact points, served in file order.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{Event, ImpactPoint};
use crate::store::Collection;
use crate::AppState;

/// GET /api/events - Past events.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Vec<Event>> {
    state.hub.load().await?;
    success(state.store.fetch_collection(Collection::Events).await?)
}

/// GET /api/impact-points - Headline impact statistics.
pub async fn list_impact_points(State(state): State<AppState>) -> ApiResult<Vec<ImpactPoint>> {
    state.hub.load().await?;
    success(state.store.fetch_collection(Collection::ImpactPoints).await?)
}
