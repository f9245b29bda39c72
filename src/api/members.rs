//! Member API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::content::members::MemberRoster;
use crate::models::Member;
use crate::store::Collection;
use crate::AppState;

/// GET /api/members - Members in roster order.
pub async fn list_members(State(state): State<AppState>) -> ApiResult<MemberRoster> {
    state.hub.load().await?;

    let members = state
        .store
        .fetch_collection::<Member>(Collection::Members)
        .await?;

    success(MemberRoster::from_unordered(members))
}
