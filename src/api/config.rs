//! Hub configuration endpoint.

use axum::extract::State;
use serde::Serialize;
use serde_json::Value;

use super::{success, ApiResult};
use crate::hub::ConfigIssue;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ConfigPayload {
    pub config: Value,
    pub warnings: Vec<ConfigIssue>,
}

/// GET /api/config - The validated, substituted configuration.
pub async fn get_config(State(state): State<AppState>) -> ApiResult<ConfigPayload> {
    let loaded = state.hub.load().await?;

    success(ConfigPayload {
        config: loaded.document.clone(),
        warnings: loaded.warnings.clone(),
    })
}
