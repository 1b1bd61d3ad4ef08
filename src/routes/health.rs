use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub worker_api: String,
}

/// Health check endpoint - public
///
/// The worker API has no health endpoint of its own, so this only reports
/// which upstream base the service was configured against.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        worker_api: state.settings.worker_api_url.clone(),
    })
}
