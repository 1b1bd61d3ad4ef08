use axum::Router;
use std::sync::Arc;
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::Settings;
use crate::middleware::request_id_layer;
use crate::routes;
use crate::services::WorkerApiClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub worker_api: WorkerApiClient,
}

impl AppState {
    pub fn new(settings: Settings, worker_api: WorkerApiClient) -> Arc<Self> {
        Arc::new(Self {
            settings,
            worker_api,
        })
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    // Build trace layer (use DEBUG for spans to reduce overhead at INFO level)
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    // Request ID layers
    let (set_request_id, propagate_request_id) = request_id_layer();

    // Icon and placeholder files live under the public asset root
    let assets = ServeDir::new(&state.settings.public_dir);

    Router::new()
        .merge(routes::page_router())
        .nest_service("/assets", assets)
        // Middleware stack (applied bottom-up)
        .layer(propagate_request_id)
        .layer(trace_layer)
        .layer(set_request_id)
        .with_state(state)
}
