pub mod health;
pub mod worker;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the router with all routes
pub fn page_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        // Profile page
        .route("/worker/:id", get(worker::worker_page))
}
