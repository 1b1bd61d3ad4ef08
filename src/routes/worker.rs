//! Worker profile page route

use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::PageResult;
use crate::render;
use crate::view::{self, DemoContent};

/// GET /worker/:id
///
/// Fetches the worker, assembles the view model, and renders the page. Any
/// fetch or validation failure falls through to the centered error notice
/// via `PageError`.
pub async fn worker_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> PageResult<Html<String>> {
    let worker = state.worker_api.fetch_worker(&id).await?;

    let meta = view::page_meta(&worker, &state.settings.public_base_url);
    let model = view::assemble(&worker, &DemoContent);

    Ok(Html(render::profile_page(&model, &meta)))
}
