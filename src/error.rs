//! Page-level error handling
//!
//! Every failure between the worker fetch and the rendered document collapses
//! to one centered error notice. Upstream status codes and validation paths
//! are logged, never shown to the visitor.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::SchemaViolation;
use crate::render;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("worker API returned status {0}")]
    Status(u16),

    #[error("worker API request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("worker payload rejected: {0}")]
    Schema(#[from] SchemaViolation),
}

impl PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            // An upstream 404 means this worker does not exist
            Self::Status(404) => StatusCode::NOT_FOUND,
            Self::Status(_) | Self::Upstream(_) | Self::Schema(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            Self::Status(status) => {
                tracing::warn!(status = *status, "worker fetch failed");
            }
            Self::Upstream(e) => {
                tracing::error!(error = %e, "worker API unreachable");
            }
            Self::Schema(v) => {
                tracing::error!(path = %v.path, expected = v.expected, "worker payload failed validation");
            }
        }

        (self.status_code(), Html(render::error_page())).into_response()
    }
}

pub type PageResult<T> = Result<T, PageError>;
