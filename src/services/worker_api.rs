//! Worker API client
//!
//! Fetches a single worker document from the upstream worker API. Responses
//! are never cached; every page view reaches the live backend.

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::domain::{self, WorkerRecord};
use crate::error::PageError;

/// Client for the worker API.
#[derive(Clone)]
pub struct WorkerApiClient {
    client: Client,
    base_url: String,
}

impl WorkerApiClient {
    /// Create a new worker API client.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(base_url = base_url, "Worker API client initialized");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one worker at document detail level.
    ///
    /// Non-2xx responses fail without reading the body; 2xx bodies must carry
    /// a worker-shaped object under `data`.
    #[instrument(skip(self))]
    pub async fn fetch_worker(&self, id: &str) -> Result<WorkerRecord, PageError> {
        let url = format!("{}/{}?type=document", self.base_url, id);

        debug!(url = %url, "worker API request");

        let response = self
            .client
            .get(&url)
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let data = body.get("data").unwrap_or(&Value::Null);
        let worker = domain::validate(data)?;

        Ok(worker)
    }
}
