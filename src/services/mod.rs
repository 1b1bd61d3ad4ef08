//! Service layer modules for external integrations.
//!
//! Contains the client for the upstream worker API.

pub mod worker_api;

pub use worker_api::WorkerApiClient;
