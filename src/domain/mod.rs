//! Domain types for the worker profile page
//!
//! `worker` holds the validated upstream record shape; `schema` enforces it.

pub mod schema;
pub mod worker;

pub use schema::{validate, SchemaViolation};
pub use worker::{Location, Nationality, OverseasDetail, Role, WorkerRecord};
