//! Schema validation for raw worker payloads
//!
//! Mirrors the upstream contract: numeric ids are required, every other
//! field is optional and independently nullable, and URL-typed strings must
//! parse when present. Violations carry the offending field path so an
//! upstream regression is diagnosable from a single log line.
//!
//! Tolerance covers absence and null, not type mismatch: a numeric
//! `fullname` is rejected, a missing one is not.

use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use super::worker::WorkerRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{path}`: expected {expected}")]
pub struct SchemaViolation {
    pub path: String,
    pub expected: &'static str,
}

fn violation(path: impl Into<String>, expected: &'static str) -> SchemaViolation {
    SchemaViolation {
        path: path.into(),
        expected,
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Validate an arbitrary JSON value against the worker document shape.
///
/// Pure function of its input; on success the value decodes into a
/// [`WorkerRecord`].
pub fn validate(value: &Value) -> Result<WorkerRecord, SchemaViolation> {
    let obj = value
        .as_object()
        .ok_or_else(|| violation("data", "object"))?;

    require_int(obj, "", "id")?;
    require_int(obj, "", "user_id")?;

    for key in [
        "reference_id",
        "fullname",
        "email",
        "image",
        "about",
        "mobile_number",
        "country_code",
        "country_code_name",
        "whatsapp_country_code",
        "whatsapp_number",
        "created_at",
        "updated_at",
        "registration_type",
    ] {
        optional_str(obj, "", key)?;
    }
    for key in [
        "email_verified",
        "mobile_verified",
        "whatsapp_verified",
        "status",
        "type",
    ] {
        optional_int(obj, "", key)?;
    }

    if let Some(role) = optional_object(obj, "", "role")? {
        require_int(role, "role", "id")?;
        for key in ["name", "name_en", "name_in", "name_zh_HK"] {
            optional_str(role, "role", key)?;
        }
    }
    for relation in ["nationality", "nationality_info"] {
        if let Some(nat) = optional_object(obj, "", relation)? {
            require_int(nat, relation, "id")?;
            for key in ["name_en", "name_in", "name_zh_HK", "name_zh_CN"] {
                optional_str(nat, relation, key)?;
            }
        }
    }
    if let Some(loc) = optional_object(obj, "", "current_location")? {
        require_int(loc, "current_location", "id")?;
        for key in ["name_en", "name_in", "name_zh_HK", "name_zh_CN"] {
            optional_str(loc, "current_location", key)?;
        }
    }

    // contract_category_info passes through unchecked

    if let Some(detail) = optional_object(obj, "", "worker_overseas_detail_info")? {
        let path = "worker_overseas_detail_info";
        require_int(detail, path, "worker_id")?;
        optional_str(detail, path, "eregistration_status")?;
        optional_url(detail, path, "eregistration_file")?;
        optional_str(detail, path, "eregistration_file_uploaded_at")?;
        optional_str(detail, path, "passport_number_in_eregistration")?;
    }

    serde_json::from_value(value.clone()).map_err(|_| violation("data", "worker record"))
}

fn require_int(obj: &Map<String, Value>, path: &str, key: &str) -> Result<(), SchemaViolation> {
    match obj.get(key) {
        Some(v) if v.as_i64().is_some() => Ok(()),
        _ => Err(violation(join(path, key), "integer")),
    }
}

fn optional_int(obj: &Map<String, Value>, path: &str, key: &str) -> Result<(), SchemaViolation> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(()),
        Some(v) if v.as_i64().is_some() => Ok(()),
        Some(_) => Err(violation(join(path, key), "integer or null")),
    }
}

fn optional_str(obj: &Map<String, Value>, path: &str, key: &str) -> Result<(), SchemaViolation> {
    match obj.get(key) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(violation(join(path, key), "string or null")),
    }
}

fn optional_url(obj: &Map<String, Value>, path: &str, key: &str) -> Result<(), SchemaViolation> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(s)) => Url::parse(s)
            .map(|_| ())
            .map_err(|_| violation(join(path, key), "well-formed URL")),
        Some(_) => Err(violation(join(path, key), "URL string or null")),
    }
}

fn optional_object<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<Option<&'a Map<String, Value>>, SchemaViolation> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(m)) => Ok(Some(m)),
        Some(_) => Err(violation(join(path, key), "object or null")),
    }
}
