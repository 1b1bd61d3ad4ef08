//! Worker domain types
//!
//! The validated shape of a worker record as the worker API returns it.
//! Every relation may be missing entirely, or present with most of its
//! fields null; only the numeric ids are mandatory. See `schema` for the
//! rules that enforce this.

use serde::{Deserialize, Serialize};

/// A worker record at `?type=document` detail level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRecord {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub mobile_verified: Option<i64>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_code_name: Option<String>,
    #[serde(default)]
    pub whatsapp_country_code: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub whatsapp_verified: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub registration_type: Option<String>,
    #[serde(default, rename = "type")]
    pub worker_type: Option<i64>,

    // Relations
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub nationality: Option<Nationality>,
    #[serde(default)]
    pub nationality_info: Option<Nationality>,
    #[serde(default)]
    pub current_location: Option<Location>,
    /// Opaque passthrough; the API does not commit to a shape here.
    #[serde(default)]
    pub contract_category_info: Option<serde_json::Value>,
    #[serde(default)]
    pub worker_overseas_detail_info: Option<OverseasDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_in: Option<String>,
    #[serde(default, rename = "name_zh_HK")]
    pub name_zh_hk: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nationality {
    pub id: i64,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_in: Option<String>,
    #[serde(default, rename = "name_zh_HK")]
    pub name_zh_hk: Option<String>,
    #[serde(default, rename = "name_zh_CN")]
    pub name_zh_cn: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_in: Option<String>,
    #[serde(default, rename = "name_zh_HK")]
    pub name_zh_hk: Option<String>,
    #[serde(default, rename = "name_zh_CN")]
    pub name_zh_cn: Option<String>,
}

/// E-registration / document tracking sub-record for overseas workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverseasDetail {
    pub worker_id: i64,
    #[serde(default)]
    pub eregistration_status: Option<String>,
    #[serde(default)]
    pub eregistration_file: Option<String>,
    #[serde(default)]
    pub eregistration_file_uploaded_at: Option<String>,
    #[serde(default)]
    pub passport_number_in_eregistration: Option<String>,
}
