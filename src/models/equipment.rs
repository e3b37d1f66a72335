//! Equipment model

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use super::{enums::EquipmentStatus, Identified};

/// Equipment record as returned by the API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub serial_number: String,
    pub category: String,
    #[serde(default)]
    pub department: String,
    pub assigned_employee: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub status: EquipmentStatus,
    /// Owning maintenance team
    pub team_id: Option<i32>,
    /// Server-joined team name
    #[serde(default)]
    pub team_name: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub notes: Option<String>,
    /// Number of requests not yet repaired or scrapped
    #[serde(default)]
    pub request_count: u32,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Identified for Equipment {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Create equipment request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEquipment {
    pub name: String,
    pub serial_number: String,
    pub category: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_employee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EquipmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_expiry: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update equipment request. Only present fields are sent.
///
/// Nullable columns take `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEquipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub assigned_employee: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EquipmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub team_id: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub notes: Option<Option<String>>,
}
