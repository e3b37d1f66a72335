//! Maintenance request model

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;

use super::{
    enums::{Priority, RequestType, Stage},
    Identified,
};

/// Maintenance request as returned by the API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: i32,
    #[serde(default)]
    pub subject: String,
    /// May reference equipment that no longer exists
    pub equipment_id: i32,
    #[serde(default)]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub equipment_serial: Option<String>,
    pub request_type: RequestType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub stage: Stage,
    pub description: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default = "default_duration")]
    pub duration_hours: f64,
    pub assigned_technician: Option<String>,
    /// Filled from the equipment's team by the server
    pub team_id: Option<i32>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, alias = "completed_date")]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Server's view of overdue at serialization time
    #[serde(default)]
    pub is_overdue: bool,
}

fn default_duration() -> f64 {
    1.0
}

impl Identified for MaintenanceRequest {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Create maintenance request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRequest {
    pub subject: String,
    pub equipment_id: i32,
    pub request_type: RequestType,
    pub scheduled_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_technician: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update maintenance request. Only present fields are sent.
///
/// `Some(None)` clears the technician or the description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub assigned_technician: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
}

impl UpdateRequest {
    /// Patch that only moves the request to another stage (kanban drop)
    pub fn move_to(stage: Stage) -> Self {
        Self {
            stage: Some(stage),
            ..Default::default()
        }
    }
}

/// Server-side filters for `GET /requests`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i32>,
}
