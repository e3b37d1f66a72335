//! Dashboard aggregates. Computed server side, never cached by the store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Headline counters for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Usable equipment only
    pub total_equipment: u32,
    /// Requests not yet repaired or scrapped
    pub active_requests: u32,
    pub overdue_requests: u32,
    pub total_teams: u32,
    pub critical_requests: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRequestCount {
    pub team: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u32,
}

/// Entry of the server's activity log, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: i32,
    pub action: String,
    pub description: Option<String>,
    pub timestamp: Option<NaiveDateTime>,
    pub equipment_id: Option<i32>,
    pub request_id: Option<i32>,
}

/// Everything the dashboard page shows, fetched in one go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub requests_by_team: Vec<TeamRequestCount>,
    pub equipment_by_category: Vec<CategoryCount>,
    pub recent_activity: Vec<ActivityEntry>,
}
