//! Dashboard aggregate endpoints

use super::ApiClient;
use crate::{
    error::AppResult,
    models::{ActivityEntry, CategoryCount, DashboardStats, TeamRequestCount},
};

impl ApiClient {
    /// GET /dashboard/stats
    pub async fn dashboard_get_stats(&self) -> AppResult<DashboardStats> {
        self.get(self.endpoint(&["dashboard", "stats"])).await
    }

    /// GET /dashboard/requests-by-team
    pub async fn dashboard_requests_by_team(&self) -> AppResult<Vec<TeamRequestCount>> {
        self.get(self.endpoint(&["dashboard", "requests-by-team"]))
            .await
    }

    /// GET /dashboard/equipment-by-category
    pub async fn dashboard_equipment_by_category(&self) -> AppResult<Vec<CategoryCount>> {
        self.get(self.endpoint(&["dashboard", "equipment-by-category"]))
            .await
    }

    /// GET /dashboard/recent-activity?limit={limit}
    pub async fn dashboard_recent_activity(&self, limit: u32) -> AppResult<Vec<ActivityEntry>> {
        self.get_with_query(self.endpoint(&["dashboard", "recent-activity"]), &[("limit", limit)])
            .await
    }
}
