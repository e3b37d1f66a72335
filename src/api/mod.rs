//! REST client for the GearGuard backend
//!
//! [`Backend`] is the contract the store consumes; [`ApiClient`] implements it
//! over HTTP. Endpoint groups live in one file per resource.

pub mod client;
pub mod dashboard;
pub mod equipment;
pub mod health;
pub mod requests;
pub mod teams;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{
        ActivityEntry, CategoryCount, CreateEquipment, CreateRequest, CreateTeam,
        CreateTeamMember, DashboardStats, Equipment, EquipmentStatus, MaintenanceRequest,
        RequestFilter, Stage, Team, TeamMember, TeamRequestCount, UpdateEquipment,
        UpdateRequest, UpdateTeamMember,
    },
};

pub use client::ApiClient;
pub use health::HealthResponse;

/// Remote API operations. Every call is exactly one request/response round trip.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    async fn health(&self) -> AppResult<HealthResponse>;

    // Equipment
    async fn list_equipment(&self) -> AppResult<Vec<Equipment>>;
    async fn get_equipment(&self, id: i32) -> AppResult<Equipment>;
    async fn create_equipment(&self, draft: &CreateEquipment) -> AppResult<Equipment>;
    async fn update_equipment(&self, id: i32, patch: &UpdateEquipment) -> AppResult<Equipment>;
    async fn delete_equipment(&self, id: i32) -> AppResult<()>;
    async fn equipment_by_team(&self, team_id: i32) -> AppResult<Vec<Equipment>>;
    async fn equipment_by_status(&self, status: EquipmentStatus) -> AppResult<Vec<Equipment>>;

    // Maintenance requests
    async fn list_requests(&self, filter: &RequestFilter) -> AppResult<Vec<MaintenanceRequest>>;
    async fn get_request(&self, id: i32) -> AppResult<MaintenanceRequest>;
    async fn create_request(&self, draft: &CreateRequest) -> AppResult<MaintenanceRequest>;
    async fn update_request(&self, id: i32, patch: &UpdateRequest) -> AppResult<MaintenanceRequest>;
    async fn delete_request(&self, id: i32) -> AppResult<()>;
    async fn requests_by_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>>;
    async fn requests_by_stage(&self, stage: Stage) -> AppResult<Vec<MaintenanceRequest>>;
    async fn preventive_requests(&self) -> AppResult<Vec<MaintenanceRequest>>;

    // Teams. The API exposes no team update.
    async fn list_teams(&self) -> AppResult<Vec<Team>>;
    async fn get_team(&self, id: i32) -> AppResult<Team>;
    async fn create_team(&self, draft: &CreateTeam) -> AppResult<Team>;
    async fn delete_team(&self, id: i32) -> AppResult<()>;

    // Team members
    async fn list_members(&self) -> AppResult<Vec<TeamMember>>;
    async fn team_members(&self, team_id: i32) -> AppResult<Vec<TeamMember>>;
    async fn create_member(&self, draft: &CreateTeamMember) -> AppResult<TeamMember>;
    async fn update_member(&self, id: i32, patch: &UpdateTeamMember) -> AppResult<TeamMember>;
    async fn delete_member(&self, id: i32) -> AppResult<()>;

    // Dashboard
    async fn dashboard_stats(&self) -> AppResult<DashboardStats>;
    async fn requests_by_team(&self) -> AppResult<Vec<TeamRequestCount>>;
    async fn equipment_by_category(&self) -> AppResult<Vec<CategoryCount>>;
    async fn recent_activity(&self, limit: u32) -> AppResult<Vec<ActivityEntry>>;
}
