//! Client-side domain state
//!
//! [`MaintenanceStore`] owns the equipment, request, and team collections for
//! one session. Every mutation goes through the [`Backend`] first and applies
//! exactly what the server returns. Nothing is predicted locally and nothing
//! is changed when the server rejects the call.

pub mod policy;

use crate::{
    api::Backend,
    error::{AppError, AppResult},
    models::{
        CreateEquipment, CreateRequest, CreateTeam, CreateTeamMember, DashboardSnapshot,
        Equipment, Identified, MaintenanceRequest, RequestFilter, Team, TeamMember,
        UpdateEquipment, UpdateRequest, UpdateTeamMember,
    },
};

pub use policy::{NeverRefresh, RefreshOnStage, RefreshPolicy};

/// Activity entries fetched by [`MaintenanceStore::dashboard`]
pub const DEFAULT_ACTIVITY_LIMIT: u32 = 10;

/// Single source of truth for one client session
pub struct MaintenanceStore<B: Backend> {
    backend: B,
    equipment: Vec<Equipment>,
    requests: Vec<MaintenanceRequest>,
    teams: Vec<Team>,
    loading: bool,
    error: Option<String>,
    refresh_policy: Box<dyn RefreshPolicy>,
}

impl<B: Backend> MaintenanceStore<B> {
    /// The API has no team update endpoint
    pub const SUPPORTS_TEAM_UPDATE: bool = false;

    /// Create an empty store. Call [`initialize`](Self::initialize) to load it.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            equipment: Vec::new(),
            requests: Vec::new(),
            teams: Vec::new(),
            loading: false,
            error: None,
            refresh_policy: Box::new(RefreshOnStage::default()),
        }
    }

    /// Replace the post-update refresh policy
    pub fn with_refresh_policy(mut self, policy: impl RefreshPolicy + 'static) -> Self {
        self.refresh_policy = Box::new(policy);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn requests(&self) -> &[MaintenanceRequest] {
        &self.requests
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Session-level error left by the last failed load, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn supports_team_update(&self) -> bool {
        Self::SUPPORTS_TEAM_UPDATE
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Initial load of all three collections
    pub async fn initialize(&mut self) -> AppResult<()> {
        self.refresh().await
    }

    /// Fetch equipment, requests, and teams concurrently.
    ///
    /// All three collections are replaced only when all three fetches
    /// succeed. On failure the error is kept as the session error and the
    /// previous collections stay as they were.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let all = RequestFilter::default();
        let result = {
            let _loading = LoadingGuard::set(&mut self.loading);
            tokio::try_join!(
                self.backend.list_equipment(),
                self.backend.list_requests(&all),
                self.backend.list_teams(),
            )
        };

        match result {
            Ok((equipment, requests, teams)) => {
                tracing::info!(
                    equipment = equipment.len(),
                    requests = requests.len(),
                    teams = teams.len(),
                    "Loaded maintenance data"
                );
                self.equipment = equipment;
                self.requests = requests;
                self.teams = teams;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load maintenance data: {}", e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Equipment
    // -----------------------------------------------------------------------

    pub async fn add_equipment(&mut self, draft: &CreateEquipment) -> AppResult<Equipment> {
        let created = self.backend.create_equipment(draft).await?;
        self.equipment.push(created.clone());
        Ok(created)
    }

    pub async fn update_equipment(&mut self, id: i32, patch: &UpdateEquipment) -> AppResult<Equipment> {
        let updated = self.backend.update_equipment(id, patch).await?;
        replace_by_id(&mut self.equipment, id, &updated);
        Ok(updated)
    }

    pub async fn delete_equipment(&mut self, id: i32) -> AppResult<()> {
        self.backend.delete_equipment(id).await?;
        remove_by_id(&mut self.equipment, id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Maintenance requests
    // -----------------------------------------------------------------------

    pub async fn add_request(&mut self, draft: &CreateRequest) -> AppResult<MaintenanceRequest> {
        let created = self.backend.create_request(draft).await?;
        self.requests.push(created.clone());
        Ok(created)
    }

    /// Update a request, then reload everything if the refresh policy asks for it.
    ///
    /// The reload is best-effort: its failure is recorded as the session
    /// error but the update itself has already been applied and is returned.
    pub async fn update_request(&mut self, id: i32, patch: &UpdateRequest) -> AppResult<MaintenanceRequest> {
        let updated = self.backend.update_request(id, patch).await?;
        replace_by_id(&mut self.requests, id, &updated);

        if self.refresh_policy.should_refresh(&updated) {
            tracing::debug!(request_id = id, stage = %updated.stage, "Reloading after request update");
            if let Err(e) = self.refresh().await {
                tracing::warn!(request_id = id, "Reload after request update failed: {}", e);
            }
        }

        Ok(updated)
    }

    pub async fn delete_request(&mut self, id: i32) -> AppResult<()> {
        self.backend.delete_request(id).await?;
        remove_by_id(&mut self.requests, id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Teams
    // -----------------------------------------------------------------------

    pub async fn add_team(&mut self, draft: &CreateTeam) -> AppResult<Team> {
        let created = self.backend.create_team(draft).await?;
        self.teams.push(created.clone());
        Ok(created)
    }

    /// Always fails without contacting the server, see [`Self::SUPPORTS_TEAM_UPDATE`]
    pub async fn update_team(&mut self, id: i32, _draft: &CreateTeam) -> AppResult<Team> {
        Err(AppError::Unsupported(format!(
            "team {} cannot be updated: the API has no team update endpoint",
            id
        )))
    }

    /// Delete a team.
    ///
    /// The server deletes its members and unassigns its equipment and
    /// requests. Cached records that pointed at the team are unassigned the
    /// same way, so no reload is needed.
    pub async fn delete_team(&mut self, id: i32) -> AppResult<()> {
        self.backend.delete_team(id).await?;
        remove_by_id(&mut self.teams, id);

        for equipment in self.equipment.iter_mut().filter(|e| e.team_id == Some(id)) {
            equipment.team_id = None;
            equipment.team_name = None;
        }
        for request in self.requests.iter_mut().filter(|r| r.team_id == Some(id)) {
            request.team_id = None;
            request.team_name = None;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Team members (not cached)
    // -----------------------------------------------------------------------

    pub async fn members(&self) -> AppResult<Vec<TeamMember>> {
        self.backend.list_members().await
    }

    pub async fn team_members(&self, team_id: i32) -> AppResult<Vec<TeamMember>> {
        self.backend.team_members(team_id).await
    }

    pub async fn add_member(&self, draft: &CreateTeamMember) -> AppResult<TeamMember> {
        self.backend.create_member(draft).await
    }

    pub async fn update_member(&self, id: i32, patch: &UpdateTeamMember) -> AppResult<TeamMember> {
        self.backend.update_member(id, patch).await
    }

    pub async fn delete_member(&self, id: i32) -> AppResult<()> {
        self.backend.delete_member(id).await
    }

    // -----------------------------------------------------------------------
    // Dashboard
    // -----------------------------------------------------------------------

    /// Fetch every dashboard aggregate concurrently. The result is not stored.
    pub async fn dashboard(&self, activity_limit: u32) -> AppResult<DashboardSnapshot> {
        let (stats, requests_by_team, equipment_by_category, recent_activity) = tokio::try_join!(
            self.backend.dashboard_stats(),
            self.backend.requests_by_team(),
            self.backend.equipment_by_category(),
            self.backend.recent_activity(activity_limit),
        )?;

        Ok(DashboardSnapshot {
            stats,
            requests_by_team,
            equipment_by_category,
            recent_activity,
        })
    }
}

/// Holds `loading` true until dropped, including when the load future is cancelled
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// Swap in the server's version of record `id`; other records are untouched
fn replace_by_id<T: Identified + Clone>(items: &mut [T], id: i32, record: &T) {
    for item in items.iter_mut().filter(|item| item.id() == id) {
        *item = record.clone();
    }
}

fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: i32) {
    items.retain(|item| item.id() != id);
}
