//! HTTP implementation of [`Backend`]

use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};

use super::{Backend, HealthResponse};
use crate::{
    config::ApiConfig,
    error::{AppError, AppResult, ErrorBody},
    models::{
        ActivityEntry, CategoryCount, CreateEquipment, CreateRequest, CreateTeam,
        CreateTeamMember, DashboardStats, Equipment, EquipmentStatus, MaintenanceRequest,
        RequestFilter, Stage, Team, TeamMember, TeamRequestCount, UpdateEquipment,
        UpdateRequest, UpdateTeamMember,
    },
};

/// REST client holding a pooled `reqwest::Client` and the API base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the configured base URL
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::InvalidUrl(format!(
                "{}: not usable as a base URL",
                config.base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL. Segments are percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // new() rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        self.fetch(self.http.get(url)).await
    }

    pub(crate) async fn get_with_query<Q, T>(&self, url: Url, query: &Q) -> AppResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.http.get(url).query(query)).await
    }

    pub(crate) async fn post<B, T>(&self, url: Url, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.http.post(url).json(body)).await
    }

    pub(crate) async fn put<B, T>(&self, url: Url, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.http.put(url).json(body)).await
    }

    /// DELETE; the confirmation body is ignored
    pub(crate) async fn delete(&self, url: Url) -> AppResult<()> {
        self.send(self.http.delete(url)).await.map(|_| ())
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let body = self.send(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send(&self, builder: RequestBuilder) -> AppResult<Vec<u8>> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        tracing::debug!(%method, %path, "API request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::debug!(%method, %path, status = status.as_u16(), "API request rejected");
            return Err(ErrorBody::into_error(status, &body));
        }

        Ok(body.to_vec())
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn health(&self) -> AppResult<HealthResponse> {
        self.health_check().await
    }

    async fn list_equipment(&self) -> AppResult<Vec<Equipment>> {
        self.equipment_list().await
    }

    async fn get_equipment(&self, id: i32) -> AppResult<Equipment> {
        self.equipment_get_by_id(id).await
    }

    async fn create_equipment(&self, draft: &CreateEquipment) -> AppResult<Equipment> {
        self.equipment_create(draft).await
    }

    async fn update_equipment(&self, id: i32, patch: &UpdateEquipment) -> AppResult<Equipment> {
        self.equipment_update(id, patch).await
    }

    async fn delete_equipment(&self, id: i32) -> AppResult<()> {
        self.equipment_delete(id).await
    }

    async fn equipment_by_team(&self, team_id: i32) -> AppResult<Vec<Equipment>> {
        self.equipment_list_by_team(team_id).await
    }

    async fn equipment_by_status(&self, status: EquipmentStatus) -> AppResult<Vec<Equipment>> {
        self.equipment_list_by_status(status).await
    }

    async fn list_requests(&self, filter: &RequestFilter) -> AppResult<Vec<MaintenanceRequest>> {
        self.requests_list(filter).await
    }

    async fn get_request(&self, id: i32) -> AppResult<MaintenanceRequest> {
        self.requests_get_by_id(id).await
    }

    async fn create_request(&self, draft: &CreateRequest) -> AppResult<MaintenanceRequest> {
        self.requests_create(draft).await
    }

    async fn update_request(&self, id: i32, patch: &UpdateRequest) -> AppResult<MaintenanceRequest> {
        self.requests_update(id, patch).await
    }

    async fn delete_request(&self, id: i32) -> AppResult<()> {
        self.requests_delete(id).await
    }

    async fn requests_by_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        self.requests_list_by_equipment(equipment_id).await
    }

    async fn requests_by_stage(&self, stage: Stage) -> AppResult<Vec<MaintenanceRequest>> {
        self.requests_list_by_stage(stage).await
    }

    async fn preventive_requests(&self) -> AppResult<Vec<MaintenanceRequest>> {
        self.requests_list_preventive().await
    }

    async fn list_teams(&self) -> AppResult<Vec<Team>> {
        self.teams_list().await
    }

    async fn get_team(&self, id: i32) -> AppResult<Team> {
        self.teams_get_by_id(id).await
    }

    async fn create_team(&self, draft: &CreateTeam) -> AppResult<Team> {
        self.teams_create(draft).await
    }

    async fn delete_team(&self, id: i32) -> AppResult<()> {
        self.teams_delete(id).await
    }

    async fn list_members(&self) -> AppResult<Vec<TeamMember>> {
        self.members_list().await
    }

    async fn team_members(&self, team_id: i32) -> AppResult<Vec<TeamMember>> {
        self.members_list_by_team(team_id).await
    }

    async fn create_member(&self, draft: &CreateTeamMember) -> AppResult<TeamMember> {
        self.members_create(draft).await
    }

    async fn update_member(&self, id: i32, patch: &UpdateTeamMember) -> AppResult<TeamMember> {
        self.members_update(id, patch).await
    }

    async fn delete_member(&self, id: i32) -> AppResult<()> {
        self.members_delete(id).await
    }

    async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        self.dashboard_get_stats().await
    }

    async fn requests_by_team(&self) -> AppResult<Vec<TeamRequestCount>> {
        self.dashboard_requests_by_team().await
    }

    async fn equipment_by_category(&self) -> AppResult<Vec<CategoryCount>> {
        self.dashboard_equipment_by_category().await
    }

    async fn recent_activity(&self, limit: u32) -> AppResult<Vec<ActivityEntry>> {
        self.dashboard_recent_activity(limit).await
    }
}
