//! Team and team member endpoints

use super::ApiClient;
use crate::{
    error::AppResult,
    models::{CreateTeam, CreateTeamMember, Team, TeamMember, UpdateTeamMember},
};

impl ApiClient {
    /// GET /teams
    pub async fn teams_list(&self) -> AppResult<Vec<Team>> {
        self.get(self.endpoint(&["teams"])).await
    }

    /// GET /teams/{id}
    pub async fn teams_get_by_id(&self, id: i32) -> AppResult<Team> {
        self.get(self.endpoint(&["teams", &id.to_string()])).await
    }

    /// POST /teams
    pub async fn teams_create(&self, data: &CreateTeam) -> AppResult<Team> {
        self.post(self.endpoint(&["teams"]), data).await
    }

    /// DELETE /teams/{id}, cascading to the team's members
    pub async fn teams_delete(&self, id: i32) -> AppResult<()> {
        self.delete(self.endpoint(&["teams", &id.to_string()])).await
    }

    /// GET /teams/members
    pub async fn members_list(&self) -> AppResult<Vec<TeamMember>> {
        self.get(self.endpoint(&["teams", "members"])).await
    }

    /// GET /teams/{team_id}/members
    pub async fn members_list_by_team(&self, team_id: i32) -> AppResult<Vec<TeamMember>> {
        self.get(self.endpoint(&["teams", &team_id.to_string(), "members"]))
            .await
    }

    /// POST /teams/members
    pub async fn members_create(&self, data: &CreateTeamMember) -> AppResult<TeamMember> {
        self.post(self.endpoint(&["teams", "members"]), data).await
    }

    /// PUT /teams/members/{id}
    pub async fn members_update(&self, id: i32, data: &UpdateTeamMember) -> AppResult<TeamMember> {
        self.put(self.endpoint(&["teams", "members", &id.to_string()]), data)
            .await
    }

    /// DELETE /teams/members/{id}
    pub async fn members_delete(&self, id: i32) -> AppResult<()> {
        self.delete(self.endpoint(&["teams", "members", &id.to_string()]))
            .await
    }
}
