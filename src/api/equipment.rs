//! Equipment endpoints

use super::ApiClient;
use crate::{
    error::AppResult,
    models::{CreateEquipment, Equipment, EquipmentStatus, UpdateEquipment},
};

impl ApiClient {
    /// GET /equipment
    pub async fn equipment_list(&self) -> AppResult<Vec<Equipment>> {
        self.get(self.endpoint(&["equipment"])).await
    }

    /// GET /equipment/{id}
    pub async fn equipment_get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.get(self.endpoint(&["equipment", &id.to_string()])).await
    }

    /// POST /equipment
    pub async fn equipment_create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        self.post(self.endpoint(&["equipment"]), data).await
    }

    /// PUT /equipment/{id}
    pub async fn equipment_update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        self.put(self.endpoint(&["equipment", &id.to_string()]), data)
            .await
    }

    /// DELETE /equipment/{id}
    pub async fn equipment_delete(&self, id: i32) -> AppResult<()> {
        self.delete(self.endpoint(&["equipment", &id.to_string()]))
            .await
    }

    /// GET /equipment/by-team/{team_id}
    pub async fn equipment_list_by_team(&self, team_id: i32) -> AppResult<Vec<Equipment>> {
        self.get(self.endpoint(&["equipment", "by-team", &team_id.to_string()]))
            .await
    }

    /// GET /equipment/by-status/{status}
    pub async fn equipment_list_by_status(&self, status: EquipmentStatus) -> AppResult<Vec<Equipment>> {
        self.get(self.endpoint(&["equipment", "by-status", status.as_str()]))
            .await
    }
}
