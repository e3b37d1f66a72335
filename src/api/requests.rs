//! Maintenance request endpoints

use super::ApiClient;
use crate::{
    error::AppResult,
    models::{CreateRequest, MaintenanceRequest, RequestFilter, Stage, UpdateRequest},
};

impl ApiClient {
    /// GET /requests?stage=&type=&team_id=
    pub async fn requests_list(&self, filter: &RequestFilter) -> AppResult<Vec<MaintenanceRequest>> {
        self.get_with_query(self.endpoint(&["requests"]), filter)
            .await
    }

    /// GET /requests/{id}
    pub async fn requests_get_by_id(&self, id: i32) -> AppResult<MaintenanceRequest> {
        self.get(self.endpoint(&["requests", &id.to_string()])).await
    }

    /// POST /requests. Team and department are filled in from the equipment.
    pub async fn requests_create(&self, data: &CreateRequest) -> AppResult<MaintenanceRequest> {
        self.post(self.endpoint(&["requests"]), data).await
    }

    /// PUT /requests/{id}
    ///
    /// Moving a request to `Scrap` also marks its equipment `Scrapped`
    /// server side; moving it to `Repaired` stamps `completed_at`.
    pub async fn requests_update(&self, id: i32, data: &UpdateRequest) -> AppResult<MaintenanceRequest> {
        self.put(self.endpoint(&["requests", &id.to_string()]), data)
            .await
    }

    /// DELETE /requests/{id}
    pub async fn requests_delete(&self, id: i32) -> AppResult<()> {
        self.delete(self.endpoint(&["requests", &id.to_string()]))
            .await
    }

    /// GET /requests/by-equipment/{equipment_id}
    pub async fn requests_list_by_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        self.get(self.endpoint(&["requests", "by-equipment", &equipment_id.to_string()]))
            .await
    }

    /// GET /requests/by-stage/{stage}
    pub async fn requests_list_by_stage(&self, stage: Stage) -> AppResult<Vec<MaintenanceRequest>> {
        self.get(self.endpoint(&["requests", "by-stage", stage.as_str()]))
            .await
    }

    /// GET /requests/preventive
    pub async fn requests_list_preventive(&self) -> AppResult<Vec<MaintenanceRequest>> {
        self.get(self.endpoint(&["requests", "preventive"])).await
    }
}
