//! Backend health check

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` when the backend is up
    pub status: String,
    pub timestamp: Option<NaiveDateTime>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ApiClient {
    /// GET /health
    pub async fn health_check(&self) -> AppResult<HealthResponse> {
        self.get(self.endpoint(&["health"])).await
    }
}
