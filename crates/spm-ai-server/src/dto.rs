use serde::Serialize;
use utoipa::ToSchema;

pub const HEALTH_STATUS: &str = "healthy";
pub const ROOT_MESSAGE: &str = "SPM AI Service - Under Construction";

// === HTTP DTOs ===

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy(service: &str) -> Self {
        Self {
            status: HEALTH_STATUS.to_string(),
            service: service.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: ROOT_MESSAGE.to_string(),
        }
    }
}
