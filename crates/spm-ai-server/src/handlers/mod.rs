//! HTTP route handlers for the AI service.

pub mod openapi;

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::dto::{HealthResponse, RootResponse};
use crate::ServerState;

/// Tag shared by the service's documented operations.
pub const SERVICE_TAG: &str = "service";

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = SERVICE_TAG,
    operation_id = "health_check_health_get",
    summary = "Health Check",
    description = "Liveness probe for orchestration infrastructure.",
    responses(
        (status = 200, description = "Successful Response", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.info.service))
}

/// Root endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = SERVICE_TAG,
    operation_id = "root__get",
    summary = "Root",
    description = "Informational message about the service.",
    responses(
        (status = 200, description = "Successful Response", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::default())
}
