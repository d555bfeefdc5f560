//! Machine-readable description of the service's HTTP surface.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use spm_ai_config::ServiceInfo;
use utoipa::openapi::{Info, OpenApi as OpenApiDocument};
use utoipa::OpenApi;

use crate::dto::{HealthResponse, RootResponse};
use crate::ServerState;

#[derive(OpenApi)]
#[openapi(
    info(title = "SPM AI Service", version = "1.0.0"),
    paths(crate::handlers::health, crate::handlers::root),
    components(schemas(HealthResponse, RootResponse))
)]
pub struct ApiDoc;

/// GET /openapi.json - Describe the service and its routes.
pub async fn document(State(state): State<Arc<ServerState>>) -> Json<OpenApiDocument> {
    Json(build_document(&state.info))
}

/// The generated document with `info` reduced to the service's title and version.
pub fn build_document(info: &ServiceInfo) -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();
    doc.info = Info::new(info.title, info.version);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_carries_metadata() {
        let doc = serde_json::to_value(build_document(&ServiceInfo::default())).unwrap();
        assert_eq!(doc["openapi"], "3.1.0");
        assert_eq!(doc["info"], json!({ "title": "SPM AI Service", "version": "1.0.0" }));
    }

    #[test]
    fn test_operation_ids_match_published_clients() {
        let doc = build_document(&ServiceInfo::default());

        let health = doc.paths.paths["/health"].get.as_ref().unwrap();
        assert_eq!(health.operation_id.as_deref(), Some("health_check_health_get"));

        let root = doc.paths.paths["/"].get.as_ref().unwrap();
        assert_eq!(root.operation_id.as_deref(), Some("root__get"));
    }

    #[test]
    fn test_response_schemas_registered() {
        let doc = build_document(&ServiceInfo::default());
        let schemas = &doc.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("HealthResponse"));
        assert!(schemas.contains_key("RootResponse"));
    }
}
