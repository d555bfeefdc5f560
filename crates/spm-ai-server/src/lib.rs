//! HTTP server for the SPM AI service.

pub mod dto;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use spm_ai_config::ServiceInfo;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct ServerState {
    pub info: ServiceInfo,
}

/// Builds the application router. Every route gets CORS; all but the liveness
/// probe are traced.
pub fn app(info: ServiceInfo) -> Router {
    let service = info.service;
    let state = Arc::new(ServerState { info });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(move |req: &Request<Body>| {
            tracing::info_span!(
                "request",
                service,
                method = %req.method(),
                path = %req.uri().path(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency_ms = latency.as_millis() as u64,
                status = res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/openapi.json", get(handlers::openapi::document))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
