//! HTTP adapters - REST API implementations.

pub mod survey;

pub use survey::{survey_routes, SurveyHandlers};

use std::time::Duration;

use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Assembles the full API router: survey endpoints under `/api/surveys`,
/// the health probe, and the shared middleware stack.
pub fn api_router(handlers: SurveyHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api/surveys", survey_routes(handlers))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
}

/// Permissive CORS unless explicit origins are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}

/// GET /api/health - liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
