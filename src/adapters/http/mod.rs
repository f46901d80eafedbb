//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers and routes. They share
//! one [`AppState`] and are nested under `/api` by [`api_router`].

pub mod error;
pub mod location;
pub mod plan;
pub mod state;
pub mod tools;
pub mod workspace;

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AppConfig, ServerConfig};

pub use error::{ApiError, ErrorResponse};
pub use state::{AppAdapters, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

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
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Full application router with middleware applied.
pub fn api_router(state: AppState, config: &AppConfig) -> Router {
    let api = Router::new()
        .merge(plan::plan_routes(state.markdown_export))
        .merge(location::location_routes())
        .merge(workspace::workspace_routes())
        .merge(tools::tools_routes());

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server));

    let router = if config.features.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
