//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own HTTP adapter for endpoint exposure. This module
//! stitches them into a single router and applies the cross-cutting tower
//! layers (tracing, timeout, CORS).

pub mod idea;
pub mod response;
pub mod session;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::ports::SessionRepository;

// Re-export key types for convenience
pub use idea::{idea_routes, IdeaHandlers};
pub use session::{session_routes, SessionHandlers};

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// All API routes over one repository, without middleware.
pub fn api_router(repository: Arc<dyn SessionRepository>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest(
            "/api/sessions",
            session_routes(SessionHandlers::from_repository(repository.clone())),
        )
        .nest(
            "/api/ideas",
            idea_routes(IdeaHandlers::from_repository(repository)),
        )
}

/// The full application: API routes plus tracing, timeout and CORS layers.
pub fn build_app(repository: Arc<dyn SessionRepository>, config: &ServerConfig) -> Router {
    let router = api_router(repository)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    match cors_layer(&config.cors_origins_list()) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

/// CORS for the configured origins; `None` when no usable origin is set.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
