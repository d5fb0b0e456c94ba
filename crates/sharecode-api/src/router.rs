//! Route definitions for the share-code HTTP API.
//!
//! Authenticated management routes are mounted under `/api`; the public
//! resolution route lives at `/s/{code}` as a top-level path. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use sharecode_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(share_routes()).merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        // Public resolution route, no authentication
        .route("/s/{code}", get(handlers::share::resolve_share_code))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Share-code mint and info endpoints
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/share-codes", post(handlers::share::mint_share_code))
        .route("/share-codes/{code}", get(handlers::share::share_code_info))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use axum::http::{HeaderName, HeaderValue, Method};
    use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any};

    let mut cors = CorsLayer::new();

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(AllowOrigin::list(origins));
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(AllowMethods::list(methods));

    if config.allowed_headers.iter().any(|h| h == "*") {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(AllowHeaders::list(headers));
    }

    cors.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
