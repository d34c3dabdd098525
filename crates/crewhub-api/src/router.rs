//! Route definitions for the Crewhub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(auth_routes()).merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: refresh, me.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
