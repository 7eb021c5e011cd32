//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::websocket;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route(
            "/api/navigation/flat",
            get(handlers::navigation::get_reading_order),
        )
        .route("/api/sidebar", get(handlers::sidebar::get_sidebar))
        .route("/api/sessions", post(handlers::sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(handlers::sessions::get_session).delete(handlers::sessions::end_session),
        )
        .route(
            "/api/sessions/{id}/events",
            post(handlers::sessions::dispatch_event),
        );

    let router = Router::new()
        .merge(api_routes)
        .route("/ws/sessions/{id}", get(websocket::ws_handler));

    security::with_security_headers(router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
