//! Navigation API endpoints.
//!
//! Return the sidebar tree and its reading order.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use edm_nav::{NavLeaf, NavNode};
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse<'a> {
    /// Navigation tree items.
    items: &'a [NavNode],
}

/// Response for GET /api/navigation/flat.
#[derive(Serialize)]
pub(crate) struct ReadingOrderResponse<'a> {
    /// Leaves in reading order.
    items: &'a [NavLeaf],
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(State(state): State<Arc<AppState>>) -> Response {
    Json(NavigationResponse {
        items: &state.sidebar.tree().items,
    })
    .into_response()
}

/// Handle GET /api/navigation/flat.
pub(crate) async fn get_reading_order(State(state): State<Arc<AppState>>) -> Response {
    Json(ReadingOrderResponse {
        items: state.sidebar.flattened(),
    })
    .into_response()
}
