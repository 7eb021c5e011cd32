//! Sidebar state for a single page view.
//!
//! Returns the active path and previous/next links for the URL being
//! rendered. Unknown URLs are not an error: every field is null and the
//! frontend renders a collapsed sidebar without prev/next links.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for GET /api/sidebar.
#[derive(Deserialize)]
pub(crate) struct SidebarQuery {
    /// URL of the page being viewed.
    url: String,
}

/// Handle GET /api/sidebar?url=...
pub(crate) async fn get_sidebar(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SidebarQuery>,
) -> Response {
    let page = state.sidebar.page(&query.url);
    if page.active_path.is_none() {
        tracing::debug!(url = %query.url, "URL not in sidebar");
    }
    Json(page).into_response()
}
