//! Server error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use edm_session::SessionError;
use serde_json::json;
use uuid::Uuid;

/// Error returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No session registered under the given id.
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    /// Session task is gone.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::SessionNotFound(id) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Session not found", "id": id}),
            ),
            Self::Session(e) => {
                tracing::warn!(error = %e, "Session dispatch failed");
                (StatusCode::GONE, json!({"error": e.to_string()}))
            }
        };
        (status, Json(body)).into_response()
    }
}
