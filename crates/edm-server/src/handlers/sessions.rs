//! Session API endpoints.
//!
//! Clients create a session when the landing page loads, dispatch UI events
//! to it, and end it when the page unloads. Delayed transitions keep running
//! on the session task between requests; the WebSocket endpoint streams them.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use edm_session::{Handler, SessionSnapshot};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServerError;
use crate::state::AppState;

/// UI event sent by the client.
///
/// Only user-facing handlers are accepted; effect transitions are driven by
/// the session itself.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ClientEvent {
    /// Email field lost focus.
    SetEmail {
        /// Field value.
        value: String,
    },
    /// Call-to-action banner closed.
    CloseCallToAction,
    /// Waitlist button clicked.
    Signup,
}

impl From<ClientEvent> for Handler {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::SetEmail { value } => Self::SetEmail(value),
            ClientEvent::CloseCallToAction => Self::CloseCallToAction,
            ClientEvent::Signup => Self::Signup,
        }
    }
}

/// Response for POST /api/sessions.
#[derive(Serialize)]
pub(crate) struct SessionCreated {
    /// Session id for subsequent requests.
    id: Uuid,
    /// Initial snapshot.
    #[serde(flatten)]
    snapshot: SessionSnapshot,
}

/// Handle POST /api/sessions.
pub(crate) async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (id, session) = state.sessions.create();
    (
        StatusCode::CREATED,
        Json(SessionCreated {
            id,
            snapshot: session.snapshot(),
        }),
    )
}

/// Handle GET /api/sessions/{id}.
pub(crate) async fn get_session(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionSnapshot>, ServerError> {
    let session = state
        .sessions
        .get(&id)
        .ok_or(ServerError::SessionNotFound(id))?;
    Ok(Json(session.snapshot()))
}

/// Handle POST /api/sessions/{id}/events.
///
/// Responds once the handler and its immediate follow-ups have run.
pub(crate) async fn dispatch_event(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    Json(event): Json<ClientEvent>,
) -> Result<Json<SessionSnapshot>, ServerError> {
    let session = state
        .sessions
        .get(&id)
        .ok_or(ServerError::SessionNotFound(id))?;
    tracing::debug!(%id, ?event, "Dispatching session event");
    let snapshot = session.dispatch(event.into()).await?;
    Ok(Json(snapshot))
}

/// Handle DELETE /api/sessions/{id}.
pub(crate) async fn end_session(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ServerError> {
    if state.sessions.end(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::SessionNotFound(id))
    }
}
