//! WebSocket handler for live session updates.
//!
//! Pushes a snapshot to the client whenever its session state changes,
//! including changes made by delayed transitions. Text frames received from
//! the client are parsed as [`ClientEvent`]s and queued on the session.
//! Malformed frames are logged and skipped; the connection stays open.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use edm_session::{Session, SessionSnapshot};
use uuid::Uuid;

use crate::error::ServerError;
use crate::handlers::sessions::ClientEvent;
use crate::state::AppState;

/// Inbound frame as seen by the session loop.
#[derive(Debug)]
enum Frame {
    Text(String),
    Other,
    Closed,
}

/// Client connection carrying session traffic.
trait SnapshotSocket: Send {
    /// Send a text frame. Returns `false` once the client is gone.
    fn send_text(&mut self, text: String) -> impl Future<Output = bool> + Send;

    /// Wait for the next frame from the client.
    fn next_frame(&mut self) -> impl Future<Output = Frame> + Send;
}

impl SnapshotSocket for WebSocket {
    async fn send_text(&mut self, text: String) -> bool {
        self.send(Message::Text(text.into())).await.is_ok()
    }

    async fn next_frame(&mut self) -> Frame {
        match self.recv().await {
            Some(Ok(Message::Text(text))) => Frame::Text(text.as_str().to_owned()),
            Some(Ok(Message::Close(_)) | Err(_)) | None => Frame::Closed,
            Some(Ok(_)) => Frame::Other,
        }
    }
}

/// Handle WebSocket upgrade for GET /ws/sessions/{id}.
pub(crate) async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let session = state
        .sessions
        .get(&id)
        .ok_or(ServerError::SessionNotFound(id))?;
    Ok(ws
        .on_upgrade(move |socket| serve_session(socket, id, session))
        .into_response())
}

/// Relay snapshots and client events until either side goes away.
///
/// The session handle held here keeps the session from being reclaimed as
/// idle while the client is connected.
async fn serve_session(mut socket: impl SnapshotSocket, id: Uuid, session: Session) {
    let mut updates = session.subscribe();

    // Current state first, then every change
    let initial = updates.borrow_and_update().clone();
    if !send_snapshot(&mut socket, id, &initial).await {
        return;
    }

    loop {
        tokio::select! {
            result = updates.changed() => {
                if result.is_err() {
                    // Session task ended
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                if !send_snapshot(&mut socket, id, &snapshot).await {
                    break;
                }
            }
            frame = socket.next_frame() => match frame {
                Frame::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                    Ok(event) => {
                        if session.send(event.into()).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(%id, error = %e, "Ignoring malformed session event");
                    }
                },
                Frame::Other => {}
                Frame::Closed => break,
            },
        }
    }

    tracing::debug!(%id, "Session socket closed");
}

/// Send a snapshot as a JSON text frame. Returns `false` once the client is gone.
async fn send_snapshot(
    socket: &mut impl SnapshotSocket,
    id: Uuid,
    snapshot: &SessionSnapshot,
) -> bool {
    match serde_json::to_string(snapshot) {
        Ok(text) => socket.send_text(text).await,
        Err(e) => {
            tracing::error!(%id, error = %e, "Failed to serialize session snapshot");
            true
        }
    }
}
