//! Per-session scheduler.
//!
//! Each [`Session`] owns one tokio task holding its [`SessionState`]. Events
//! and elapsed timers arrive on one channel, so handlers of a session never
//! run concurrently. A handler together with its [`FollowUp::Now`] chain runs
//! to completion before the next message is taken. [`FollowUp::After`]
//! spawns a timer task that queues its handler on the same session when the
//! delay elapses.
//!
//! Timers hold a weak sender only. Dropping every [`Session`] handle ends
//! the task; a timer firing afterwards finds the channel gone and does
//! nothing.

use std::collections::VecDeque;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, oneshot, watch};

use crate::state::{FollowUp, Handler, SessionState};

/// Error returned when a session task is no longer running.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session task has exited.
    #[error("Session is closed")]
    Closed,
}

/// State published after every processed message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Current UI state.
    pub state: SessionState,
    /// Delayed handlers scheduled but not yet run.
    pub pending_timers: usize,
}

#[derive(Debug)]
enum Message {
    Event {
        handler: Handler,
        reply: Option<oneshot::Sender<SessionSnapshot>>,
    },
    Timer(Handler),
}

/// Handle to a running session.
#[derive(Clone, Debug)]
pub struct Session {
    sender: mpsc::UnboundedSender<Message>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl Session {
    /// Start a session with the initial state.
    ///
    /// Must be called within a tokio runtime.
    #[must_use]
    pub fn spawn() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let (publisher, snapshots) = watch::channel(SessionSnapshot::default());

        tokio::spawn(run(receiver, sender.downgrade(), publisher));

        Self { sender, snapshots }
    }

    /// Dispatch a handler and wait until it and its immediate follow-ups
    /// have run.
    ///
    /// Delayed follow-ups are still pending when this returns; see
    /// [`SessionSnapshot::pending_timers`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session task has exited.
    pub async fn dispatch(&self, handler: Handler) -> Result<SessionSnapshot, SessionError> {
        let (reply, settled) = oneshot::channel();
        self.sender
            .send(Message::Event {
                handler,
                reply: Some(reply),
            })
            .map_err(|_| SessionError::Closed)?;
        settled.await.map_err(|_| SessionError::Closed)
    }

    /// Queue a handler without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Closed`] if the session task has exited.
    pub fn send(&self, handler: Handler) -> Result<(), SessionError> {
        self.sender
            .send(Message::Event {
                handler,
                reply: None,
            })
            .map_err(|_| SessionError::Closed)
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// True while another handle to this session exists besides `self`.
    pub(crate) fn is_shared(&self) -> bool {
        self.sender.strong_count() > 1
    }
}

/// Session task loop.
async fn run(
    mut receiver: mpsc::UnboundedReceiver<Message>,
    timers: mpsc::WeakUnboundedSender<Message>,
    publisher: watch::Sender<SessionSnapshot>,
) {
    let mut snapshot = SessionSnapshot::default();

    while let Some(message) = receiver.recv().await {
        let (handler, reply) = match message {
            Message::Event { handler, reply } => (handler, reply),
            Message::Timer(handler) => {
                snapshot.pending_timers = snapshot.pending_timers.saturating_sub(1);
                (handler, None)
            }
        };

        let mut queue = VecDeque::from([handler]);
        while let Some(handler) = queue.pop_front() {
            tracing::debug!(?handler, "Running session handler");
            for follow_up in snapshot.state.dispatch(handler) {
                match follow_up {
                    FollowUp::Now(next) => queue.push_back(next),
                    FollowUp::After(delay, next) => {
                        snapshot.pending_timers += 1;
                        schedule(timers.clone(), delay, next);
                    }
                }
            }
        }

        publisher.send_replace(snapshot.clone());
        if let Some(reply) = reply {
            let _ = reply.send(snapshot.clone());
        }
    }

    tracing::debug!(pending_timers = snapshot.pending_timers, "Session ended");
}

/// Queue `handler` on the session after `delay`.
fn schedule(timers: mpsc::WeakUnboundedSender<Message>, delay: Duration, handler: Handler) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let Some(sender) = timers.upgrade() else {
            tracing::debug!(?handler, "Timer fired after session ended");
            return;
        };
        let _ = sender.send(Message::Timer(handler));
    });
}
