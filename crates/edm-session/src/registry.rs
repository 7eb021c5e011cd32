//! Registry of live sessions.
//!
//! Clients that close the page without ending their session leave it behind,
//! so the registry also reclaims sessions that have gone idle. A session is
//! idle when nobody has looked it up for `idle_timeout` and no handle to it
//! is held outside the registry (an open socket holds one).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

use crate::session::Session;

/// Idle time after which an unused session is reclaimed.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct Entry {
    session: Session,
    last_seen: Instant,
}

/// Sessions indexed by id.
///
/// The lock only guards the map. Handlers run on each session's own task,
/// so nothing is held across an `.await`.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, Entry>>,
    idle_timeout: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionRegistry {
    /// Create an empty registry with [`DEFAULT_IDLE_TIMEOUT`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry reclaiming sessions idle for `idle_timeout`.
    #[must_use]
    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::default(),
            idle_timeout,
        }
    }

    /// Start a new session and register it.
    ///
    /// Must be called within a tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn create(&self) -> (Uuid, Session) {
        let id = Uuid::new_v4();
        let session = Session::spawn();
        let entry = Entry {
            session: session.clone(),
            last_seen: Instant::now(),
        };
        self.sessions.write().unwrap().insert(id, entry);
        tracing::debug!(%id, "Session started");
        (id, session)
    }

    /// Look up a session and mark it as seen.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<Session> {
        let mut sessions = self.sessions.write().unwrap();
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(entry.session.clone())
    }

    /// End a session. Returns `false` if it was not registered.
    ///
    /// The session task exits once the last outstanding handle is dropped;
    /// pending timers then fire into nothing.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn end(&self, id: &Uuid) -> bool {
        let removed = self.sessions.write().unwrap().remove(id).is_some();
        if removed {
            tracing::debug!(%id, "Session ended by client");
        }
        removed
    }

    /// Remove every idle session. Returns how many were removed.
    ///
    /// Sessions with a handle held elsewhere count as seen now.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn reap_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().unwrap();
        let before = sessions.len();

        sessions.retain(|id, entry| {
            if entry.session.is_shared() {
                entry.last_seen = now;
                return true;
            }
            let alive = now.duration_since(entry.last_seen) < self.idle_timeout;
            if !alive {
                tracing::debug!(%id, "Session expired");
            }
            alive
        });

        let reaped = before - sessions.len();
        if reaped > 0 {
            tracing::info!(reaped, live = sessions.len(), "Reclaimed idle sessions");
        }
        reaped
    }

    /// Run [`reap_idle`](Self::reap_idle) every `period`.
    ///
    /// The task holds a weak reference and stops once the registry is
    /// dropped. Must be called within a tokio runtime.
    pub fn spawn_reaper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let registry = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(registry) = registry.upgrade() else {
                    break;
                };
                registry.reap_idle();
            }
        })
    }

    /// Number of live sessions.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().unwrap().len()
    }

    /// True if no session is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
