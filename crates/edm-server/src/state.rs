//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use edm_nav::Sidebar;
use edm_session::SessionRegistry;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Sidebar built once at startup, read-only afterwards.
    pub(crate) sidebar: Arc<Sidebar>,
    /// Live client sessions, also held weakly by the idle reaper.
    pub(crate) sessions: Arc<SessionRegistry>,
}

impl AppState {
    /// Create state around a prebuilt sidebar and a session registry.
    #[must_use]
    pub(crate) fn new(sidebar: Arc<Sidebar>, sessions: Arc<SessionRegistry>) -> Self {
        Self { sidebar, sessions }
    }
}
