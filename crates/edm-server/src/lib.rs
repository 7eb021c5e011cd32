//! HTTP server for the Edmate documentation shell.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - API endpoints for the sidebar tree, reading order, and per-page
//!   active path with previous/next links
//! - API endpoints for per-client UI sessions
//! - WebSocket endpoint streaming session state as it changes
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use edm_nav::{NamingRules, Sidebar};
//! use edm_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sidebar = Sidebar::init(&[], &NamingRules::default()).unwrap();
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7979,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config, Arc::new(sidebar)).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (edm-server)
//!                        │
//!                        ├─► /api/navigation, /api/sidebar
//!                        │       │
//!                        │       └─► Arc<Sidebar> (built once, read-only)
//!                        │
//!                        └─► /api/sessions, /ws/sessions
//!                                │
//!                                └─► SessionRegistry ──► one task per session
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod websocket;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use edm_nav::Sidebar;
use edm_session::{DEFAULT_IDLE_TIMEOUT, SessionRegistry};
use state::AppState;

/// How often idle sessions are looked for.
const REAP_INTERVAL: Duration = Duration::from_secs(60);

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Idle time after which an abandoned session is reclaimed.
    pub session_idle_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            session_idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
/// * `sidebar` - Sidebar built during startup
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    sidebar: Arc<Sidebar>,
) -> Result<(), Box<dyn std::error::Error>> {
    let sessions = Arc::new(SessionRegistry::with_idle_timeout(config.session_idle_timeout));
    sessions.spawn_reaper(REAP_INTERVAL);
    let state = Arc::new(AppState::new(sidebar, sessions));

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Edmate config.
#[must_use]
pub fn server_config_from_config(config: &edm_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        session_idle_timeout: Duration::from_secs(config.server.session_idle_timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut config = edm_config::Config::default();
        config.server.port = 9000;
        config.server.session_idle_timeout = 90;

        let server_config = server_config_from_config(&config);

        assert_eq!(server_config.host, "127.0.0.1");
        assert_eq!(server_config.port, 9000);
        assert_eq!(server_config.session_idle_timeout, Duration::from_secs(90));
    }
}
