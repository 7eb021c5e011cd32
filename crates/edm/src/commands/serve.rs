//! `edm serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use edm_config::{CliSettings, Config};
use edm_server::{run_server, server_config_from_config};

use super::sidebar::build_sidebar;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover edm.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long, env = "EDM_HOST")]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "EDM_PORT")]
    port: Option<u16>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// The sidebar is built here, once, before the server accepts requests.
    /// A malformed route catalog aborts startup.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the catalog is invalid, or
    /// the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            path = ?config.config_path,
            routes = config.routes.len(),
            "Loaded configuration"
        );

        let sidebar = build_sidebar(&config)?;

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: defaults (no edm.toml found)"),
        }
        output.info(&format!(
            "Sidebar: {} pages in {} sections",
            sidebar.flattened().len(),
            sidebar.tree().section_count()
        ));

        let server_config = server_config_from_config(&config);
        run_server(server_config, Arc::new(sidebar))
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
