//! `edm sidebar` command implementation.
//!
//! Prints the sidebar built from the configured route catalog. Exits with
//! an error on a malformed catalog, which makes it usable as a check.

use std::path::PathBuf;

use clap::Args;
use edm_config::Config;
use edm_nav::{NavNode, Sidebar};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Path to configuration file (default: auto-discover edm.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the reading order instead of the tree.
    #[arg(long)]
    flat: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the catalog is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let sidebar = build_sidebar(&config)?;

        if sidebar.tree().is_empty() {
            output.info("No routes registered");
            return Ok(());
        }

        if self.flat {
            for leaf in sidebar.flattened() {
                output.entry(0, &leaf.name, &leaf.link);
            }
        } else {
            print_nodes(&output, &sidebar.tree().items, 0);
        }

        Ok(())
    }
}

/// Build the sidebar from the configured catalog.
pub(crate) fn build_sidebar(config: &Config) -> Result<Sidebar, CliError> {
    let naming = config.sidebar.naming_rules();
    Ok(Sidebar::init(&config.routes, &naming)?)
}

fn print_nodes(output: &Output, nodes: &[NavNode], indent: usize) {
    for node in nodes {
        match node {
            NavNode::Leaf(leaf) => output.entry(indent, &leaf.name, &leaf.link),
            NavNode::Section(section) => {
                output.heading(indent, &section.name);
                print_nodes(output, &section.children, indent + 1);
            }
        }
    }
}
