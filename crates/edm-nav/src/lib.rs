//! Sidebar navigation for the Edmate documentation shell.
//!
//! This crate provides:
//! - [`RouteDescriptor`]: one registered documentation page
//! - [`NavTree`]: hierarchical sidebar grouped by section
//! - [`ActivePath`]: which sections to expand for the current page
//! - [`neighbors`]: previous/next pages in reading order
//! - [`Sidebar`]: the immutable handle built once at startup
//!
//! # Quick Start
//!
//! ```
//! use edm_nav::{NamingRules, RouteDescriptor, Sidebar};
//!
//! let catalog = vec![
//!     RouteDescriptor::new("/a", "Intro Overview | Brand", "guide"),
//!     RouteDescriptor::new("/b", "Api Reference | Brand", "guide"),
//!     RouteDescriptor::new("/c", "Setup | Brand", "start"),
//! ];
//! let sidebar = Sidebar::init(&catalog, &NamingRules::default()).unwrap();
//!
//! let page = sidebar.page("/b");
//! assert_eq!(page.active_path.unwrap().indices(), &[0, 1]);
//! assert_eq!(page.previous.unwrap().link, "/a");
//! assert_eq!(page.next.unwrap().link, "/c");
//! ```

mod active_path;
mod catalog;
mod naming;
mod neighbors;
mod sidebar;
mod tree;

pub use active_path::ActivePath;
pub use catalog::{RouteDescriptor, SECTION_SEPARATOR};
pub use naming::NamingRules;
pub use neighbors::{Neighbors, neighbors};
pub use sidebar::{PageNavigation, Sidebar};
pub use tree::{NavError, NavLeaf, NavNode, NavSection, NavTree};
