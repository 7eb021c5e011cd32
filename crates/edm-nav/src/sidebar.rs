//! Immutable sidebar handle.
//!
//! [`Sidebar::init`] is the single initialization point: it is called once
//! during startup with the frozen route catalog, and the resulting handle
//! is shared (usually behind an `Arc`) with every request. Nothing mutates
//! it afterwards, so no locking is needed.

use serde::Serialize;

use crate::active_path::ActivePath;
use crate::catalog::RouteDescriptor;
use crate::naming::NamingRules;
use crate::neighbors::{Neighbors, neighbors};
use crate::tree::{NavError, NavLeaf, NavTree};

/// Navigation state for one page view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNavigation<'a> {
    /// Sections to expand, `None` if the page is not in the sidebar.
    pub active_path: Option<ActivePath>,
    /// Names of the sections along the active path, outermost first.
    pub expanded_sections: Vec<&'a str>,
    /// Preceding page in reading order.
    pub previous: Option<&'a NavLeaf>,
    /// Following page in reading order.
    pub next: Option<&'a NavLeaf>,
}

/// Navigation tree together with its cached reading order.
#[derive(Debug)]
pub struct Sidebar {
    tree: NavTree,
    flattened: Vec<NavLeaf>,
}

impl Sidebar {
    /// Build the sidebar from the route catalog.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if the catalog is malformed. Callers should treat
    /// this as fatal to startup rather than serve a broken sidebar.
    pub fn init(catalog: &[RouteDescriptor], naming: &NamingRules) -> Result<Self, NavError> {
        let tree = NavTree::build(catalog, naming)?;
        let flattened = tree.flatten();

        tracing::info!(
            sections = tree.section_count(),
            pages = flattened.len(),
            "Built sidebar navigation"
        );

        Ok(Self { tree, flattened })
    }

    /// Navigation tree.
    #[must_use]
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// Leaves in reading order.
    #[must_use]
    pub fn flattened(&self) -> &[NavLeaf] {
        &self.flattened
    }

    /// Active path for `url`, `None` if no page matches.
    #[must_use]
    pub fn active_path(&self, url: &str) -> Option<ActivePath> {
        ActivePath::resolve(&self.tree, url)
    }

    /// Previous and next pages around `url`.
    #[must_use]
    pub fn neighbors(&self, url: &str) -> Neighbors<'_> {
        neighbors(&self.flattened, url)
    }

    /// Everything the sidebar needs to render `url`.
    #[must_use]
    pub fn page(&self, url: &str) -> PageNavigation<'_> {
        let Neighbors { previous, next } = self.neighbors(url);

        let active_path = self.active_path(url);
        let expanded_sections = active_path
            .as_ref()
            .map(|path| path.expanded_sections(&self.tree))
            .unwrap_or_default();

        PageNavigation {
            active_path,
            expanded_sections,
            previous,
            next,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scenario_sidebar() -> Sidebar {
        let catalog = vec![
            RouteDescriptor::new("/a", "Intro Overview | Brand", "guide"),
            RouteDescriptor::new("/b", "Api Reference | Brand", "guide"),
            RouteDescriptor::new("/c", "Setup | Brand", "start"),
        ];
        Sidebar::init(&catalog, &NamingRules::default()).unwrap()
    }

    fn link(leaf: Option<&NavLeaf>) -> Option<&str> {
        leaf.map(|leaf| leaf.link.as_str())
    }

    #[test]
    fn test_flattened_reading_order() {
        let sidebar = scenario_sidebar();

        let links: Vec<_> = sidebar.flattened().iter().map(|l| l.link.as_str()).collect();

        assert_eq!(links, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_neighbors_cross_section_boundary() {
        let sidebar = scenario_sidebar();

        let n = sidebar.neighbors("/b");

        assert_eq!(link(n.previous), Some("/a"));
        assert_eq!(link(n.next), Some("/c"));
    }

    #[test]
    fn test_page_navigation_for_known_url() {
        let sidebar = scenario_sidebar();

        let page = sidebar.page("/b");

        assert_eq!(page.active_path.unwrap().indices(), &[0, 1]);
        assert_eq!(page.expanded_sections, vec!["Guide"]);
        assert_eq!(link(page.previous), Some("/a"));
        assert_eq!(link(page.next), Some("/c"));
    }

    #[test]
    fn test_page_navigation_for_unknown_url() {
        let sidebar = scenario_sidebar();

        let page = sidebar.page("/");

        assert_eq!(
            page,
            PageNavigation {
                active_path: None,
                expanded_sections: Vec::new(),
                previous: None,
                next: None,
            }
        );
    }

    #[test]
    fn test_init_propagates_build_errors() {
        let catalog = vec![
            RouteDescriptor::new("/a", "A", "guide"),
            RouteDescriptor::new("/a", "A again", "guide"),
        ];

        let err = Sidebar::init(&catalog, &NamingRules::default()).unwrap_err();

        assert_eq!(err, NavError::DuplicateLink("/a".to_owned()));
    }

    #[test]
    fn test_page_navigation_serialization() {
        let sidebar = scenario_sidebar();

        let json = serde_json::to_value(sidebar.page("/a")).unwrap();

        assert_eq!(json["activePath"], serde_json::json!([0, 0]));
        assert_eq!(json["expandedSections"], serde_json::json!(["Guide"]));
        assert!(json["previous"].is_null());
        assert_eq!(json["next"]["name"], "API Reference");
    }
}
