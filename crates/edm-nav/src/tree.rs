//! Navigation tree model and builder.
//!
//! # Architecture
//!
//! The tree is built in two passes. The first pass groups catalog entries
//! into an intermediate structure keyed by section segment, keeping
//! first-seen order at every level. The second pass turns the groups into
//! [`NavNode`]s with derived display names. Path uniqueness is checked
//! against a `HashSet` while grouping.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::RouteDescriptor;
use crate::naming::NamingRules;

/// Error raised while building a navigation tree from a malformed catalog.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Two routes share a destination path.
    #[error("Duplicate route path in catalog: {0}")]
    DuplicateLink(String),
    /// A route was registered without a destination path.
    #[error("Route \"{title}\" has an empty path")]
    EmptyPath {
        /// Title of the offending route.
        title: String,
    },
}

/// A navigable sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLeaf {
    /// Display name.
    pub name: String,
    /// Destination path.
    pub link: String,
}

/// A non-navigable grouping of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Display name.
    pub name: String,
    /// Child entries in catalog order. Never empty.
    pub children: Vec<NavNode>,
}

/// One node of the sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Page entry.
    Leaf(NavLeaf),
    /// Section grouping.
    Section(NavSection),
}

impl NavNode {
    /// Display name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf(leaf) => &leaf.name,
            Self::Section(section) => &section.name,
        }
    }

    /// Destination path, `None` for sections.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(&leaf.link),
            Self::Section(_) => None,
        }
    }

    /// Child nodes, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        match self {
            Self::Leaf(_) => &[],
            Self::Section(section) => &section.children,
        }
    }
}

/// Synthetic root of the sidebar.
///
/// Holds the top-level sections in first-seen catalog order. Routes
/// registered without a section key sit directly at this level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavTree {
    /// Top-level nodes.
    pub items: Vec<NavNode>,
}

impl NavTree {
    /// Build a navigation tree from a route catalog.
    ///
    /// Routes are grouped by section key, preserving the order in which each
    /// section is first seen; pages keep their catalog order inside a
    /// section. Nested keys (`learn/basics`) produce nested sections.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::EmptyPath`] if a route has an empty path and
    /// [`NavError::DuplicateLink`] if two routes share a path.
    pub fn build(catalog: &[RouteDescriptor], naming: &NamingRules) -> Result<Self, NavError> {
        let mut seen = HashSet::with_capacity(catalog.len());
        let mut root = Group::default();

        for route in catalog {
            if route.path.is_empty() {
                return Err(NavError::EmptyPath {
                    title: route.title.clone(),
                });
            }
            if !seen.insert(route.path.as_str()) {
                return Err(NavError::DuplicateLink(route.path.clone()));
            }

            let group = route
                .section_segments()
                .fold(&mut root, |group, segment| group.subgroup(segment));
            group.entries.push(Entry::Route(route));
        }

        Ok(Self {
            items: root.into_nodes(naming),
        })
    }

    /// True if the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Leaves in reading order.
    ///
    /// Depth-first pre-order, children left to right. Sections are traversed
    /// but never emitted.
    #[must_use]
    pub fn flatten(&self) -> Vec<NavLeaf> {
        fn collect(nodes: &[NavNode], out: &mut Vec<NavLeaf>) {
            for node in nodes {
                match node {
                    NavNode::Leaf(leaf) => out.push(leaf.clone()),
                    NavNode::Section(section) => collect(&section.children, out),
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.items, &mut out);
        out
    }

    /// Count of sections at every depth.
    #[must_use]
    pub fn section_count(&self) -> usize {
        fn count(nodes: &[NavNode]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    NavNode::Leaf(_) => 0,
                    NavNode::Section(section) => 1 + count(&section.children),
                })
                .sum()
        }

        count(&self.items)
    }
}

/// Intermediate grouping used while building.
#[derive(Default)]
struct Group<'a> {
    key: &'a str,
    entries: Vec<Entry<'a>>,
}

enum Entry<'a> {
    Route(&'a RouteDescriptor),
    Group(Group<'a>),
}

impl<'a> Group<'a> {
    /// Get the child group for `key`, appending it if first seen.
    fn subgroup(&mut self, key: &'a str) -> &mut Group<'a> {
        let position = self
            .entries
            .iter()
            .position(|entry| matches!(entry, Entry::Group(group) if group.key == key));

        let idx = position.unwrap_or_else(|| {
            self.entries.push(Entry::Group(Group {
                key,
                entries: Vec::new(),
            }));
            self.entries.len() - 1
        });

        match &mut self.entries[idx] {
            Entry::Group(group) => group,
            Entry::Route(_) => unreachable!("index points at a group"),
        }
    }

    fn into_nodes(self, naming: &NamingRules) -> Vec<NavNode> {
        self.entries
            .into_iter()
            .map(|entry| match entry {
                Entry::Route(route) => NavNode::Leaf(NavLeaf {
                    name: naming.leaf_name(&route.title),
                    link: route.path.clone(),
                }),
                Entry::Group(group) => NavNode::Section(NavSection {
                    name: naming.section_name(group.key),
                    children: group.into_nodes(naming),
                }),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn leaf(name: &str, link: &str) -> NavNode {
        NavNode::Leaf(NavLeaf {
            name: name.to_owned(),
            link: link.to_owned(),
        })
    }

    fn section(name: &str, children: Vec<NavNode>) -> NavNode {
        NavNode::Section(NavSection {
            name: name.to_owned(),
            children,
        })
    }

    fn scenario_catalog() -> Vec<RouteDescriptor> {
        vec![
            RouteDescriptor::new("/a", "Intro Overview | Brand", "guide"),
            RouteDescriptor::new("/b", "Api Reference | Brand", "guide"),
            RouteDescriptor::new("/c", "Setup | Brand", "start"),
        ]
    }

    #[test]
    fn test_build_groups_by_section() {
        let tree = NavTree::build(&scenario_catalog(), &NamingRules::default()).unwrap();

        assert_eq!(
            tree.items,
            vec![
                section(
                    "Guide",
                    vec![leaf("Overview", "/a"), leaf("API Reference", "/b")]
                ),
                section("Start", vec![leaf("Setup", "/c")]),
            ]
        );
    }

    #[test]
    fn test_build_preserves_first_seen_section_order() {
        let catalog = vec![
            RouteDescriptor::new("/z1", "Z1", "zeta"),
            RouteDescriptor::new("/a1", "A1", "alpha"),
            RouteDescriptor::new("/z2", "Z2", "zeta"),
        ];

        let tree = NavTree::build(&catalog, &NamingRules::default()).unwrap();

        assert_eq!(
            tree.items,
            vec![
                section("Zeta", vec![leaf("Z1", "/z1"), leaf("Z2", "/z2")]),
                section("Alpha", vec![leaf("A1", "/a1")]),
            ]
        );
    }

    #[test]
    fn test_build_nested_sections() {
        let catalog = vec![
            RouteDescriptor::new("/intro", "Intro", "learn/getting_started"),
            RouteDescriptor::new("/vars", "Vars", "learn/state"),
            RouteDescriptor::new("/install", "Install", "learn/getting_started"),
            RouteDescriptor::new("/gallery", "Gallery", "reference"),
        ];

        let tree = NavTree::build(&catalog, &NamingRules::default()).unwrap();

        assert_eq!(
            tree.items,
            vec![
                section(
                    "Learn",
                    vec![
                        section(
                            "Getting Started",
                            vec![leaf("Intro", "/intro"), leaf("Install", "/install")]
                        ),
                        section("State", vec![leaf("Vars", "/vars")]),
                    ]
                ),
                section("Reference", vec![leaf("Gallery", "/gallery")]),
            ]
        );
        assert_eq!(tree.section_count(), 4);
    }

    #[test]
    fn test_build_route_without_section_sits_at_root() {
        let catalog = vec![
            RouteDescriptor::new("/faq", "FAQ", ""),
            RouteDescriptor::new("/a", "A", "guide"),
        ];

        let tree = NavTree::build(&catalog, &NamingRules::default()).unwrap();

        assert_eq!(
            tree.items,
            vec![leaf("FAQ", "/faq"), section("Guide", vec![leaf("A", "/a")])]
        );
    }

    #[test]
    fn test_build_empty_catalog() {
        let tree = NavTree::build(&[], &NamingRules::default()).unwrap();

        assert!(tree.is_empty());
        assert!(tree.flatten().is_empty());
    }

    #[test]
    fn test_build_rejects_duplicate_path() {
        let catalog = vec![
            RouteDescriptor::new("/a", "A", "guide"),
            RouteDescriptor::new("/a", "Other A", "start"),
        ];

        let err = NavTree::build(&catalog, &NamingRules::default()).unwrap_err();

        assert_eq!(err, NavError::DuplicateLink("/a".to_owned()));
    }

    #[test]
    fn test_build_rejects_empty_path() {
        let catalog = vec![RouteDescriptor::new("", "Broken", "guide")];

        let err = NavTree::build(&catalog, &NamingRules::default()).unwrap_err();

        assert_eq!(
            err,
            NavError::EmptyPath {
                title: "Broken".to_owned()
            }
        );
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_sections_are_never_empty() {
        fn check(nodes: &[NavNode]) {
            for node in nodes {
                match node {
                    NavNode::Leaf(leaf) => assert!(!leaf.link.is_empty()),
                    NavNode::Section(section) => {
                        assert!(!section.children.is_empty());
                        check(&section.children);
                    }
                }
            }
        }

        let catalog = vec![
            RouteDescriptor::new("/x", "X", "a/b/c"),
            RouteDescriptor::new("/y", "Y", "a"),
        ];
        let tree = NavTree::build(&catalog, &NamingRules::default()).unwrap();

        check(&tree.items);
    }

    #[test]
    fn test_flatten_lists_leaves_in_catalog_order() {
        let tree = NavTree::build(&scenario_catalog(), &NamingRules::default()).unwrap();

        let links: Vec<_> = tree.flatten().into_iter().map(|leaf| leaf.link).collect();

        assert_eq!(links, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_flatten_length_matches_catalog() {
        let catalog: Vec<_> = (0..25)
            .map(|i| {
                RouteDescriptor::new(format!("/p{i}"), format!("P{i}"), format!("s{}", i % 4))
            })
            .collect();

        let tree = NavTree::build(&catalog, &NamingRules::default()).unwrap();
        let flat = tree.flatten();

        assert_eq!(flat.len(), catalog.len());
        // Leaves follow section grouping; within a section catalog order holds
        let s1: Vec<_> = flat
            .iter()
            .filter(|leaf| catalog.iter().any(|r| r.path == leaf.link && r.section == "s1"))
            .map(|leaf| leaf.link.as_str())
            .collect();
        assert_eq!(s1, vec!["/p1", "/p5", "/p9", "/p13", "/p17", "/p21"]);
    }

    #[test]
    fn test_flatten_ignores_nesting_differences() {
        let flat_catalog = vec![
            RouteDescriptor::new("/a", "A", "one"),
            RouteDescriptor::new("/b", "B", "one"),
            RouteDescriptor::new("/c", "C", "two"),
        ];
        let nested_catalog = vec![
            RouteDescriptor::new("/a", "A", "one/x"),
            RouteDescriptor::new("/b", "B", "one/y"),
            RouteDescriptor::new("/c", "C", "two/z/w"),
        ];

        let flat = NavTree::build(&flat_catalog, &NamingRules::default()).unwrap();
        let nested = NavTree::build(&nested_catalog, &NamingRules::default()).unwrap();

        assert_eq!(flat.flatten(), nested.flatten());
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let tree = NavTree::build(&scenario_catalog(), &NamingRules::default()).unwrap();

        assert_eq!(tree.flatten(), tree.flatten());
    }

    #[test]
    fn test_nav_node_accessors() {
        let node = section("Guide", vec![leaf("Setup", "/setup")]);

        assert_eq!(node.name(), "Guide");
        assert_eq!(node.link(), None);
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].link(), Some("/setup"));
        assert!(node.children()[0].children().is_empty());
    }

    #[test]
    fn test_nav_tree_serialization() {
        let tree = NavTree::build(&scenario_catalog(), &NamingRules::default()).unwrap();

        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json["items"][0]["name"], "Guide");
        assert!(json["items"][0].get("link").is_none());
        assert_eq!(json["items"][0]["children"][1]["name"], "API Reference");
        assert_eq!(json["items"][0]["children"][1]["link"], "/b");
        assert!(json["items"][0]["children"][1].get("children").is_none());
    }
}
