//! Active path resolution.
//!
//! The active path is the chain of child indices leading from the root to
//! the leaf being viewed. The sidebar expands every section along it.

use serde::Serialize;

use crate::tree::{NavNode, NavTree};

/// Child indices from the root to a leaf, one per depth level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivePath(Vec<usize>);

impl ActivePath {
    /// Resolve the active path for `url`.
    ///
    /// Searches depth-first, children left to right, and returns the first
    /// leaf whose link equals `url`. Returns `None` when no leaf matches;
    /// there are no partial paths.
    #[must_use]
    pub fn resolve(tree: &NavTree, url: &str) -> Option<Self> {
        let mut indices = find_in(&tree.items, url)?;
        // Indices are pushed innermost first while unwinding
        indices.reverse();
        Some(Self(indices))
    }

    /// Child indices, outermost first.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Follow the indices from the root.
    ///
    /// Returns `None` if the path does not fit `tree`.
    #[must_use]
    pub fn walk<'t>(&self, tree: &'t NavTree) -> Option<&'t NavNode> {
        let (&first, rest) = self.0.split_first()?;
        rest.iter()
            .try_fold(tree.items.get(first)?, |node, &i| node.children().get(i))
    }

    /// Names of the sections to expand, outermost first.
    #[must_use]
    pub fn expanded_sections<'t>(&self, tree: &'t NavTree) -> Vec<&'t str> {
        let mut names = Vec::new();
        let mut nodes = tree.items.as_slice();

        for &i in &self.0 {
            let Some(node) = nodes.get(i) else {
                break;
            };
            if let NavNode::Section(section) = node {
                names.push(section.name.as_str());
            }
            nodes = node.children();
        }

        names
    }
}

/// Recursive search returning indices innermost first.
fn find_in(nodes: &[NavNode], url: &str) -> Option<Vec<usize>> {
    nodes.iter().enumerate().find_map(|(i, node)| {
        let mut indices = match node {
            NavNode::Leaf(leaf) => (leaf.link == url).then(Vec::new)?,
            NavNode::Section(section) => find_in(&section.children, url)?,
        };
        indices.push(i);
        Some(indices)
    })
}
