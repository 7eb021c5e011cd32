//! Previous/next links along the reading order.

use serde::Serialize;

use crate::tree::NavLeaf;

/// Leaves adjacent to the current page in reading order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors<'a> {
    /// Preceding leaf, absent on the first page.
    pub previous: Option<&'a NavLeaf>,
    /// Following leaf, absent on the last page.
    pub next: Option<&'a NavLeaf>,
}

/// Find the leaves before and after `url` in a flattened sequence.
///
/// Scans linearly for the first leaf whose link equals `url`. Section
/// boundaries do not matter: the last page of one section links to the
/// first page of the next. Unknown URLs have no neighbors.
#[must_use]
pub fn neighbors<'a>(flattened: &'a [NavLeaf], url: &str) -> Neighbors<'a> {
    let Some(i) = flattened.iter().position(|leaf| leaf.link == url) else {
        return Neighbors::default();
    };

    Neighbors {
        previous: i.checked_sub(1).and_then(|prev| flattened.get(prev)),
        next: flattened.get(i + 1),
    }
}
