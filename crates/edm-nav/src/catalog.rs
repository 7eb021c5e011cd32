//! Route catalog input.
//!
//! The catalog is assembled by page registration outside this crate and
//! handed to [`Sidebar::init`](crate::Sidebar::init) once at startup.

use serde::{Deserialize, Serialize};

/// Separator between nested section keys (`learn/getting_started`).
pub const SECTION_SEPARATOR: char = '/';

/// A registered documentation page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Destination path, the routing key (e.g. "/docs/getting-started/introduction").
    pub path: String,
    /// Page title as registered, possibly with a branding suffix.
    pub title: String,
    /// Grouping key of the section the page belongs to.
    pub section: String,
}

impl RouteDescriptor {
    /// Create a route descriptor.
    pub fn new(
        path: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            section: section.into(),
        }
    }

    /// Section key split into its nesting levels, outermost first.
    ///
    /// Empty segments are skipped, so `"learn//basics"` and `"learn/basics"`
    /// describe the same grouping.
    pub(crate) fn section_segments(&self) -> impl Iterator<Item = &str> {
        self.section
            .split(SECTION_SEPARATOR)
            .filter(|segment| !segment.is_empty())
    }
}
