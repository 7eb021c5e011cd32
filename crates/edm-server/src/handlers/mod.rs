//! HTTP request handlers.

pub(crate) mod navigation;
pub(crate) mod sessions;
pub(crate) mod sidebar;
