//! CLI command implementations.

pub(crate) mod serve;
pub(crate) mod sidebar;

pub(crate) use serve::ServeArgs;
pub(crate) use sidebar::SidebarArgs;
