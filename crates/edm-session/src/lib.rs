//! Per-client UI session state for the Edmate landing page.
//!
//! This crate provides:
//! - [`SessionState`]: the reactive state of one client
//! - [`Handler`] / [`FollowUp`]: transitions and the work they request
//! - [`Session`]: a tokio task running one session's handlers in order
//! - [`SessionRegistry`]: live sessions indexed by id
//!
//! # Signup flow
//!
//! ```text
//! Signup ──Now──► StartEffect (show_effect = true)
//!                     │
//!                     └──After(5s)──► StopEffect (show_effect = false)
//! ```
//!
//! Pending `StopEffect` timers are never cancelled. Signing up twice within
//! the delay leaves two timers, and the first one to fire hides the effect.

mod registry;
mod session;
mod state;

pub use registry::{DEFAULT_IDLE_TIMEOUT, SessionRegistry};
pub use session::{Session, SessionError, SessionSnapshot};
pub use state::{EFFECT_DURATION, FollowUp, Handler, SessionState};
