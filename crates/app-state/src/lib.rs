//! Application state management for Artdeck
//!
//! This crate holds the state shared between screens: the signed-in user
//! session and mutation tracking for in-flight requests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mutation;
pub mod session;

pub use mutation::{MutationError, MutationState, MutationTracker, PendingMutation};
pub use session::{SessionStore, UserSession};
