//! Mutation tracking
//!
//! This module tracks the lifecycle of a single kind of mutation (for example
//! a sign-in request) so callers can refuse to start a second one while the
//! first is still in flight.

use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

/// Mutation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MutationError {
    /// Another mutation of this kind is still pending
    #[error("Mutation already pending: {0}")]
    AlreadyPending(String),
}

/// Result type for mutation operations
pub type Result<T> = std::result::Result<T, MutationError>;

/// Mutation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationState {
    /// No mutation has run yet
    #[default]
    Idle,

    /// A mutation is in flight
    Pending,

    /// The last mutation succeeded
    Success,

    /// The last mutation failed or was abandoned
    Error,
}

/// Tracks whether a named mutation is pending
///
/// Cloning the tracker yields another handle to the same state.
#[derive(Debug, Clone)]
pub struct MutationTracker {
    name: Arc<str>,
    state: Arc<Mutex<MutationState>>,
}

impl MutationTracker {
    /// Create a new tracker in the idle state
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
            state: Arc::new(Mutex::new(MutationState::Idle)),
        }
    }

    /// Name used in logs and errors
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current state
    pub fn state(&self) -> MutationState {
        *self.state.lock()
    }

    /// Whether a mutation is in flight
    pub fn is_pending(&self) -> bool {
        self.state() == MutationState::Pending
    }

    /// Mark a mutation as started
    ///
    /// Fails if one is already pending. The returned guard must be completed;
    /// dropping it without completion records [`MutationState::Error`].
    pub fn try_begin(&self) -> Result<PendingMutation> {
        let mut state = self.state.lock();
        if *state == MutationState::Pending {
            return Err(MutationError::AlreadyPending(self.name.to_string()));
        }
        *state = MutationState::Pending;
        tracing::debug!(mutation = %self.name, "mutation pending");

        Ok(PendingMutation {
            tracker: self.clone(),
            done: false,
        })
    }

    fn finish(&self, outcome: MutationState) {
        *self.state.lock() = outcome;
        tracing::debug!(mutation = %self.name, ?outcome, "mutation finished");
    }
}

/// Guard for an in-flight mutation
#[derive(Debug)]
pub struct PendingMutation {
    tracker: MutationTracker,
    done: bool,
}

impl PendingMutation {
    /// Record success
    pub fn succeed(mut self) {
        self.done = true;
        self.tracker.finish(MutationState::Success);
    }

    /// Record failure
    pub fn fail(mut self) {
        self.done = true;
        self.tracker.finish(MutationState::Error);
    }
}

impl Drop for PendingMutation {
    fn drop(&mut self) {
        if !self.done {
            self.tracker.finish(MutationState::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let tracker = MutationTracker::new("sign_in");
        assert_eq!(tracker.state(), MutationState::Idle);
        assert!(!tracker.is_pending());
        assert_eq!(tracker.name(), "sign_in");
    }

    #[test]
    fn test_begin_and_succeed() {
        let tracker = MutationTracker::new("sign_in");
        let pending = tracker.try_begin().unwrap();
        assert!(tracker.is_pending());

        pending.succeed();
        assert_eq!(tracker.state(), MutationState::Success);
    }

    #[test]
    fn test_second_begin_rejected_while_pending() {
        let tracker = MutationTracker::new("sign_in");
        let _pending = tracker.try_begin().unwrap();

        let err = tracker.try_begin().unwrap_err();
        assert_eq!(err, MutationError::AlreadyPending("sign_in".to_string()));
    }

    #[test]
    fn test_begin_allowed_after_failure() {
        let tracker = MutationTracker::new("sign_in");
        tracker.try_begin().unwrap().fail();
        assert_eq!(tracker.state(), MutationState::Error);

        assert!(tracker.try_begin().is_ok());
    }

    #[test]
    fn test_dropped_guard_records_error() {
        let tracker = MutationTracker::new("sign_in");
        {
            let _pending = tracker.try_begin().unwrap();
        }
        assert_eq!(tracker.state(), MutationState::Error);
    }

    #[test]
    fn test_clones_share_pending_state() {
        let tracker = MutationTracker::new("sign_in");
        let other = tracker.clone();
        let pending = other.try_begin().unwrap();
        assert!(tracker.is_pending());
        assert!(tracker.try_begin().is_err());

        pending.succeed();
        assert!(!tracker.is_pending());
        assert!(tracker.try_begin().is_ok());
    }
}
