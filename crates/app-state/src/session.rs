//! Session state
//!
//! This module holds the identity returned by the authentication provider
//! after a successful sign-in. The store is shared between screens: the
//! login screen writes it and the feed screen reads the current user.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identity/session object returned by the authentication provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Provider-assigned user id
    pub uid: String,
    /// Email address used to sign in
    pub email: String,
    /// When the session was established
    pub signed_in_at: DateTime<Utc>,
}

impl UserSession {
    /// Create a session stamped with the current time
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            signed_in_at: Utc::now(),
        }
    }
}

/// Shared holder of the current user session
///
/// Cloning the store yields another handle to the same session slot.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Option<UserSession>>>,
}

impl SessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session
    pub fn set(&self, session: UserSession) {
        tracing::debug!(uid = %session.uid, "session stored");
        *self.current.write() = Some(session);
    }

    /// Get a copy of the current session, if any
    pub fn current(&self) -> Option<UserSession> {
        self.current.read().clone()
    }

    /// Drop the current session, returning it
    pub fn clear(&self) -> Option<UserSession> {
        self.current.write().take()
    }

    /// Whether a user is signed in
    pub fn is_signed_in(&self) -> bool {
        self.current.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = SessionStore::new();
        assert!(!store.is_signed_in());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let store = SessionStore::new();
        store.set(UserSession::new("uid-1", "a@b.com"));

        assert!(store.is_signed_in());
        assert_eq!(store.current().unwrap().uid, "uid-1");

        let cleared = store.clear().unwrap();
        assert_eq!(cleared.email, "a@b.com");
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_clones_share_slot() {
        let store = SessionStore::new();
        let other = store.clone();

        other.set(UserSession::new("uid-2", "c@d.com"));
        assert_eq!(store.current().unwrap().uid, "uid-2");
    }

    #[test]
    fn test_session_serialization() {
        let session = UserSession::new("uid-3", "e@f.com");
        let json = serde_json::to_string(&session).unwrap();
        let restored: UserSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
