//! Session-storage backed identity for the admin and voter flows.
//!
//! DESIGN
//! ======
//! Two explicit session objects replace loose storage keys. Both are only
//! written after the backend confirms success; a rejected login or face
//! verification leaves storage untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::SessionStore;

pub const ADMIN_LOGGED_IN: &str = "admin_logged_in";
pub const USERNAME: &str = "username";
pub const ENROLLMENT: &str = "enrollment";
pub const VOTER_ID: &str = "voter_id";
pub const VOTER_NAME: &str = "voter_name";

/// Every key written by a voter login.
pub const VOTER_KEYS: [&str; 4] = [USERNAME, ENROLLMENT, VOTER_ID, VOTER_NAME];

/// Client-side admin gate flag. Not a security boundary.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdminSession;

impl AdminSession {
    pub fn is_logged_in(store: &impl SessionStore) -> bool {
        store.get(ADMIN_LOGGED_IN).is_some_and(|v| !v.is_empty())
    }

    /// Set the flag if, and only if, the login call succeeded.
    pub fn persist_on_success<E>(store: &impl SessionStore, outcome: Result<(), E>) -> Result<(), E> {
        outcome?;
        store.set(ADMIN_LOGGED_IN, "true");
        Ok(())
    }

    pub fn clear(store: &impl SessionStore) {
        store.remove(ADMIN_LOGGED_IN);
    }
}

/// Identity of a face-verified voter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoterSession {
    pub username: String,
    pub enrollment: String,
    pub voter_id: String,
    pub voter_name: String,
}

impl VoterSession {
    /// Load the voter identity; `None` unless a voter id is present.
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let voter_id = store.get(VOTER_ID).filter(|id| !id.is_empty())?;
        Some(Self {
            username: store.get(USERNAME).unwrap_or_default(),
            enrollment: store.get(ENROLLMENT).unwrap_or_default(),
            voter_id,
            voter_name: store.get(VOTER_NAME).unwrap_or_default(),
        })
    }

    pub fn save(&self, store: &impl SessionStore) {
        store.set(USERNAME, &self.username);
        store.set(ENROLLMENT, &self.enrollment);
        store.set(VOTER_ID, &self.voter_id);
        store.set(VOTER_NAME, &self.voter_name);
    }

    /// Save the identity if, and only if, verification succeeded.
    pub fn persist_on_success<E>(store: &impl SessionStore, outcome: Result<Self, E>) -> Result<Self, E> {
        let session = outcome?;
        session.save(store);
        Ok(session)
    }

    pub fn clear(store: &impl SessionStore) {
        for key in VOTER_KEYS {
            store.remove(key);
        }
    }

    pub fn voter_id_number(&self) -> Option<i64> {
        self.voter_id.parse().ok()
    }

    /// Name to greet the voter with.
    pub fn display_name(&self) -> &str {
        if self.voter_name.is_empty() { &self.username } else { &self.voter_name }
    }
}
