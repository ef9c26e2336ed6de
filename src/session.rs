//! In-memory login sessions.
//!
//! Maps a random session id (carried in a signed cookie) to the logged-in
//! username. Sessions expire after the duration they were created with;
//! expired entries are dropped when touched and swept occasionally.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config;

/// Session entry with its expiry time
struct SessionEntry {
    username: String,
    expires_at: DateTime<Utc>,
}

/// Shared session store, cheap to clone into every request
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
        // Entries are plain data, so a poisoned map is still consistent
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a session for `username`, returning its id
    pub fn create(&self, username: &str, ttl: Duration) -> String {
        let session_id = generate_session_id();
        self.lock().insert(
            session_id.clone(),
            SessionEntry {
                username: username.to_string(),
                expires_at: Utc::now() + ttl,
            },
        );
        session_id
    }

    /// Username for a live session, or None if unknown or expired
    pub fn get(&self, session_id: &str) -> Option<String> {
        let mut sessions = self.lock();

        // Clean up expired sessions occasionally (~10% chance)
        if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
            cleanup_expired(&mut sessions);
        }

        let now = Utc::now();
        match sessions.get(session_id) {
            Some(entry) if entry.expires_at > now => Some(entry.username.clone()),
            Some(_) => {
                sessions.remove(session_id);
                None
            }
            None => None,
        }
    }

    /// End a session (logout). Unknown ids are ignored.
    pub fn remove(&self, session_id: &str) -> bool {
        self.lock().remove(session_id).is_some()
    }

    /// Number of stored sessions, including not-yet-swept expired ones
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Clean up expired sessions
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>) {
    let now = Utc::now();
    sessions.retain(|_, entry| entry.expires_at > now);
}

/// Generate a new session ID (32 random bytes, hex encoded)
pub fn generate_session_id() -> String {
    hex::encode(rand::random::<[u8; 32]>())
}
