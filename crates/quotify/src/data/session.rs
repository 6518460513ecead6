//! Session state
//!
//! The last displayed quote, persisted so `fav` and `share` act on the
//! quote the user just saw. Unlike favorites the session is disposable:
//! corrupt or missing content degrades to an empty session.

use crate::config::storage::SESSION_KEY;
use crate::data::storage::KeyValueStore;
use crate::data::types::Quote;
use serde::{Deserialize, Serialize};

/// Session file format version for migrations
const SESSION_VERSION: u32 = 1;

fn default_version() -> u32 {
    SESSION_VERSION
}

/// Persisted session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Last quote shown to the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_quote: Option<Quote>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            version: SESSION_VERSION,
            last_quote: None,
        }
    }
}

impl Session {
    /// Load the session, degrading to an empty one on any problem
    pub fn load(store: &impl KeyValueStore) -> Self {
        let raw = match store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read session, starting fresh");
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "stored session is corrupt, starting fresh");
                Self::default()
            }
        }
    }

    /// Persist the session; returns `false` on storage failure
    pub fn save(&self, store: &impl KeyValueStore) -> bool {
        let raw = match serde_json::to_string(self) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize session");
                return false;
            }
        };

        match store.set(SESSION_KEY, &raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to save session");
                false
            }
        }
    }
}
