use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The one durable record the client keeps between page loads.
///
/// Token and user travel together as a single serialized value so a crash or
/// interrupted write can never leave a token behind without its user (or the
/// reverse). Anything that wants only one half goes through this pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    /// The identity object as the server sent it. Kept as raw JSON here so
    /// this crate stays below the model layer in the dependency graph.
    pub user: serde_json::Value,
}

impl StoredSession {
    pub fn new(token: impl Into<String>, user: serde_json::Value) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Durable session storage.
///
/// Synchronous on purpose: the browser backend is localStorage, which is a
/// synchronous API, and logout must clear storage without awaiting anything.
pub trait SessionStore {
    /// Current stored session, if one survives from a previous visit.
    fn load(&self) -> Option<StoredSession>;

    /// Replace whatever is stored with `session`, as one write.
    fn save(&self, session: &StoredSession);

    /// Remove the stored session entirely.
    fn clear(&self);

    /// Token of the stored session, if any.
    fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }
}

/// Shared handle used by the HTTP client and the session manager, which are
/// the two writers the storage schema has.
pub type SharedSessionStore = Arc<dyn SessionStore>;
