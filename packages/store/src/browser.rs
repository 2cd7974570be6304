//! # localStorage session store: browser-side persistence
//!
//! [`BrowserStore`] is the [`SessionStore`] implementation used on the
//! **web platform**. It keeps the whole [`StoredSession`] under a single
//! localStorage key:
//!
//! | Key | Value |
//! |-----|-------|
//! | `"campus-hub-session"` | JSON `{ "token": "...", "user": { ... } }` |
//!
//! One key means one write and one remove, so the token can never outlive its
//! user object in storage no matter where a page load is interrupted.
//!
//! ## Error handling
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "no remembered session" and the user simply signs in again.

use web_sys::Storage;

use crate::session::{SessionStore, StoredSession};

const SESSION_KEY: &str = "campus-hub-session";

/// localStorage-backed SessionStore for the web platform.
///
/// Zero-size struct that looks the storage object up on every operation;
/// `window()` is fallible in workers, so holding a handle would only add a
/// place for a stale reference to live.
#[derive(Clone, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for BrowserStore {
    fn load(&self) -> Option<StoredSession> {
        let raw = self.storage()?.get_item(SESSION_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(_) => {
                // Unreadable record from an older schema; drop it rather than
                // restoring half a session.
                self.clear();
                None
            }
        }
    }

    fn save(&self, session: &StoredSession) {
        let Some(storage) = self.storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
    }

    fn clear(&self) {
        let Some(storage) = self.storage() else {
            return;
        };
        let _ = storage.remove_item(SESSION_KEY);
    }
}
