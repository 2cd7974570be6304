use std::sync::{Arc, Mutex};

use crate::session::{SessionStore, StoredSession};

/// In-memory SessionStore for testing and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<StoredSession>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<StoredSession> {
        self.session.lock().unwrap().clone()
    }

    fn save(&self, session: &StoredSession) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_store_has_no_session() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = MemoryStore::new();
        let session = StoredSession::new("tok-123", json!({"name": "Asha"}));

        store.save(&session);

        let loaded = store.load().unwrap();
        assert_eq!(loaded, session);
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_save_replaces_previous_session() {
        let store = MemoryStore::new();
        store.save(&StoredSession::new("old", json!({"name": "A"})));
        store.save(&StoredSession::new("new", json!({"name": "B"})));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "new");
        assert_eq!(loaded.user["name"], "B");
    }

    #[test]
    fn test_clear_removes_token_and_user_together() {
        let store = MemoryStore::new();
        store.save(&StoredSession::new("tok", json!({"name": "A"})));

        store.clear();

        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_cloned_handles_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.save(&StoredSession::new("tok", json!({})));
        assert!(other.load().is_some());

        other.clear();
        assert!(store.load().is_none());
    }
}
