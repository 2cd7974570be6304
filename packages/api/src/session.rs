//! # Session lifecycle
//!
//! [`SessionManager`] owns the four session operations: restore on startup,
//! login, register, logout. It is the only writer of the durable session
//! record besides the 401 handler in the client.
//!
//! Login and register never return `Err`. Bad credentials, validation
//! rejections, and unreachable servers all come back as
//! [`AuthOutcome::Failure`] with a message fit for display, so callers have
//! exactly two paths and nothing to `unwrap`.

use serde::{Deserialize, Serialize};
use store::StoredSession;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::models::User;

/// Result of a credential exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Success(User),
    Failure(String),
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl RegisterRequest {
    /// Blank departments are dropped rather than sent as empty strings.
    pub fn new(name: String, email: String, password: String, department: String) -> Self {
        let department = department.trim();
        Self {
            name,
            email,
            password,
            department: (!department.is_empty()).then(|| department.to_string()),
        }
    }
}

/// Login/register responses carry the token and the user side by side.
#[derive(Deserialize)]
struct AuthData {
    token: String,
    user: User,
}

#[derive(Clone)]
pub struct SessionManager {
    client: ApiClient,
}

impl SessionManager {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Startup restore: if a session record survives in durable storage,
    /// confirm it against `/auth/me`. Any failure, network or rejection,
    /// clears storage so no half-valid session lingers.
    pub async fn initialize(&self) -> Option<User> {
        self.client.store().load()?;

        let validated = match self.client.get("/auth/me", &[]).await {
            Ok(envelope) => envelope.into_item::<User>(),
            Err(err) => Err(err),
        };

        match validated {
            Ok(user) => {
                tracing::info!("restored session for {}", user.email);
                Some(user)
            }
            Err(err) => {
                tracing::warn!("stored session rejected: {err}");
                self.client.store().clear();
                None
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        let body = LoginRequest { email, password };
        match self.client.post("/auth/login", &body).await {
            Ok(envelope) => self.adopt(envelope, "Login failed"),
            Err(err) => AuthOutcome::Failure(err.to_string()),
        }
    }

    pub async fn register(&self, profile: &RegisterRequest) -> AuthOutcome {
        match self.client.post("/auth/register", profile).await {
            Ok(envelope) => self.adopt(envelope, "Registration failed"),
            Err(err) => AuthOutcome::Failure(err.to_string()),
        }
    }

    /// Synchronous by contract: storage is cleared before this returns, no
    /// network involved.
    pub fn logout(&self) {
        self.client.store().clear();
        tracing::info!("signed out");
    }

    /// Persist the token+user pair from a successful credential exchange and
    /// hand the user back. A 2xx with `success: false` or a malformed body
    /// counts as a failure with the generic message.
    fn adopt(&self, envelope: Envelope, fallback: &str) -> AuthOutcome {
        if !envelope.success {
            return AuthOutcome::Failure(fallback.to_string());
        }
        match envelope.into_item::<AuthData>() {
            Ok(AuthData { token, user }) => {
                self.client
                    .store()
                    .save(&StoredSession::new(token, user.to_stored()));
                tracing::info!("signed in as {} ({})", user.email, user.role.as_str());
                AuthOutcome::Success(user)
            }
            Err(_) => AuthOutcome::Failure(fallback.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use store::{MemoryStore, SessionStore};

    // Nothing listens on port 9; connection attempts fail immediately, which
    // is exactly the "server gone" shape these tests need.
    fn manager_with(store: MemoryStore) -> SessionManager {
        let client = ApiClient::with_base_url("http://127.0.0.1:9/api", Arc::new(store));
        SessionManager::new(client)
    }

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.save(&StoredSession::new(
            "tok-1",
            serde_json::json!({"_id":"u1","name":"Asha","email":"a@campus.edu","role":"student"}),
        ));
        store
    }

    #[tokio::test]
    async fn test_initialize_without_stored_session_stays_signed_out() {
        let store = MemoryStore::new();
        let manager = manager_with(store.clone());

        assert!(manager.initialize().await.is_none());
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_initialize_clears_storage_when_validation_fails() {
        let store = seeded_store();
        let manager = manager_with(store.clone());

        assert!(manager.initialize().await.is_none());
        // No partial state: token and user are gone together.
        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_reports_message_and_stores_nothing() {
        let store = MemoryStore::new();
        let manager = manager_with(store.clone());

        let outcome = manager.login("a@campus.edu", "pw").await;
        match outcome {
            AuthOutcome::Failure(message) => assert!(!message.is_empty()),
            AuthOutcome::Success(_) => panic!("login cannot succeed without a server"),
        }
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_storage_synchronously() {
        let store = seeded_store();
        let manager = manager_with(store.clone());

        manager.logout();

        assert!(store.load().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_adopt_rejects_unsuccessful_envelope() {
        let store = MemoryStore::new();
        let manager = manager_with(store.clone());

        let envelope: Envelope =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        let outcome = manager.adopt(envelope, "Login failed");
        assert_eq!(outcome, AuthOutcome::Failure("Login failed".to_string()));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_adopt_persists_token_and_user_as_a_pair() {
        let store = MemoryStore::new();
        let manager = manager_with(store.clone());

        let envelope: Envelope = serde_json::from_str(
            r#"{"success":true,"data":{"token":"tok-9","user":
                {"_id":"u2","name":"Dev","email":"d@campus.edu","role":"admin"}}}"#,
        )
        .unwrap();

        match manager.adopt(envelope, "Login failed") {
            AuthOutcome::Success(user) => assert_eq!(user.email, "d@campus.edu"),
            AuthOutcome::Failure(message) => panic!("unexpected failure: {message}"),
        }

        let stored = store.load().unwrap();
        assert_eq!(stored.token, "tok-9");
        let user = User::from_stored(&stored.user).unwrap();
        assert_eq!(user.name, "Dev");
    }

    #[test]
    fn test_register_request_omits_blank_department() {
        let profile = RegisterRequest::new(
            "Asha".into(),
            "a@campus.edu".into(),
            "secret1".into(),
            "   ".into(),
        );
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("department").is_none());

        let profile = RegisterRequest::new(
            "Asha".into(),
            "a@campus.edu".into(),
            "secret1".into(),
            "Physics".into(),
        );
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["department"], "Physics");
    }
}
