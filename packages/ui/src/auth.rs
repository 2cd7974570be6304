//! Session context and the hooks every view reaches it through.

use std::sync::Arc;

use api::models::User;
use api::{ApiClient, SessionManager};
use dioxus::prelude::*;
use store::SharedSessionStore;

/// Who is signed in, if anyone.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the stored session has been restored (or rejected) on startup.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// The signed-in user and restore flag. Updates on login, logout and
/// session restore.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The shared HTTP client, provided by [`AuthProvider`].
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// The session manager, provided by [`AuthProvider`].
pub fn use_session() -> SessionManager {
    use_context::<SessionManager>()
}

fn default_store() -> SharedSessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::BrowserStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
}

/// Owns the session signal and restores any stored session once on
/// mount. Must wrap the router so layouts and guards can read it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let manager = use_hook(|| SessionManager::new(ApiClient::new(default_store())));
    let mut auth_state = use_signal(AuthState::default);

    use_context_provider(|| manager.client().clone());
    use_context_provider(|| manager.clone());
    use_context_provider(|| auth_state);

    // Restore the stored session on mount
    let restore = manager.clone();
    let _ = use_resource(move || {
        let manager = restore.clone();
        async move {
            let user = manager.initialize().await;
            auth_state.set(AuthState {
                user,
                loading: false,
            });
        }
    });

    rsx! {
        {children}
    }
}

/// Clears the session and sends the browser to the landing page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let manager = use_session();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        manager.logout();
        auth_state.set(AuthState {
            user: None,
            loading: false,
        });
        // Redirect to login
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
