//! Login page view.

use api::AuthOutcome;
use dioxus::prelude::*;
use ui::{use_auth, use_session, AuthState};

use crate::views::dashboard_route;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let manager = use_session();
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the dashboard
    let state = auth();
    if !state.loading {
        if let Some(user) = &state.user {
            nav.replace(dashboard_route(user.role));
            return rsx! {};
        }
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let manager = manager.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            match manager.login(&e, &p).await {
                AuthOutcome::Success(user) => {
                    let role = user.role;
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    nav.replace(dashboard_route(role));
                }
                AuthOutcome::Failure(message) => {
                    loading.set(false);
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "Welcome back" }
                p { class: "auth-sub", "Sign in to Campus Hub" }

                form { class: "auth-form", onsubmit: handle_login,
                    if let Some(err) = error() {
                        div { class: "auth-error", "{err}" }
                    }

                    input {
                        class: "form-input",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "auth-switch",
                    "No account yet? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
