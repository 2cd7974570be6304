//! Student signup page.

use api::{AuthOutcome, RegisterRequest};
use dioxus::prelude::*;
use ui::{use_auth, use_session, AuthState};

use crate::views::dashboard_route;
use crate::Route;

/// Register page component. New accounts are always students; admins are
/// provisioned from the admin panel.
#[component]
pub fn Register() -> Element {
    let manager = use_session();
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let state = auth();
    if !state.loading {
        if let Some(user) = &state.user {
            nav.replace(dashboard_route(user.role));
            return rsx! {};
        }
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let manager = manager.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let request = RegisterRequest::new(n, e, p, department().trim().to_string());
            match manager.register(&request).await {
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
                h1 { class: "auth-title", "Create account" }
                p { class: "auth-sub", "Join Campus Hub as a student" }

                form { class: "auth-form", onsubmit: handle_register,
                    if let Some(err) = error() {
                        div { class: "auth-error", "{err}" }
                    }

                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Full name",
                        value: "{name}",
                        oninput: move |evt: FormEvent| name.set(evt.value()),
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
                        r#type: "text",
                        placeholder: "Department (optional)",
                        value: "{department}",
                        oninput: move |evt: FormEvent| department.set(evt.value()),
                    }

                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: "{confirm_password}",
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Register" }
                    }
                }

                p { class: "auth-switch",
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
