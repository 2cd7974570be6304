use api::models::Role;
use dioxus::prelude::*;
use ui::{decide_access, use_auth, GuardDecision, Navbar, Sidebar, Spinner};

use crate::Route;

pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard {},
        Role::Student => Route::StudentDashboard {},
    }
}

/// Shell for every signed-in page: navbar on top, role navigation on the
/// left, guarded content on the right. Redirects are decided by
/// [`decide_access`]; a wrong-role visitor lands on their own dashboard.
#[component]
pub fn DashboardLayout(require: Role, active_path: String, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    match decide_access(&state, require) {
        GuardDecision::Wait => rsx! {
            div { class: "guard-wait", Spinner {} }
        },
        GuardDecision::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardDecision::RedirectToDashboard(role) => {
            nav.replace(dashboard_route(role));
            rsx! {}
        }
        GuardDecision::Allow => rsx! {
            Navbar {}
            div { class: "dashboard-shell",
                Sidebar {
                    active_path: active_path,
                    on_navigate: move |path: String| {
                        nav.push(path);
                    },
                }
                main { class: "dashboard-content", {children} }
            }
        },
    }
}
