use dioxus::prelude::*;

use ui::AuthProvider;
use views::{
    AdminDashboard, AdminEvents, AdminFeedback, AdminLostFound, AdminNotices, Home, Login,
    ManageAdmins, Register, StudentDashboard, StudentEvents, StudentFeedback, StudentLostFound,
    StudentNotices,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/student/dashboard")]
    StudentDashboard {},
    #[route("/student/notices")]
    StudentNotices {},
    #[route("/student/events")]
    StudentEvents {},
    #[route("/student/lostfound")]
    StudentLostFound {},
    #[route("/student/feedback")]
    StudentFeedback {},
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/notices")]
    AdminNotices {},
    #[route("/admin/events")]
    AdminEvents {},
    #[route("/admin/lostfound")]
    AdminLostFound {},
    #[route("/admin/feedback")]
    AdminFeedback {},
    #[route("/admin/admins")]
    ManageAdmins {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Unknown paths bounce back to the landing page instead of erroring
/// the router.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route, redirecting home");
    let nav = use_navigator();
    nav.replace(Route::Home {});

    rsx! {
        div { class: "guard-wait" }
    }
}
