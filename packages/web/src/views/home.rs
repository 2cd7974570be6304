use dioxus::prelude::*;
use ui::icons::{FaBoxOpen, FaBullhorn, FaCalendarDays, FaComments};
use ui::{use_auth, Icon};

use crate::views::dashboard_route;
use crate::Route;

/// Public landing page. Signed-in visitors are taken straight to their
/// dashboard.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    if !state.loading {
        if let Some(user) = &state.user {
            nav.replace(dashboard_route(user.role));
            return rsx! {};
        }
    }

    rsx! {
        div { class: "landing",
            section { class: "landing-hero",
                h1 { class: "landing-title", "Campus Hub" }
                p { class: "landing-sub",
                    "Notices, events, lost & found and feedback for your college, in one place."
                }
                div { class: "landing-actions",
                    Link { class: "btn btn-primary", to: Route::Login {}, "Sign in" }
                    Link { class: "btn btn-outline", to: Route::Register {}, "Create account" }
                }
            }

            section { class: "feature-grid",
                div { class: "feature-card",
                    Icon { icon: FaBullhorn, width: 22, height: 22 }
                    h3 { "Notices" }
                    p { "College announcements, exam schedules and urgent alerts." }
                }
                div { class: "feature-card",
                    Icon { icon: FaCalendarDays, width: 22, height: 22 }
                    h3 { "Events" }
                    p { "Cultural fests, workshops and seminars with dates and venues." }
                }
                div { class: "feature-card",
                    Icon { icon: FaBoxOpen, width: 22, height: 22 }
                    h3 { "Lost & Found" }
                    p { "Report lost items and browse what others have found." }
                }
                div { class: "feature-card",
                    Icon { icon: FaComments, width: 22, height: 22 }
                    h3 { "Feedback" }
                    p { "Tell the administration what needs fixing, anonymously if you like." }
                }
            }
        }
    }
}
