use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaGraduationCap;
use dioxus_free_icons::Icon;

use crate::auth::{use_auth, LogoutButton};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar with the brand on the left and the signed-in user on the right.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        header { class: "navbar",
            div { class: "navbar-brand",
                Icon { icon: FaGraduationCap, width: 20, height: 20 }
                span { "Campus Hub" }
            }
            div { class: "navbar-user",
                if let Some(user) = state.user {
                    span { class: "navbar-avatar", "{user.initials()}" }
                    div { class: "navbar-user-meta",
                        span { class: "navbar-user-name", "{user.name}" }
                        span { class: "navbar-user-role", "{user.role.as_str()}" }
                    }
                    LogoutButton { class: "navbar-logout" }
                }
            }
        }
    }
}
