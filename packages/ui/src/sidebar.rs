use api::models::Role;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBoxOpen, FaBullhorn, FaCalendarDays, FaComments, FaGauge, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::auth::use_auth;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavIcon {
    Dashboard,
    Notices,
    Events,
    LostFound,
    Feedback,
    Admins,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    icon: NavIcon,
}

pub const STUDENT_NAV: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: "/student/dashboard",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        label: "Notices",
        path: "/student/notices",
        icon: NavIcon::Notices,
    },
    NavItem {
        label: "Events",
        path: "/student/events",
        icon: NavIcon::Events,
    },
    NavItem {
        label: "Lost & Found",
        path: "/student/lostfound",
        icon: NavIcon::LostFound,
    },
    NavItem {
        label: "Feedback",
        path: "/student/feedback",
        icon: NavIcon::Feedback,
    },
];

pub const ADMIN_NAV: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: "/admin/dashboard",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        label: "Notices",
        path: "/admin/notices",
        icon: NavIcon::Notices,
    },
    NavItem {
        label: "Events",
        path: "/admin/events",
        icon: NavIcon::Events,
    },
    NavItem {
        label: "Lost & Found",
        path: "/admin/lostfound",
        icon: NavIcon::LostFound,
    },
    NavItem {
        label: "Feedback",
        path: "/admin/feedback",
        icon: NavIcon::Feedback,
    },
    NavItem {
        label: "Admins",
        path: "/admin/admins",
        icon: NavIcon::Admins,
    },
];

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
        NavIcon::Notices => rsx! { Icon { icon: FaBullhorn, width: 16, height: 16 } },
        NavIcon::Events => rsx! { Icon { icon: FaCalendarDays, width: 16, height: 16 } },
        NavIcon::LostFound => rsx! { Icon { icon: FaBoxOpen, width: 16, height: 16 } },
        NavIcon::Feedback => rsx! { Icon { icon: FaComments, width: 16, height: 16 } },
        NavIcon::Admins => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
    }
}

/// Role-driven navigation rail. Navigation itself is delegated to the caller
/// so this crate stays independent of the route table.
#[component]
pub fn Sidebar(active_path: String, on_navigate: EventHandler<String>) -> Element {
    let auth = use_auth();
    let state = auth();

    let items = match state.user.as_ref().map(|user| user.role) {
        Some(Role::Admin) => ADMIN_NAV,
        _ => STUDENT_NAV,
    };

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }
        nav { class: "sidebar",
            for item in items {
                button {
                    key: "{item.path}",
                    class: if active_path == item.path { "sidebar-item active" } else { "sidebar-item" },
                    onclick: move |_| on_navigate.call(item.path.to_string()),
                    {nav_icon(item.icon)}
                    span { "{item.label}" }
                }
            }
        }
    }
}
