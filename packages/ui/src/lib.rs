//! This crate contains all shared UI for the workspace: the auth context,
//! the route guard decision, the paginated collection hook, and the chrome
//! (navbar, sidebar, banners, modals) the dashboard pages are built from.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_api, use_auth, use_session, AuthProvider, AuthState, LogoutButton};

pub mod guard;
pub use guard::{decide_access, GuardDecision};

mod collection;
pub use collection::{use_collection, Collection};

pub mod flash;
pub use flash::{show_error, show_success, use_flash, FlashBanner, FlashLevel, FlashMessage};

pub mod format;

mod components;
pub use components::{confirm, EmptyState, ModalOverlay, PaginationControls, Spinner};

mod navbar;
pub use navbar::Navbar;

mod sidebar;
pub use sidebar::{Sidebar, ADMIN_NAV, STUDENT_NAV};
