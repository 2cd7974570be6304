//! Small shared building blocks for the dashboard pages.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight};
use dioxus_free_icons::Icon;

const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

/// Dimmed backdrop with a centered card. A click on the backdrop,
/// not the card, fires `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
        div { class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
        div { class: "empty-state",
            p { "{message}" }
        }
    }
}

/// Prev/next pager. Hidden entirely when everything fits on one page.
#[component]
pub fn PaginationControls(
    current: u32,
    total: u32,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    if total <= 1 {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: COMPONENTS_CSS }
        div { class: "pagination",
            button {
                class: "pagination-btn",
                disabled: current <= 1,
                onclick: move |_| on_prev.call(()),
                Icon { icon: FaChevronLeft, width: 12, height: 12 }
            }
            span { class: "pagination-label", "Page {current} of {total}" }
            button {
                class: "pagination-btn",
                disabled: current >= total,
                onclick: move |_| on_next.call(()),
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
        }
    }
}

/// Native browser confirm dialog. Always true outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
