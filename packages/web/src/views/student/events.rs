use api::models::{Event, EventCategory, Role};
use chrono::Utc;
use dioxus::prelude::*;
use ui::icons::{FaCalendar, FaClock, FaLocationDot, FaUser};
use ui::{format, use_collection, EmptyState, Icon, ModalOverlay, PaginationControls, Spinner};

use crate::views::DashboardLayout;

/// Campus events listing with category filter and search. Past events are
/// greyed out; clicking a card opens the full detail modal.
#[component]
pub fn StudentEvents() -> Element {
    let events = use_collection(12, |client, query| async move {
        client.list_events(&query).await
    });
    let mut selected = use_signal(|| None::<Event>);

    let query = events.query.read().clone();
    let pagination = events.pagination.read().clone();
    let category_value = query.category.clone().unwrap_or_else(|| "All".to_string());
    let now = Utc::now();

    rsx! {
        DashboardLayout { require: Role::Student, active_path: "/student/events",
            div { class: "page-header",
                h1 { class: "page-title", "Events" }
            }

            div { class: "filter-bar",
                input {
                    class: "form-input search-input",
                    r#type: "search",
                    placeholder: "Search events...",
                    value: "{query.search}",
                    oninput: move |evt: FormEvent| events.set_search(evt.value()),
                }
                select {
                    class: "form-select",
                    value: "{category_value}",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        events.set_category(if value == "All" { None } else { Some(value) });
                    },
                    option { value: "All", "All categories" }
                    for category in EventCategory::ALL {
                        option { value: "{category.as_str()}", "{category.as_str()}" }
                    }
                }
            }

            if let Some(err) = (events.error)() {
                div { class: "inline-error", "{err}" }
            }

            if (events.loading)() && events.items.read().is_empty() {
                Spinner {}
            } else if events.items.read().is_empty() {
                EmptyState { message: "No events match your filters" }
            } else {
                div { class: "card-grid",
                    for event in (events.items)() {
                        article {
                            key: "{event.id}",
                            class: if event.is_upcoming(now) { "card card-click" } else { "card card-click card-past" },
                            onclick: {
                                let event = event.clone();
                                move |_| selected.set(Some(event.clone()))
                            },
                            div { class: "card-top",
                                span { class: format::category_badge_class(event.category.as_str()),
                                    "{event.category.as_str()}"
                                }
                                if event.is_upcoming(now) {
                                    span { class: "badge badge-green", "Upcoming" }
                                } else {
                                    span { class: "badge badge-gray", "Past" }
                                }
                            }
                            h3 { class: "card-title", "{event.title}" }
                            div { class: "card-details",
                                span { class: "card-detail",
                                    Icon { icon: FaCalendar, width: 12, height: 12 }
                                    "{format::format_date(event.date.as_ref())}"
                                }
                                if !event.time.is_empty() {
                                    span { class: "card-detail",
                                        Icon { icon: FaClock, width: 12, height: 12 }
                                        "{event.time}"
                                    }
                                }
                                if !event.venue.is_empty() {
                                    span { class: "card-detail",
                                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                                        "{event.venue}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            PaginationControls {
                current: pagination.current,
                total: pagination.total,
                on_prev: move |_| events.prev_page(),
                on_next: move |_| events.next_page(),
            }

            if let Some(event) = selected() {
                ModalOverlay { on_close: move |_| selected.set(None),
                    div { class: "detail-view",
                        div { class: "detail-badges",
                            span { class: format::category_badge_class(event.category.as_str()),
                                "{event.category.as_str()}"
                            }
                            if event.is_upcoming(now) {
                                span { class: "badge badge-green", "Upcoming" }
                            } else {
                                span { class: "badge badge-gray", "Past event" }
                            }
                        }
                        h2 { class: "modal-title", "{event.title}" }
                        div { class: "detail-rows",
                            div { class: "detail-row",
                                Icon { icon: FaCalendar, width: 16, height: 16 }
                                div {
                                    span { class: "detail-label", "Date" }
                                    span { "{format::format_date(event.date.as_ref())}" }
                                }
                            }
                            div { class: "detail-row",
                                Icon { icon: FaClock, width: 16, height: 16 }
                                div {
                                    span { class: "detail-label", "Time" }
                                    span { "{event.time}" }
                                }
                            }
                            div { class: "detail-row",
                                Icon { icon: FaLocationDot, width: 16, height: 16 }
                                div {
                                    span { class: "detail-label", "Venue" }
                                    span { "{event.venue}" }
                                }
                            }
                            if !event.organizer.is_empty() {
                                div { class: "detail-row",
                                    Icon { icon: FaUser, width: 16, height: 16 }
                                    div {
                                        span { class: "detail-label", "Organizer" }
                                        span { "{event.organizer}" }
                                    }
                                }
                            }
                        }
                        span { class: "detail-label", "Description" }
                        p { class: "detail-message", "{event.description}" }
                    }
                }
            }
        }
    }
}
