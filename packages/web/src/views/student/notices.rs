use api::models::{Notice, NoticeCategory, Role};
use chrono::Utc;
use dioxus::prelude::*;
use ui::{format, use_collection, EmptyState, ModalOverlay, PaginationControls, Spinner};

use crate::views::DashboardLayout;

/// Browsable notice board with category filter and search. Cards open a
/// detail modal with the full text.
#[component]
pub fn StudentNotices() -> Element {
    let notices = use_collection(12, |client, query| async move {
        client.list_notices(&query).await
    });
    let mut selected = use_signal(|| None::<Notice>);

    let query = notices.query.read().clone();
    let pagination = notices.pagination.read().clone();
    let category_value = query.category.clone().unwrap_or_else(|| "All".to_string());
    let now = Utc::now();

    rsx! {
        DashboardLayout { require: Role::Student, active_path: "/student/notices",
            div { class: "page-header",
                h1 { class: "page-title", "Notices" }
            }

            div { class: "filter-bar",
                input {
                    class: "form-input search-input",
                    r#type: "search",
                    placeholder: "Search notices...",
                    value: "{query.search}",
                    oninput: move |evt: FormEvent| notices.set_search(evt.value()),
                }
                select {
                    class: "form-select",
                    value: "{category_value}",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        notices.set_category(if value == "All" { None } else { Some(value) });
                    },
                    option { value: "All", "All categories" }
                    for category in NoticeCategory::ALL {
                        option { value: "{category.as_str()}", "{category.as_str()}" }
                    }
                }
            }

            if let Some(err) = (notices.error)() {
                div { class: "inline-error", "{err}" }
            }

            if (notices.loading)() && notices.items.read().is_empty() {
                Spinner {}
            } else if notices.items.read().is_empty() {
                EmptyState { message: "No notices match your filters" }
            } else {
                div { class: "card-grid",
                    for notice in (notices.items)() {
                        article {
                            key: "{notice.id}",
                            class: if notice.category == NoticeCategory::Urgent { "card card-click card-urgent" } else { "card card-click" },
                            onclick: {
                                let notice = notice.clone();
                                move |_| selected.set(Some(notice.clone()))
                            },
                            div { class: "card-top",
                                span { class: format::category_badge_class(notice.category.as_str()),
                                    "{notice.category.as_str()}"
                                }
                                if let Some(at) = &notice.created_at {
                                    span { class: "card-date", "{format::time_ago(at, now)}" }
                                }
                            }
                            h3 { class: "card-title", "{notice.title}" }
                            p { class: "card-body", "{notice.description}" }
                        }
                    }
                }
            }

            PaginationControls {
                current: pagination.current,
                total: pagination.total,
                on_prev: move |_| notices.prev_page(),
                on_next: move |_| notices.next_page(),
            }

            if let Some(notice) = selected() {
                ModalOverlay { on_close: move |_| selected.set(None),
                    div { class: "detail-view",
                        div { class: "detail-badges",
                            span { class: format::category_badge_class(notice.category.as_str()),
                                "{notice.category.as_str()}"
                            }
                            span { class: "card-date",
                                "{format::format_date(notice.created_at.as_ref())}"
                            }
                        }
                        h2 { class: "modal-title", "{notice.title}" }
                        p { class: "detail-meta", "Posted by {notice.author_name()}" }
                        p { class: "detail-message", "{notice.description}" }
                    }
                }
            }
        }
    }
}
