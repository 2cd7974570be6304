use api::absorb_conflict;
use api::models::{Feedback, FeedbackCategory, FeedbackStatus, Role};
use dioxus::prelude::*;
use ui::{
    format, show_error, show_success, use_api, use_collection, use_flash, EmptyState, FlashBanner,
    ModalOverlay, PaginationControls, Spinner,
};

use crate::views::DashboardLayout;

/// Feedback inbox. Rows open a detail modal with the full message; pending
/// entries can be marked resolved from there.
#[component]
pub fn AdminFeedback() -> Element {
    let client = use_api();
    let flash = use_flash();
    let mut selected = use_signal(|| None::<Feedback>);

    let entries = use_collection(10, |client, query| async move {
        client.list_feedback(&query).await
    });

    let query = entries.query.read().clone();
    let pagination = entries.pagination.read().clone();
    let status_value = query.status.clone().unwrap_or_else(|| "All".to_string());
    let category_value = query.category.clone().unwrap_or_else(|| "All".to_string());

    rsx! {
        DashboardLayout { require: Role::Admin, active_path: "/admin/feedback",
            div { class: "page-header",
                h1 { class: "page-title", "Feedback" }
                p { class: "page-sub", "What students want you to know." }
            }

            FlashBanner { flash }

            div { class: "filter-bar",
                select {
                    class: "form-select",
                    value: "{status_value}",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        entries.set_status(if value == "All" { None } else { Some(value) });
                    },
                    option { value: "All", "All statuses" }
                    for status in FeedbackStatus::ALL {
                        option { value: "{status.as_str()}", "{status.as_str()}" }
                    }
                }
                select {
                    class: "form-select",
                    value: "{category_value}",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        entries.set_category(if value == "All" { None } else { Some(value) });
                    },
                    option { value: "All", "All categories" }
                    for category in FeedbackCategory::ALL {
                        option { value: "{category.as_str()}", "{category.as_str()}" }
                    }
                }
            }

            if let Some(err) = (entries.error)() {
                div { class: "inline-error", "{err}" }
            }

            if (entries.loading)() && entries.items.read().is_empty() {
                Spinner {}
            } else if entries.items.read().is_empty() {
                EmptyState { message: "No feedback matches your filters" }
            } else {
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Subject" }
                                th { "Category" }
                                th { "From" }
                                th { "Status" }
                                th { "Received" }
                                th { "" }
                            }
                        }
                        tbody {
                            for item in (entries.items)() {
                                tr { key: "{item.id}",
                                    td { class: "cell-title", "{item.subject}" }
                                    td { "{item.category.as_str()}" }
                                    td { "{item.author_label()}" }
                                    td {
                                        span { class: format::feedback_badge_class(item.status),
                                            "{item.status.as_str()}"
                                        }
                                    }
                                    td { "{format::format_date(item.created_at.as_ref())}" }
                                    td { class: "cell-actions",
                                        button {
                                            class: "btn btn-outline btn-small",
                                            onclick: {
                                                let item = item.clone();
                                                move |_| selected.set(Some(item.clone()))
                                            },
                                            "View"
                                        }
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
                on_prev: move |_| entries.prev_page(),
                on_next: move |_| entries.next_page(),
            }

            if let Some(item) = selected() {
                ModalOverlay {
                    on_close: move |_| selected.set(None),
                    div { class: "detail-view",
                        div { class: "detail-badges",
                            span { class: format::feedback_badge_class(item.status),
                                "{item.status.as_str()}"
                            }
                            span { class: format::category_badge_class(item.category.as_str()),
                                "{item.category.as_str()}"
                            }
                        }
                        h2 { class: "modal-title", "{item.subject}" }
                        p { class: "detail-meta",
                            "From {item.author_label()} \u{00b7} {format::format_date(item.created_at.as_ref())}"
                        }
                        p { class: "detail-message", "{item.message}" }
                        div { class: "form-actions",
                            if item.status == FeedbackStatus::Pending {
                                button {
                                    class: "btn btn-primary",
                                    onclick: {
                                        let client = client.clone();
                                        let item = item.clone();
                                        move |_| {
                                            let client = client.clone();
                                            let item = item.clone();
                                            spawn(async move {
                                                match absorb_conflict(client.resolve_feedback(&item.id).await) {
                                                    Ok(_) => {
                                                        show_success(flash, "Marked resolved");
                                                        selected.set(Some(Feedback {
                                                            status: FeedbackStatus::Resolved,
                                                            ..item
                                                        }));
                                                        entries.refresh();
                                                    }
                                                    Err(err) => show_error(flash, err.to_string()),
                                                }
                                            });
                                        }
                                    },
                                    "Mark resolved"
                                }
                            }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| selected.set(None),
                                "Close"
                            }
                        }
                    }
                }
            }
        }
    }
}
