use api::absorb_conflict;
use api::models::{ItemKind, LostFoundCategory, LostFoundStatus, Role};
use dioxus::prelude::*;
use ui::{
    confirm, format, show_error, show_success, use_api, use_collection, use_flash, EmptyState,
    FlashBanner, PaginationControls, Spinner,
};

use crate::views::DashboardLayout;

/// Moderation queue for lost and found. Admins see every post in every
/// status; approve and reject act on pending ones, claiming stays with the
/// owner.
#[component]
pub fn AdminLostFound() -> Element {
    let client = use_api();
    let flash = use_flash();

    let posts = use_collection(10, |client, query| async move {
        client.moderate_lostfound(&query).await
    });

    let query = posts.query.read().clone();
    let pagination = posts.pagination.read().clone();
    let status_value = query.status.clone().unwrap_or_else(|| "All".to_string());
    let kind_value = query.kind.clone().unwrap_or_else(|| "All".to_string());
    let category_value = query.category.clone().unwrap_or_else(|| "All".to_string());

    rsx! {
        DashboardLayout { require: Role::Admin, active_path: "/admin/lostfound",
            div { class: "page-header",
                h1 { class: "page-title", "Lost & Found" }
                p { class: "page-sub", "Approve reports before they reach the board." }
            }

            FlashBanner { flash }

            div { class: "filter-bar",
                input {
                    class: "form-input search-input",
                    r#type: "search",
                    placeholder: "Search items...",
                    value: "{query.search}",
                    oninput: move |evt: FormEvent| posts.set_search(evt.value()),
                }
                select {
                    class: "form-select",
                    value: "{status_value}",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        posts.set_status(if value == "All" { None } else { Some(value) });
                    },
                    option { value: "All", "All statuses" }
                    for status in LostFoundStatus::ALL {
                        option { value: "{status.as_str()}", "{status.as_str()}" }
                    }
                }
                select {
                    class: "form-select",
                    value: "{kind_value}",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        posts.set_kind(if value == "All" { None } else { Some(value) });
                    },
                    option { value: "All", "Lost and found" }
                    for kind in ItemKind::ALL {
                        option { value: "{kind.as_str()}", "{kind.label()}" }
                    }
                }
                select {
                    class: "form-select",
                    value: "{category_value}",
                    onchange: move |evt: FormEvent| {
                        let value = evt.value();
                        posts.set_category(if value == "All" { None } else { Some(value) });
                    },
                    option { value: "All", "All categories" }
                    for category in LostFoundCategory::ALL {
                        option { value: "{category.as_str()}", "{category.as_str()}" }
                    }
                }
            }

            if let Some(err) = (posts.error)() {
                div { class: "inline-error", "{err}" }
            }

            if (posts.loading)() && posts.items.read().is_empty() {
                Spinner {}
            } else if posts.items.read().is_empty() {
                EmptyState { message: "No posts match your filters" }
            } else {
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Item" }
                                th { "Type" }
                                th { "Category" }
                                th { "Status" }
                                th { "Posted by" }
                                th { "Reported" }
                                th { "" }
                            }
                        }
                        tbody {
                            for post in (posts.items)() {
                                tr { key: "{post.id}",
                                    td { class: "cell-title",
                                        "{post.item_name}"
                                        span { class: "cell-sub", "{post.description}" }
                                    }
                                    td {
                                        span {
                                            class: if post.kind == ItemKind::Lost { "badge badge-red" } else { "badge badge-green" },
                                            "{post.kind.label()}"
                                        }
                                    }
                                    td { "{post.category.as_str()}" }
                                    td {
                                        span { class: format::lostfound_badge_class(post.status),
                                            "{post.status.as_str()}"
                                        }
                                    }
                                    td {
                                        if let Some(by) = &post.posted_by {
                                            "{by.name}"
                                        } else {
                                            "Unknown"
                                        }
                                    }
                                    td { "{format::format_date(post.created_at.as_ref())}" }
                                    td { class: "cell-actions",
                                        if post.status == LostFoundStatus::Pending {
                                            button {
                                                class: "btn btn-primary btn-small",
                                                onclick: {
                                                    let client = client.clone();
                                                    let id = post.id.clone();
                                                    move |_| {
                                                        let client = client.clone();
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            match absorb_conflict(client.approve_lostfound(&id).await) {
                                                                Ok(_) => {
                                                                    show_success(flash, "Post approved");
                                                                    posts.refresh();
                                                                }
                                                                Err(err) => show_error(flash, err.to_string()),
                                                            }
                                                        });
                                                    }
                                                },
                                                "Approve"
                                            }
                                            button {
                                                class: "btn btn-outline btn-small",
                                                onclick: {
                                                    let client = client.clone();
                                                    let id = post.id.clone();
                                                    move |_| {
                                                        if !confirm("Reject this post?") {
                                                            return;
                                                        }
                                                        let client = client.clone();
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            match absorb_conflict(client.reject_lostfound(&id).await) {
                                                                Ok(_) => {
                                                                    show_success(flash, "Post rejected");
                                                                    posts.refresh();
                                                                }
                                                                Err(err) => show_error(flash, err.to_string()),
                                                            }
                                                        });
                                                    }
                                                },
                                                "Reject"
                                            }
                                        }
                                        button {
                                            class: "btn btn-danger btn-small",
                                            onclick: {
                                                let client = client.clone();
                                                let id = post.id.clone();
                                                move |_| {
                                                    if !confirm("Delete this post?") {
                                                        return;
                                                    }
                                                    let client = client.clone();
                                                    let id = id.clone();
                                                    spawn(async move {
                                                        match client.delete_lostfound(&id).await {
                                                            Ok(()) => {
                                                                show_success(flash, "Post deleted");
                                                                posts.refresh();
                                                            }
                                                            Err(err) => show_error(flash, err.to_string()),
                                                        }
                                                    });
                                                }
                                            },
                                            "Delete"
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
                on_prev: move |_| posts.prev_page(),
                on_next: move |_| posts.next_page(),
            }
        }
    }
}
