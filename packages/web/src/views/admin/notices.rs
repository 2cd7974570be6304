use api::models::{Notice, NoticeCategory, NoticePayload, Role};
use dioxus::prelude::*;
use ui::{
    confirm, format, show_error, show_success, use_api, use_collection, use_flash, EmptyState,
    FlashBanner, ModalOverlay, PaginationControls, Spinner,
};

use crate::views::DashboardLayout;

/// Notice management. The table shows every notice, active or not; the
/// student board only ever sees the active ones.
#[component]
pub fn AdminNotices() -> Element {
    let client = use_api();
    let flash = use_flash();
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<Notice>);

    let notices = use_collection(10, |client, query| async move {
        client.list_notices(&query).await
    });

    let query = notices.query.read().clone();
    let pagination = notices.pagination.read().clone();
    let category_value = query.category.clone().unwrap_or_else(|| "All".to_string());

    let handle_saved = move |_| {
        let was_edit = editing.peek().is_some();
        show_form.set(false);
        editing.set(None);
        if was_edit {
            notices.refresh();
        } else {
            notices.first_page();
        }
        show_success(flash, if was_edit { "Notice updated" } else { "Notice published" });
    };

    rsx! {
        DashboardLayout { require: Role::Admin, active_path: "/admin/notices",
            div { class: "page-header",
                h1 { class: "page-title", "Notices" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "New notice"
                }
            }

            FlashBanner { flash }

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
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Category" }
                                th { "Status" }
                                th { "Expires" }
                                th { "Created" }
                                th { "" }
                            }
                        }
                        tbody {
                            for notice in (notices.items)() {
                                tr { key: "{notice.id}",
                                    td { class: "cell-title", "{notice.title}" }
                                    td {
                                        span { class: format::category_badge_class(notice.category.as_str()),
                                            "{notice.category.as_str()}"
                                        }
                                    }
                                    td {
                                        if notice.is_active {
                                            span { class: "badge badge-green", "active" }
                                        } else {
                                            span { class: "badge badge-gray", "inactive" }
                                        }
                                    }
                                    td { "{format::format_date(notice.expiry_date.as_ref())}" }
                                    td { "{format::format_date(notice.created_at.as_ref())}" }
                                    td { class: "cell-actions",
                                        button {
                                            class: "btn btn-outline btn-small",
                                            onclick: {
                                                let notice = notice.clone();
                                                move |_| {
                                                    editing.set(Some(notice.clone()));
                                                    show_form.set(true);
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-danger btn-small",
                                            onclick: {
                                                let client = client.clone();
                                                let id = notice.id.clone();
                                                move |_| {
                                                    if !confirm("Delete this notice?") {
                                                        return;
                                                    }
                                                    let client = client.clone();
                                                    let id = id.clone();
                                                    spawn(async move {
                                                        match client.delete_notice(&id).await {
                                                            Ok(()) => {
                                                                show_success(flash, "Notice deleted");
                                                                notices.refresh();
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
                on_prev: move |_| notices.prev_page(),
                on_next: move |_| notices.next_page(),
            }

            if show_form() {
                ModalOverlay {
                    on_close: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                    NoticeForm {
                        initial: editing(),
                        on_saved: handle_saved,
                        on_cancel: move |_| {
                            show_form.set(false);
                            editing.set(None);
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeForm(
    initial: Option<Notice>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let client = use_api();

    let edit_id = initial.as_ref().map(|notice| notice.id.clone());
    let heading = if edit_id.is_some() { "Edit notice" } else { "New notice" };
    let seed_title = initial.as_ref().map(|notice| notice.title.clone()).unwrap_or_default();
    let seed_description = initial
        .as_ref()
        .map(|notice| notice.description.clone())
        .unwrap_or_default();
    let seed_category = initial.as_ref().map(|notice| notice.category).unwrap_or_default();
    let seed_active = initial.as_ref().map(|notice| notice.is_active).unwrap_or(true);
    let seed_expiry = initial
        .as_ref()
        .and_then(|notice| notice.expiry_date)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let mut title = use_signal(move || seed_title);
    let mut description = use_signal(move || seed_description);
    let mut category = use_signal(move || seed_category.as_str().to_string());
    let mut is_active = use_signal(move || seed_active);
    let mut expiry_date = use_signal(move || seed_expiry);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let submit_id = edit_id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let edit_id = submit_id.clone();
        spawn(async move {
            let title_value = title().trim().to_string();
            let description_value = description().trim().to_string();
            if title_value.is_empty() || description_value.is_empty() {
                error.set(Some("Title and description are required".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let expiry_value = expiry_date();
            let payload = NoticePayload {
                title: title_value,
                description: description_value,
                category: NoticeCategory::parse(&category()),
                is_active: is_active(),
                expiry_date: (!expiry_value.is_empty()).then_some(expiry_value),
            };
            let result = match &edit_id {
                Some(id) => client.update_notice(id, &payload).await,
                None => client.create_notice(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => on_saved.call(()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        form { class: "modal-form", onsubmit: handle_submit,
            h2 { class: "modal-title", "{heading}" }

            if let Some(err) = error() {
                div { class: "inline-error", "{err}" }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "notice-title", "Title" }
                input {
                    id: "notice-title",
                    class: "form-input",
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "notice-description", "Description" }
                textarea {
                    id: "notice-description",
                    class: "form-textarea",
                    rows: 4,
                    value: "{description}",
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            div { class: "form-row",
                div { class: "form-field",
                    label { class: "form-label", r#for: "notice-category", "Category" }
                    select {
                        id: "notice-category",
                        class: "form-select",
                        value: "{category}",
                        onchange: move |evt: FormEvent| category.set(evt.value()),
                        for entry in NoticeCategory::ALL {
                            option { value: "{entry.as_str()}", "{entry.as_str()}" }
                        }
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", r#for: "notice-expiry", "Expiry date" }
                    input {
                        id: "notice-expiry",
                        class: "form-input",
                        r#type: "date",
                        value: "{expiry_date}",
                        oninput: move |evt: FormEvent| expiry_date.set(evt.value()),
                    }
                }
            }

            label { class: "form-check",
                input {
                    r#type: "checkbox",
                    checked: is_active(),
                    onchange: move |evt: FormEvent| is_active.set(evt.checked()),
                }
                "Visible to students"
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else if edit_id.is_some() { "Save changes" } else { "Publish" }
                }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
