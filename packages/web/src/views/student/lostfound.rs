use api::absorb_conflict;
use api::models::{ItemKind, LostFoundCategory, LostFoundPayload, LostFoundPost, Role};
use dioxus::prelude::*;
use ui::icons::FaLocationDot;
use ui::{
    confirm, format, show_error, show_success, use_api, use_collection, use_flash, EmptyState,
    FlashBanner, Icon, ModalOverlay, PaginationControls, Spinner,
};

use crate::views::DashboardLayout;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Browse,
    Mine,
}

fn kind_badge_class(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Lost => "badge badge-red",
        ItemKind::Found => "badge badge-green",
    }
}

/// Lost and found board. Browse shows approved posts from everyone; My posts
/// shows the viewer's own reports in every status, with edit, claim and
/// delete where the status allows them.
#[component]
pub fn StudentLostFound() -> Element {
    let client = use_api();
    let flash = use_flash();
    let mut active_tab = use_signal(|| Tab::Browse);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<LostFoundPost>);

    let browse = use_collection(12, |client, query| async move {
        client.browse_lostfound(&query).await
    });

    let mine_client = client.clone();
    let mut mine = use_resource(move || {
        let client = mine_client.clone();
        async move { client.my_lostfound_posts().await.unwrap_or_default() }
    });

    let query = browse.query.read().clone();
    let pagination = browse.pagination.read().clone();
    let kind_value = query.kind.clone().unwrap_or_else(|| "All".to_string());
    let category_value = query.category.clone().unwrap_or_else(|| "All".to_string());

    let handle_saved = move |_| {
        let was_edit = editing.peek().is_some();
        show_form.set(false);
        editing.set(None);
        mine.restart();
        if was_edit {
            browse.refresh();
            show_success(flash, "Post updated");
        } else {
            browse.first_page();
            active_tab.set(Tab::Mine);
            show_success(flash, "Report submitted; it will be visible once an admin approves it");
        }
    };

    rsx! {
        DashboardLayout { require: Role::Student, active_path: "/student/lostfound",
            div { class: "page-header",
                h1 { class: "page-title", "Lost & Found" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "Report item"
                }
            }

            FlashBanner { flash }

            div { class: "tab-bar",
                button {
                    class: if active_tab() == Tab::Browse { "tab tab-active" } else { "tab" },
                    onclick: move |_| active_tab.set(Tab::Browse),
                    "Browse"
                }
                button {
                    class: if active_tab() == Tab::Mine { "tab tab-active" } else { "tab" },
                    onclick: move |_| active_tab.set(Tab::Mine),
                    "My posts"
                }
            }

            if active_tab() == Tab::Browse {
                div { class: "filter-bar",
                    input {
                        class: "form-input search-input",
                        r#type: "search",
                        placeholder: "Search items...",
                        value: "{query.search}",
                        oninput: move |evt: FormEvent| browse.set_search(evt.value()),
                    }
                    select {
                        class: "form-select",
                        value: "{kind_value}",
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            browse.set_kind(if value == "All" { None } else { Some(value) });
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
                            browse.set_category(if value == "All" { None } else { Some(value) });
                        },
                        option { value: "All", "All categories" }
                        for category in LostFoundCategory::ALL {
                            option { value: "{category.as_str()}", "{category.as_str()}" }
                        }
                    }
                }

                if let Some(err) = (browse.error)() {
                    div { class: "inline-error", "{err}" }
                }

                if (browse.loading)() && browse.items.read().is_empty() {
                    Spinner {}
                } else if browse.items.read().is_empty() {
                    EmptyState { message: "Nothing here yet; reports show up once approved" }
                } else {
                    div { class: "card-grid",
                        for post in (browse.items)() {
                            article { key: "{post.id}", class: "card",
                                div { class: "card-top",
                                    span { class: kind_badge_class(post.kind), "{post.kind.label()}" }
                                    span { class: format::category_badge_class(post.category.as_str()),
                                        "{post.category.as_str()}"
                                    }
                                    span { class: "card-date",
                                        "{format::format_date(post.date.as_ref())}"
                                    }
                                }
                                h3 { class: "card-title", "{post.item_name}" }
                                p { class: "card-body", "{post.description}" }
                                div { class: "card-details",
                                    if let Some(location) = &post.location {
                                        span { class: "card-detail",
                                            Icon { icon: FaLocationDot, width: 14, height: 14 }
                                            "{location}"
                                        }
                                    }
                                    span { class: "card-detail", "Contact: {post.contact_info}" }
                                }
                                if let Some(by) = &post.posted_by {
                                    span { class: "card-meta", "Posted by {by.name}" }
                                }
                            }
                        }
                    }
                }

                PaginationControls {
                    current: pagination.current,
                    total: pagination.total,
                    on_prev: move |_| browse.prev_page(),
                    on_next: move |_| browse.next_page(),
                }
            } else {
                match &*mine.read() {
                    None => rsx! { Spinner {} },
                    Some(posts) if posts.is_empty() => rsx! {
                        EmptyState { message: "You have not reported anything yet" }
                    },
                    Some(posts) => rsx! {
                        div { class: "card-grid",
                            for post in posts.iter().cloned() {
                                article { key: "{post.id}", class: "card",
                                    div { class: "card-top",
                                        span { class: kind_badge_class(post.kind), "{post.kind.label()}" }
                                        span { class: format::lostfound_badge_class(post.status),
                                            "{post.status.as_str()}"
                                        }
                                        span { class: "card-date",
                                            "{format::format_date(post.created_at.as_ref())}"
                                        }
                                    }
                                    h3 { class: "card-title", "{post.item_name}" }
                                    p { class: "card-body", "{post.description}" }
                                    div { class: "card-actions",
                                        if post.can_mark_claimed() {
                                            button {
                                                class: "btn btn-outline btn-small",
                                                onclick: {
                                                    let client = client.clone();
                                                    let id = post.id.clone();
                                                    move |_| {
                                                        if !confirm("Mark this item as claimed?") {
                                                            return;
                                                        }
                                                        let client = client.clone();
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            match absorb_conflict(client.claim_lostfound(&id).await) {
                                                                Ok(_) => {
                                                                    show_success(flash, "Marked as claimed");
                                                                    mine.restart();
                                                                    browse.refresh();
                                                                }
                                                                Err(err) => show_error(flash, err.to_string()),
                                                            }
                                                        });
                                                    }
                                                },
                                                "Mark claimed"
                                            }
                                        }
                                        if post.can_edit() {
                                            button {
                                                class: "btn btn-outline btn-small",
                                                onclick: {
                                                    let post = post.clone();
                                                    move |_| {
                                                        editing.set(Some(post.clone()));
                                                        show_form.set(true);
                                                    }
                                                },
                                                "Edit"
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
                                                                mine.restart();
                                                                browse.refresh();
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
                    },
                }
            }

            if show_form() {
                ModalOverlay {
                    on_close: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                    PostForm {
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

/// Report/edit form shown in the modal. Mounted fresh each time it opens, so
/// the field signals seed straight from `initial`.
#[component]
fn PostForm(
    initial: Option<LostFoundPost>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let client = use_api();

    let edit_id = initial.as_ref().map(|post| post.id.clone());
    let heading = if edit_id.is_some() { "Edit post" } else { "Report an item" };
    let seed_kind = initial.as_ref().map(|post| post.kind).unwrap_or(ItemKind::Lost);
    let seed_category = initial.as_ref().map(|post| post.category).unwrap_or_default();
    let seed_name = initial.as_ref().map(|post| post.item_name.clone()).unwrap_or_default();
    let seed_description = initial
        .as_ref()
        .map(|post| post.description.clone())
        .unwrap_or_default();
    let seed_location = initial
        .as_ref()
        .and_then(|post| post.location.clone())
        .unwrap_or_default();
    let seed_date = initial
        .as_ref()
        .and_then(|post| post.date)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let seed_contact = initial
        .as_ref()
        .map(|post| post.contact_info.clone())
        .unwrap_or_default();

    let mut kind = use_signal(move || seed_kind.as_str().to_string());
    let mut category = use_signal(move || seed_category.as_str().to_string());
    let mut item_name = use_signal(move || seed_name);
    let mut description = use_signal(move || seed_description);
    let mut location = use_signal(move || seed_location);
    let mut date = use_signal(move || seed_date);
    let mut contact_info = use_signal(move || seed_contact);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let submit_id = edit_id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let edit_id = submit_id.clone();
        spawn(async move {
            let name = item_name().trim().to_string();
            let body = description().trim().to_string();
            let contact = contact_info().trim().to_string();
            if name.is_empty() || body.is_empty() || contact.is_empty() {
                error.set(Some(
                    "Item name, description and contact info are required".to_string(),
                ));
                return;
            }
            error.set(None);
            saving.set(true);

            let location_value = location().trim().to_string();
            let date_value = date();
            let payload = LostFoundPayload {
                kind: ItemKind::parse(&kind()),
                item_name: name,
                description: body,
                category: LostFoundCategory::parse(&category()),
                location: (!location_value.is_empty()).then_some(location_value),
                date: (!date_value.is_empty()).then_some(date_value),
                contact_info: contact,
            };
            let result = match &edit_id {
                Some(id) => client.update_lostfound(id, &payload).await,
                None => client.create_lostfound(&payload).await,
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

            div { class: "form-row",
                div { class: "form-field",
                    label { class: "form-label", r#for: "lf-kind", "I have..." }
                    select {
                        id: "lf-kind",
                        class: "form-select",
                        value: "{kind}",
                        onchange: move |evt: FormEvent| kind.set(evt.value()),
                        option { value: "lost", "Lost something" }
                        option { value: "found", "Found something" }
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", r#for: "lf-category", "Category" }
                    select {
                        id: "lf-category",
                        class: "form-select",
                        value: "{category}",
                        onchange: move |evt: FormEvent| category.set(evt.value()),
                        for entry in LostFoundCategory::ALL {
                            option { value: "{entry.as_str()}", "{entry.as_str()}" }
                        }
                    }
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "lf-name", "Item name" }
                input {
                    id: "lf-name",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Black umbrella",
                    value: "{item_name}",
                    oninput: move |evt: FormEvent| item_name.set(evt.value()),
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "lf-description", "Description" }
                textarea {
                    id: "lf-description",
                    class: "form-textarea",
                    rows: 3,
                    placeholder: "Where and when, any identifying marks",
                    value: "{description}",
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            div { class: "form-row",
                div { class: "form-field",
                    label { class: "form-label", r#for: "lf-location", "Location" }
                    input {
                        id: "lf-location",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Library, second floor",
                        value: "{location}",
                        oninput: move |evt: FormEvent| location.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", r#for: "lf-date", "Date" }
                    input {
                        id: "lf-date",
                        class: "form-input",
                        r#type: "date",
                        value: "{date}",
                        oninput: move |evt: FormEvent| date.set(evt.value()),
                    }
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "lf-contact", "Contact info" }
                input {
                    id: "lf-contact",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Email or phone",
                    value: "{contact_info}",
                    oninput: move |evt: FormEvent| contact_info.set(evt.value()),
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else if edit_id.is_some() { "Save changes" } else { "Submit report" }
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
