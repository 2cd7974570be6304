use api::models::{Event, EventCategory, EventPayload, Role};
use dioxus::prelude::*;
use ui::{
    confirm, format, show_error, show_success, use_api, use_collection, use_flash, EmptyState,
    FlashBanner, ModalOverlay, PaginationControls, Spinner,
};

use crate::views::DashboardLayout;

/// Event management: full table with create, edit and delete.
#[component]
pub fn AdminEvents() -> Element {
    let client = use_api();
    let flash = use_flash();
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<Event>);

    let events = use_collection(10, |client, query| async move {
        client.list_events(&query).await
    });

    let query = events.query.read().clone();
    let pagination = events.pagination.read().clone();
    let category_value = query.category.clone().unwrap_or_else(|| "All".to_string());

    let handle_saved = move |_| {
        let was_edit = editing.peek().is_some();
        show_form.set(false);
        editing.set(None);
        if was_edit {
            events.refresh();
        } else {
            events.first_page();
        }
        show_success(flash, if was_edit { "Event updated" } else { "Event created" });
    };

    rsx! {
        DashboardLayout { require: Role::Admin, active_path: "/admin/events",
            div { class: "page-header",
                h1 { class: "page-title", "Events" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        show_form.set(true);
                    },
                    "New event"
                }
            }

            FlashBanner { flash }

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
                div { class: "table-wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Category" }
                                th { "Date" }
                                th { "Time" }
                                th { "Venue" }
                                th { "Organizer" }
                                th { "" }
                            }
                        }
                        tbody {
                            for event in (events.items)() {
                                tr { key: "{event.id}",
                                    td { class: "cell-title", "{event.title}" }
                                    td {
                                        span { class: format::category_badge_class(event.category.as_str()),
                                            "{event.category.as_str()}"
                                        }
                                    }
                                    td { "{format::format_date(event.date.as_ref())}" }
                                    td { "{event.time}" }
                                    td { "{event.venue}" }
                                    td { "{event.organizer}" }
                                    td { class: "cell-actions",
                                        button {
                                            class: "btn btn-outline btn-small",
                                            onclick: {
                                                let event = event.clone();
                                                move |_| {
                                                    editing.set(Some(event.clone()));
                                                    show_form.set(true);
                                                }
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-danger btn-small",
                                            onclick: {
                                                let client = client.clone();
                                                let id = event.id.clone();
                                                move |_| {
                                                    if !confirm("Delete this event?") {
                                                        return;
                                                    }
                                                    let client = client.clone();
                                                    let id = id.clone();
                                                    spawn(async move {
                                                        match client.delete_event(&id).await {
                                                            Ok(()) => {
                                                                show_success(flash, "Event deleted");
                                                                events.refresh();
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
                on_prev: move |_| events.prev_page(),
                on_next: move |_| events.next_page(),
            }

            if show_form() {
                ModalOverlay {
                    on_close: move |_| {
                        show_form.set(false);
                        editing.set(None);
                    },
                    EventForm {
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
fn EventForm(
    initial: Option<Event>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let client = use_api();

    let edit_id = initial.as_ref().map(|event| event.id.clone());
    let heading = if edit_id.is_some() { "Edit event" } else { "New event" };
    let seed_title = initial.as_ref().map(|event| event.title.clone()).unwrap_or_default();
    let seed_description = initial
        .as_ref()
        .map(|event| event.description.clone())
        .unwrap_or_default();
    let seed_date = initial
        .as_ref()
        .and_then(|event| event.date)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let seed_time = initial.as_ref().map(|event| event.time.clone()).unwrap_or_default();
    let seed_venue = initial.as_ref().map(|event| event.venue.clone()).unwrap_or_default();
    let seed_organizer = initial
        .as_ref()
        .map(|event| event.organizer.clone())
        .unwrap_or_default();
    let seed_category = initial.as_ref().map(|event| event.category).unwrap_or_default();

    let mut title = use_signal(move || seed_title);
    let mut description = use_signal(move || seed_description);
    let mut date = use_signal(move || seed_date);
    let mut time = use_signal(move || seed_time);
    let mut venue = use_signal(move || seed_venue);
    let mut organizer = use_signal(move || seed_organizer);
    let mut category = use_signal(move || seed_category.as_str().to_string());
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
            let date_value = date();
            let time_value = time().trim().to_string();
            let venue_value = venue().trim().to_string();
            let organizer_value = organizer().trim().to_string();
            if title_value.is_empty()
                || description_value.is_empty()
                || date_value.is_empty()
                || time_value.is_empty()
                || venue_value.is_empty()
                || organizer_value.is_empty()
            {
                error.set(Some("All fields are required".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let payload = EventPayload {
                title: title_value,
                description: description_value,
                date: date_value,
                time: time_value,
                venue: venue_value,
                organizer: organizer_value,
                category: EventCategory::parse(&category()),
            };
            let result = match &edit_id {
                Some(id) => client.update_event(id, &payload).await,
                None => client.create_event(&payload).await,
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
                label { class: "form-label", r#for: "event-title", "Title" }
                input {
                    id: "event-title",
                    class: "form-input",
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "event-description", "Description" }
                textarea {
                    id: "event-description",
                    class: "form-textarea",
                    rows: 3,
                    value: "{description}",
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            div { class: "form-row",
                div { class: "form-field",
                    label { class: "form-label", r#for: "event-date", "Date" }
                    input {
                        id: "event-date",
                        class: "form-input",
                        r#type: "date",
                        value: "{date}",
                        oninput: move |evt: FormEvent| date.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", r#for: "event-time", "Time" }
                    input {
                        id: "event-time",
                        class: "form-input",
                        r#type: "time",
                        value: "{time}",
                        oninput: move |evt: FormEvent| time.set(evt.value()),
                    }
                }
            }

            div { class: "form-row",
                div { class: "form-field",
                    label { class: "form-label", r#for: "event-venue", "Venue" }
                    input {
                        id: "event-venue",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Main auditorium",
                        value: "{venue}",
                        oninput: move |evt: FormEvent| venue.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", r#for: "event-organizer", "Organizer" }
                    input {
                        id: "event-organizer",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Cultural committee",
                        value: "{organizer}",
                        oninput: move |evt: FormEvent| organizer.set(evt.value()),
                    }
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "event-category", "Category" }
                select {
                    id: "event-category",
                    class: "form-select",
                    value: "{category}",
                    onchange: move |evt: FormEvent| category.set(evt.value()),
                    for entry in EventCategory::ALL {
                        option { value: "{entry.as_str()}", "{entry.as_str()}" }
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else if edit_id.is_some() { "Save changes" } else { "Create event" }
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
