use api::models::Role;
use api::CreateAdminRequest;
use dioxus::prelude::*;
use ui::{
    confirm, show_error, show_success, use_api, use_auth, use_flash, EmptyState, FlashBanner,
    ModalOverlay, Spinner,
};

use crate::views::DashboardLayout;

/// Admin account management: list, provision, remove. The remove button
/// never renders on your own row; the backend refuses that call anyway.
#[component]
pub fn ManageAdmins() -> Element {
    let client = use_api();
    let auth = use_auth();
    let flash = use_flash();
    let mut show_form = use_signal(|| false);

    let list_client = client.clone();
    let mut admins = use_resource(move || {
        let client = list_client.clone();
        async move { client.list_admins().await }
    });

    let self_id = auth().user.map(|user| user.id).unwrap_or_default();

    let handle_created = move |_| {
        show_form.set(false);
        admins.restart();
        show_success(flash, "Admin account created");
    };

    rsx! {
        DashboardLayout { require: Role::Admin, active_path: "/admin/admins",
            div { class: "page-header",
                h1 { class: "page-title", "Admins" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_form.set(true),
                    "Add admin"
                }
            }

            FlashBanner { flash }

            match &*admins.read() {
                None => rsx! { Spinner {} },
                Some(Err(err)) => rsx! {
                    div { class: "inline-error", "{err}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    EmptyState { message: "No admin accounts" }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "table-wrap",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Department" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for admin in list.iter().cloned() {
                                    tr { key: "{admin.id}",
                                        td { class: "cell-title", "{admin.name}" }
                                        td { "{admin.email}" }
                                        td {
                                            if let Some(department) = &admin.department {
                                                "{department}"
                                            } else {
                                                "N/A"
                                            }
                                        }
                                        td { class: "cell-actions",
                                            if admin.id != self_id {
                                                button {
                                                    class: "btn btn-danger btn-small",
                                                    onclick: {
                                                        let client = client.clone();
                                                        let id = admin.id.clone();
                                                        move |_| {
                                                            if !confirm("Remove this admin account?") {
                                                                return;
                                                            }
                                                            let client = client.clone();
                                                            let id = id.clone();
                                                            spawn(async move {
                                                                match client.delete_admin(&id).await {
                                                                    Ok(()) => {
                                                                        show_success(flash, "Admin removed");
                                                                        admins.restart();
                                                                    }
                                                                    Err(err) => show_error(flash, err.to_string()),
                                                                }
                                                            });
                                                        }
                                                    },
                                                    "Remove"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }

            if show_form() {
                ModalOverlay {
                    on_close: move |_| show_form.set(false),
                    AdminForm {
                        on_saved: handle_created,
                        on_cancel: move |_| show_form.set(false),
                    }
                }
            }
        }
    }
}

#[component]
fn AdminForm(on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let client = use_api();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut department = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let name_value = name().trim().to_string();
            let email_value = email().trim().to_string();
            let password_value = password();
            if name_value.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if email_value.is_empty() || !email_value.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if password_value.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }
            error.set(None);
            saving.set(true);

            let department_value = department().trim().to_string();
            let request = CreateAdminRequest {
                name: name_value,
                email: email_value,
                password: password_value,
                department: (!department_value.is_empty()).then_some(department_value),
            };
            let result = client.create_admin(&request).await;
            saving.set(false);
            match result {
                Ok(()) => on_saved.call(()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        form { class: "modal-form", onsubmit: handle_submit,
            h2 { class: "modal-title", "Add admin" }

            if let Some(err) = error() {
                div { class: "inline-error", "{err}" }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "admin-name", "Name" }
                input {
                    id: "admin-name",
                    class: "form-input",
                    r#type: "text",
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }

            div { class: "form-field",
                label { class: "form-label", r#for: "admin-email", "Email" }
                input {
                    id: "admin-email",
                    class: "form-input",
                    r#type: "email",
                    placeholder: "name@campus.edu",
                    value: "{email}",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }

            div { class: "form-row",
                div { class: "form-field",
                    label { class: "form-label", r#for: "admin-password", "Password" }
                    input {
                        id: "admin-password",
                        class: "form-input",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { class: "form-label", r#for: "admin-department", "Department (optional)" }
                    input {
                        id: "admin-department",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Student affairs",
                        value: "{department}",
                        oninput: move |evt: FormEvent| department.set(evt.value()),
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Creating..." } else { "Create account" }
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
