use api::models::{FeedbackCategory, FeedbackPayload, Role, MESSAGE_MAX_LEN, SUBJECT_MAX_LEN};
use dioxus::prelude::*;
use ui::{show_error, use_api, use_flash, FlashBanner};

use crate::views::DashboardLayout;

/// Feedback form. Students only submit; reading and resolving happen on the
/// admin side. Anonymous submissions never carry the author's identity.
/// After a successful send the form collapses into a thank-you panel.
#[component]
pub fn StudentFeedback() -> Element {
    let client = use_api();
    let flash = use_flash();

    let mut subject = use_signal(String::new);
    let mut category = use_signal(|| FeedbackCategory::default().as_str().to_string());
    let mut message = use_signal(String::new);
    let mut is_anonymous = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let subject_value = subject().trim().to_string();
            let message_value = message().trim().to_string();
            if subject_value.is_empty() || message_value.is_empty() {
                error.set(Some("Subject and message are required".to_string()));
                return;
            }
            if subject_value.len() > SUBJECT_MAX_LEN {
                error.set(Some(format!(
                    "Subject must be at most {SUBJECT_MAX_LEN} characters"
                )));
                return;
            }
            if message_value.len() > MESSAGE_MAX_LEN {
                error.set(Some(format!(
                    "Message must be at most {MESSAGE_MAX_LEN} characters"
                )));
                return;
            }
            error.set(None);
            submitting.set(true);

            let payload = FeedbackPayload {
                subject: subject_value,
                message: message_value,
                category: FeedbackCategory::parse(&category()),
                is_anonymous: is_anonymous(),
            };
            let result = client.submit_feedback(&payload).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    subject.set(String::new());
                    message.set(String::new());
                    is_anonymous.set(false);
                    submitted.set(true);
                }
                Err(err) => show_error(flash, err.to_string()),
            }
        });
    };

    rsx! {
        DashboardLayout { require: Role::Student, active_path: "/student/feedback",
            div { class: "page-header",
                h1 { class: "page-title", "Feedback" }
                p { class: "page-sub", "Tell us what works and what does not." }
            }

            FlashBanner { flash }

            if submitted() {
                div { class: "panel thanks-panel",
                    h2 { class: "thanks-title", "Thank you!" }
                    p { class: "thanks-text",
                        "Your feedback has been submitted. We appreciate you taking the time to help us improve."
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| submitted.set(false),
                        "Submit another feedback"
                    }
                }
            } else {
                form { class: "panel feedback-form", onsubmit: handle_submit,
                    if let Some(err) = error() {
                        div { class: "inline-error", "{err}" }
                    }

                    div { class: "form-field",
                        label { class: "form-label", r#for: "fb-subject", "Subject" }
                        input {
                            id: "fb-subject",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "One line summary",
                            maxlength: "{SUBJECT_MAX_LEN}",
                            value: "{subject}",
                            oninput: move |evt: FormEvent| subject.set(evt.value()),
                        }
                        span { class: "char-count", "{subject.read().len()}/{SUBJECT_MAX_LEN}" }
                    }

                    div { class: "form-field",
                        label { class: "form-label", r#for: "fb-category", "Category" }
                        select {
                            id: "fb-category",
                            class: "form-select",
                            value: "{category}",
                            onchange: move |evt: FormEvent| category.set(evt.value()),
                            for entry in FeedbackCategory::ALL {
                                option { value: "{entry.as_str()}", "{entry.as_str()}" }
                            }
                        }
                    }

                    div { class: "form-field",
                        label { class: "form-label", r#for: "fb-message", "Message" }
                        textarea {
                            id: "fb-message",
                            class: "form-textarea",
                            rows: 6,
                            placeholder: "The more specific, the easier it is to act on",
                            maxlength: "{MESSAGE_MAX_LEN}",
                            value: "{message}",
                            oninput: move |evt: FormEvent| message.set(evt.value()),
                        }
                        span { class: "char-count", "{message.read().len()}/{MESSAGE_MAX_LEN}" }
                    }

                    label { class: "form-check",
                        input {
                            r#type: "checkbox",
                            checked: is_anonymous(),
                            onchange: move |evt: FormEvent| is_anonymous.set(evt.checked()),
                        }
                        "Submit anonymously"
                    }

                    div { class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Sending..." } else { "Submit feedback" }
                        }
                    }
                }
            }
        }
    }
}
