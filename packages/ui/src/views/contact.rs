use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Field, Label, TextArea};
use crate::toast::sleep;

/// How long the "Message Sent" confirmation stays up before the form resets.
const SENT_NOTICE: Duration = Duration::from_secs(3);

/// Contact details and a message form. Nothing is sent anywhere; a complete
/// form just shows the confirmation.
#[component]
pub fn ContactView() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sent = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            let complete = [name(), email(), message()]
                .iter()
                .all(|field| !field.trim().is_empty());
            if !complete {
                return;
            }
            tracing::info!("Contact message from {}", email());
            sent.set(true);
            sleep(SENT_NOTICE).await;
            sent.set(false);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
    };

    rsx! {
        div {
            class: "contact-page",
            div {
                class: "contact-info",
                h1 { "Get in Touch" }
                p { "Questions about a course or your account? We are happy to help." }
                ul {
                    li { strong { "Email: " } "support@smartlearn.com" }
                    li { strong { "Phone: " } "+91 98765 43210" }
                    li { strong { "Address: " } "Chennai, India" }
                }
            }

            div {
                class: "contact-card",
                if sent() {
                    div {
                        class: "contact-sent",
                        h2 { "Message Sent" }
                        p { "Thanks for reaching out. We will get back to you soon." }
                    }
                } else {
                    form {
                        class: "form-grid",
                        onsubmit: handle_submit,
                        Field {
                            id: "contact-name",
                            label: "Name",
                            value: name(),
                            oninput: move |v| name.set(v),
                        }
                        Field {
                            id: "contact-email",
                            label: "Email",
                            r#type: "email",
                            value: email(),
                            oninput: move |v| email.set(v),
                        }
                        div {
                            class: "field",
                            Label { html_for: "contact-message", "Message" }
                            TextArea {
                                id: "contact-message",
                                rows: 5,
                                value: message(),
                                oninput: move |evt: FormEvent| message.set(evt.value()),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}
