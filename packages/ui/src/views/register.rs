//! Self-service student registration.

use std::time::Duration;

use dioxus::prelude::*;
use store::models::StudentRegistration;
use store::validate;

use crate::components::{Button, ButtonVariant, Field};
use crate::toast::{report, sleep, use_toasts, ToastLevel};
use crate::use_services;

/// Pause between the success toast and leaving for the login page.
const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Debug, Default, PartialEq)]
struct RegisterErrors {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

impl RegisterErrors {
    fn check(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: validate::registration_name(name),
            email: validate::email(email),
            password: validate::registration_password(password),
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[component]
pub fn RegisterView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let services = use_services();
    let mut toasts = use_toasts();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(RegisterErrors::default);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            let found = RegisterErrors::check(&name(), &email(), &password());
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                return;
            }

            loading.set(true);
            let registration = StudentRegistration {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            let users = services.read().users.clone();
            let result = users.register_student(&registration).await;
            report(
                &mut toasts,
                &result,
                ToastLevel::Success,
                "Account created successfully! Redirecting to login...",
                "Registration failed. Please try again.",
            );
            if result.is_ok() {
                sleep(REDIRECT_DELAY).await;
                on_registered.call(());
            }
            loading.set(false);
        }
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Create an Account" }
                p { class: "auth-subtitle", "Start learning with SmartLearn" }

                form {
                    class: "form-grid",
                    onsubmit: handle_submit,
                    Field {
                        id: "register-name",
                        label: "Full Name",
                        value: name(),
                        error: errors().name,
                        oninput: move |v| name.set(v),
                    }
                    Field {
                        id: "register-email",
                        label: "Email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        error: errors().email,
                        oninput: move |v| email.set(v),
                    }
                    Field {
                        id: "register-password",
                        label: "Password",
                        r#type: "password",
                        placeholder: "6+ characters, one uppercase letter and a number",
                        value: password(),
                        error: errors().password,
                        oninput: move |v| password.set(v),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign Up" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    button {
                        class: "link-button",
                        onclick: move |_| on_login.call(()),
                        "Login"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_rules() {
        let ok = RegisterErrors::check("Ada Lovelace", "ada@example.com", "Secret1");
        assert!(ok.is_empty());

        let bad = RegisterErrors::check("Al", "ada", "secret1");
        assert!(bad.name.is_some());
        assert!(bad.email.is_some());
        assert_eq!(
            bad.password.as_deref(),
            Some("Must contain at least one uppercase letter")
        );
    }
}
