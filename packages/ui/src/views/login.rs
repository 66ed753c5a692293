use dioxus::prelude::*;
use store::models::LoginRequest;
use store::{validate, Destination};

use crate::components::{Button, ButtonVariant, Field};
use crate::toast::{show_toast, use_toasts, ToastLevel};
use crate::use_auth_actions;

/// Email/password sign-in form.
///
/// The platform package navigates on `on_success` with the dashboard of the
/// signed-in role.
#[component]
pub fn LoginView(on_success: EventHandler<Destination>, on_register: EventHandler<()>) -> Element {
    let actions = use_auth_actions();
    let mut toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| Option::<String>::None);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let actions = actions.clone();
        async move {
            email_error.set(validate::email(&email()));
            password_error.set(validate::password(&password()));
            if email_error().is_some() || password_error().is_some() {
                return;
            }

            loading.set(true);
            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
                role: None,
            };
            match actions.login(request).await {
                Ok(destination) => {
                    show_toast(&mut toasts, ToastLevel::Success, "Welcome back! Logging you in...");
                    on_success.call(destination);
                }
                Err(e) => show_toast(&mut toasts, ToastLevel::Error, e.login_message()),
            }
            loading.set(false);
        }
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Sign In" }
                p { class: "auth-subtitle", "Welcome back to SmartLearn" }

                form {
                    class: "form-grid",
                    onsubmit: handle_submit,
                    Field {
                        id: "login-email",
                        label: "Email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        error: email_error(),
                        oninput: move |v| email.set(v),
                    }
                    Field {
                        id: "login-password",
                        label: "Password",
                        r#type: "password",
                        value: password(),
                        error: password_error(),
                        oninput: move |v| password.set(v),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        class: "auth-submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "auth-switch",
                    "New here? "
                    button {
                        class: "link-button",
                        onclick: move |_| on_register.call(()),
                        "Create an Account"
                    }
                }
            }
        }
    }
}
