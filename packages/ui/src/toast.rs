use std::time::Duration;

use api::ApiError;
use dioxus::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast and schedule its removal.
///
/// The timer is not owned by the calling component, so a toast shown right
/// before a navigation still goes away on time.
pub fn show_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: impl Into<String>) {
    let message = message.into();
    match level {
        ToastLevel::Error => tracing::warn!("{message}"),
        _ => tracing::debug!("{message}"),
    }
    let id = toasts.write().push(level, message);
    let mut toasts = *toasts;
    let _ = spawn_forever(async move {
        sleep(TOAST_DURATION).await;
        // The provider may be gone by now.
        if let Ok(mut toasts) = toasts.try_write() {
            toasts.dismiss(id);
        }
    });
}

/// Toast the outcome of a mutation: `success` at `level`, or the backend's
/// error message with `fallback` when it gave none.
pub fn report<T>(
    toasts: &mut Signal<Toasts>,
    result: &Result<T, ApiError>,
    level: ToastLevel,
    success: &str,
    fallback: &str,
) {
    match result {
        Ok(_) => show_toast(toasts, level, success),
        Err(e) => show_toast(toasts, ToastLevel::Error, e.user_message(fallback)),
    }
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        ToastStack {}
    }
}

#[component]
fn ToastStack() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries().to_vec();

    rsx! {
        div {
            class: "toast-stack",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        ToastLevel::Success => "toast success",
                        ToastLevel::Info => "toast info",
                        ToastLevel::Error => "toast error",
                    },
                    span { "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{keep_running, mount_and_run};
    use std::cell::Cell;

    thread_local! {
        static SHOWN_IN: Cell<Option<Signal<Toasts>>> = const { Cell::new(None) };
    }

    /// Shows a toast on mount, like the login form before it navigates away.
    #[component]
    fn Greeter() -> Element {
        let mut toasts = use_toasts();
        use_hook(move || {
            SHOWN_IN.with(|cell| cell.set(Some(toasts)));
            show_toast(&mut toasts, ToastLevel::Success, "Welcome back!");
        });
        rsx! { p { "signed in" } }
    }

    #[component]
    fn LeavesEarly() -> Element {
        let mut greeting = use_signal(|| true);
        use_hook(move || {
            spawn(async move {
                sleep(Duration::from_millis(200)).await;
                greeting.set(false);
            })
        });
        rsx! {
            ToastProvider {
                if greeting() {
                    Greeter {}
                }
            }
        }
    }

    #[component]
    fn Stays() -> Element {
        rsx! {
            ToastProvider {
                Greeter {}
            }
        }
    }

    fn toasts_left(dom: &VirtualDom) -> usize {
        let toasts = SHOWN_IN.with(|cell| cell.get()).expect("toast was shown");
        dom.in_runtime(|| toasts.peek().entries().len())
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_toast_dismissed_after_its_component_unmounts() {
        let mut dom = VirtualDom::new(LeavesEarly);
        mount_and_run(&mut dom, Duration::from_millis(500)).await;
        assert_eq!(toasts_left(&dom), 1);

        keep_running(&mut dom, Duration::from_millis(3300)).await;
        assert_eq!(toasts_left(&dom), 0);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_toast_dismissed_while_component_stays() {
        let mut dom = VirtualDom::new(Stays);
        mount_and_run(&mut dom, Duration::from_millis(3800)).await;
        assert_eq!(toasts_left(&dom), 0);
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Success, "Enrolled successfully!");
        let b = toasts.push(ToastLevel::Error, "Enrollment failed");
        assert!(b > a);
        assert_eq!(toasts.entries().len(), 2);
        assert_eq!(toasts.entries()[1].level, ToastLevel::Error);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Info, "one");
        let b = toasts.push(ToastLevel::Info, "two");
        toasts.dismiss(a);
        assert_eq!(toasts.entries().len(), 1);
        assert_eq!(toasts.entries()[0].id, b);
        toasts.dismiss(a);
        assert_eq!(toasts.entries().len(), 1);
    }
}
