use dioxus::prelude::*;

/// Placeholder cards shown while the session check is still running.
#[component]
pub fn AuthPending() -> Element {
    rsx! {
        div {
            class: "auth-pending card-grid",
            for i in 0..3 {
                div {
                    key: "{i}",
                    class: "skeleton-card",
                    div { class: "skeleton skeleton-title" }
                    div { class: "skeleton" }
                    div { class: "skeleton" }
                }
            }
        }
    }
}
