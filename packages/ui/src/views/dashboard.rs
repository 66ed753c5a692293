use dioxus::prelude::*;
use store::Role;

use crate::sidebar::{section_label, DashboardSidebar};
use crate::use_auth;

/// Sidebar plus header frame shared by the three role dashboards.
///
/// The dashboard owns the active section; the shell only reports clicks.
#[component]
pub fn DashboardShell(
    role: Role,
    title: String,
    /// Section key of the page being shown.
    active: String,
    on_select: EventHandler<String>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let name = auth()
        .user
        .map(|u| u.name)
        .unwrap_or_else(|| role.title().to_string());
    let heading = section_label(role, &active);

    rsx! {
        div {
            class: "dashboard",
            DashboardSidebar {
                role,
                active: active.clone(),
                on_select,
            }
            main {
                class: "dashboard-main",
                header {
                    class: "dashboard-header",
                    div {
                        h1 { class: "dashboard-title", "{title}" }
                        p { class: "dashboard-subtitle", "{heading}" }
                    }
                    span { class: "dashboard-welcome", "Welcome, {name}" }
                }
                section {
                    class: "dashboard-content",
                    {children}
                }
            }
        }
    }
}

/// Single number card on a dashboard overview.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-label", "{label}" }
            strong { class: "stat-value", "{value}" }
            if let Some(hint) = hint {
                span { class: "stat-hint", "{hint}" }
            }
        }
    }
}

/// Placeholder shown while a card's data is loading.
pub(crate) const LOADING_VALUE: &str = "...";
