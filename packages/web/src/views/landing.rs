use dioxus::prelude::*;
use ui::views::LandingView;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();
    rsx! {
        LandingView {
            on_get_started: move |_| {
                nav.push(Route::Register {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

/// Unknown paths show the landing page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));
    rsx! { Landing {} }
}
