//! Login page view.

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_success: move |destination| {
                nav.replace(Route::from(destination));
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
