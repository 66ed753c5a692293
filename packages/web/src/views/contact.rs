use dioxus::prelude::*;
use ui::views::ContactView;

#[component]
pub fn Contact() -> Element {
    rsx! { ContactView {} }
}
