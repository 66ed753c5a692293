use dioxus::prelude::*;

/// Top bar of the public pages. The brand and links come from the router crate.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            {children}
        }
    }
}
