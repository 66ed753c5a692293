//! Outer layout: navbar plus the routed page.

use dioxus::prelude::*;
use store::Destination;
use ui::views::AuthPending;
use ui::{use_auth, LogoutButton, Navbar};

use crate::Route;

/// Routes that draw their own full-screen card and no navbar.
fn hides_navbar(route: &Route) -> bool {
    matches!(route, Route::Login {} | Route::Register {})
}

#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    if auth().loading {
        return rsx! { AuthPending {} };
    }

    let user = auth().user;
    rsx! {
        if !hides_navbar(&route) {
            Navbar {
                Link { class: "navbar-brand", to: Route::Landing {}, "SmartLearn" }
                div {
                    class: "navbar-links",
                    if let Some(user) = user {
                        Link { to: Route::from(Destination::Dashboard(user.role)), "Dashboard" }
                        Link { to: Route::Contact {}, "Contact" }
                        LogoutButton {
                            class: "btn btn-outline",
                            on_logged_out: move |destination| {
                                nav.replace(Route::from(destination));
                            },
                        }
                    } else {
                        Link { to: Route::Login {}, "Login" }
                        Link { class: "btn btn-primary", to: Route::Register {}, "Sign Up" }
                        Link { to: Route::Contact {}, "Contact" }
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}
