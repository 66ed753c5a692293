//! Guard layouts. Each one asks `store::guard` what to do with the current
//! auth state and either waits, redirects, or renders the nested route.

use dioxus::prelude::*;
use store::guard::{protected, public_only};
use store::{GuardDecision, Role};
use ui::views::AuthPending;
use ui::use_auth;

use crate::Route;

fn resolve(decision: GuardDecision, nav: Navigator) -> Element {
    match decision {
        GuardDecision::Pending => rsx! { AuthPending {} },
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect(destination) => {
            tracing::debug!("Guard redirect to {}", destination.path());
            nav.replace(Route::from(destination));
            rsx! {}
        }
    }
}

fn role_guard(role: Role) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();
    resolve(protected(state.user.as_ref(), state.loading, Some(role)), nav)
}

/// Login and register: signed-in users go to their dashboard.
#[component]
pub fn GuestOnly() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();
    resolve(public_only(state.user.as_ref(), state.loading, true), nav)
}

#[component]
pub fn StudentOnly() -> Element {
    role_guard(Role::Student)
}

#[component]
pub fn TeacherOnly() -> Element {
    role_guard(Role::Teacher)
}

#[component]
pub fn AdminOnly() -> Element {
    role_guard(Role::Admin)
}
