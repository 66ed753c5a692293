//! Shared UI for the SmartLearn front end.
//!
//! Context providers (services, config, auth, toasts), the generic list
//! table, dashboard chrome and every page view. Platform packages add routing
//! and turn the navigation callbacks into route changes.

use dioxus::prelude::*;

pub mod components;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod context;
pub use context::{use_config, use_query_client, use_services, AppProvider};

mod auth;
pub use auth::{use_auth, use_auth_actions, AuthActions, AuthProvider, AuthState, LogoutButton};

pub mod toast;
pub use toast::{report, show_toast, use_toasts, ToastLevel, ToastProvider, Toasts};

pub mod table;
pub use table::{Column, GenericTable, Pagination, TableRow};

mod navbar;
pub use navbar::Navbar;

pub mod sidebar;
pub use sidebar::DashboardSidebar;

#[cfg(test)]
mod testing;
