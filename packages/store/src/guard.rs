//! Route guard decisions.
//!
//! Pure functions of the auth state; the router layouts in the web crate turn a
//! [`GuardDecision`] into a spinner, a redirect or the routed page.

use crate::models::{Role, User};

/// Where a redirect should go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Landing,
    Login,
    Dashboard(Role),
}

impl Destination {
    /// Browser path of the destination.
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Landing => "/",
            Destination::Login => "/login",
            Destination::Dashboard(role) => dashboard_path(*role),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The auth check is still in flight; render nothing but a placeholder.
    Pending,
    Render,
    Redirect(Destination),
}

pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/dashboard/admin",
        Role::Teacher => "/dashboard/teacher",
        Role::Student => "/dashboard/student",
    }
}

/// Guard for authenticated routes.
///
/// Anonymous visitors go to the login page. A signed-in user on another role's
/// route is sent to their own dashboard rather than to login.
pub fn protected(user: Option<&User>, loading: bool, required: Option<Role>) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }
    let Some(user) = user else {
        return GuardDecision::Redirect(Destination::Login);
    };
    match required {
        Some(role) if role != user.role => {
            GuardDecision::Redirect(Destination::Dashboard(user.role))
        }
        _ => GuardDecision::Render,
    }
}

/// Guard for public pages. Signed-in users are bounced to their dashboard when
/// `redirect_to_dashboard` is set (login, register) and let through otherwise
/// (landing, contact).
pub fn public_only(user: Option<&User>, loading: bool, redirect_to_dashboard: bool) -> GuardDecision {
    if loading {
        return GuardDecision::Pending;
    }
    match user {
        Some(user) if redirect_to_dashboard => {
            GuardDecision::Redirect(Destination::Dashboard(user.role))
        }
        _ => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: 1,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            role,
            specialization: None,
            created_at: None,
        }
    }

    #[test]
    fn test_protected_waits_for_auth_check() {
        assert_eq!(protected(None, true, Some(Role::Admin)), GuardDecision::Pending);
        let admin = user(Role::Admin);
        assert_eq!(protected(Some(&admin), true, None), GuardDecision::Pending);
    }

    #[test]
    fn test_protected_sends_anonymous_to_login() {
        assert_eq!(
            protected(None, false, Some(Role::Student)),
            GuardDecision::Redirect(Destination::Login)
        );
        assert_eq!(
            protected(None, false, None),
            GuardDecision::Redirect(Destination::Login)
        );
    }

    #[test]
    fn test_teacher_on_admin_route_goes_to_teacher_dashboard() {
        let teacher = user(Role::Teacher);
        let decision = protected(Some(&teacher), false, Some(Role::Admin));
        assert_eq!(decision, GuardDecision::Redirect(Destination::Dashboard(Role::Teacher)));
        if let GuardDecision::Redirect(dest) = decision {
            assert_eq!(dest.path(), "/dashboard/teacher");
        }
    }

    #[test]
    fn test_protected_renders_matching_role() {
        let student = user(Role::Student);
        assert_eq!(protected(Some(&student), false, Some(Role::Student)), GuardDecision::Render);
        assert_eq!(protected(Some(&student), false, None), GuardDecision::Render);
    }

    #[test]
    fn test_public_only() {
        let admin = user(Role::Admin);
        assert_eq!(public_only(None, true, true), GuardDecision::Pending);
        assert_eq!(public_only(None, false, true), GuardDecision::Render);
        assert_eq!(
            public_only(Some(&admin), false, true),
            GuardDecision::Redirect(Destination::Dashboard(Role::Admin))
        );
        assert_eq!(public_only(Some(&admin), false, false), GuardDecision::Render);
    }
}
