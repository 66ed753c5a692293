//! Authentication context and hooks for the UI.

use api::{ApiError, Services, UserService};
use dioxus::prelude::*;
use store::models::LoginRequest;
use store::{Destination, KeyValueStore, Role, SessionStore, User};

use crate::context::{use_config, use_services};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type SessionStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type SessionStorage = store::MemoryStorage;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the first `/users/me/info` check has answered.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The user-service calls the sign-in lifecycle depends on.
pub(crate) trait SessionApi {
    async fn me(&self) -> Result<User, ApiError>;
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

impl SessionApi for UserService {
    async fn me(&self) -> Result<User, ApiError> {
        UserService::me(self).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        UserService::login(self, request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        UserService::logout(self).await
    }
}

/// Ask the backend who is signed in. Any failure means nobody is.
async fn check_session<A: SessionApi, S: KeyValueStore>(
    api: &A,
    session: &SessionStore<S>,
) -> AuthState {
    match api.me().await {
        Ok(user) => {
            remember(session, &user);
            AuthState::signed_in(user)
        }
        Err(e) => {
            tracing::info!("No active session: {e}");
            forget(session);
            AuthState::anonymous()
        }
    }
}

async fn sign_in<A: SessionApi, S: KeyValueStore>(
    api: &A,
    session: &SessionStore<S>,
    request: &LoginRequest,
) -> Result<(AuthState, Destination), ApiError> {
    let user = api.login(request).await?;
    tracing::info!("Signed in as {} ({})", user.email, user.role);
    remember(session, &user);
    let destination = Destination::Dashboard(user.role);
    Ok((AuthState::signed_in(user), destination))
}

/// Storage is only cleared once the backend confirmed the logout.
async fn sign_out<A: SessionApi, S: KeyValueStore>(
    api: &A,
    session: &SessionStore<S>,
) -> Result<(AuthState, Destination), ApiError> {
    if let Err(e) = api.logout().await {
        tracing::error!("Logout failed: {e}");
        return Err(e);
    }
    forget(session);
    Ok((AuthState::anonymous(), Destination::Login))
}

fn remember<S: KeyValueStore>(session: &SessionStore<S>, user: &User) {
    if let Err(e) = session.save_user(user) {
        tracing::warn!("Could not persist session: {e}");
    }
}

fn forget<S: KeyValueStore>(session: &SessionStore<S>) {
    if let Err(e) = session.clear() {
        tracing::warn!("Could not clear session: {e}");
    }
}

/// Sign-in and sign-out, keeping the auth signal and the persisted session in
/// step with the user service.
#[derive(Clone)]
pub struct AuthActions {
    state: Signal<AuthState>,
    services: Signal<Services>,
    session: SessionStore<SessionStorage>,
}

impl AuthActions {
    pub async fn refresh(&self) {
        let users = self.services.read().users.clone();
        let next = check_session(&users, &self.session).await;
        let mut state = self.state;
        state.set(next);
    }

    /// Sign in and return the dashboard to open.
    pub async fn login(&self, request: LoginRequest) -> Result<Destination, ApiError> {
        let users = self.services.read().users.clone();
        let (next, destination) = sign_in(&users, &self.session, &request).await?;
        let mut state = self.state;
        state.set(next);
        Ok(destination)
    }

    /// Sign out. On failure the current state is kept.
    pub async fn logout(&self) -> Result<Destination, ApiError> {
        let users = self.services.read().users.clone();
        let (next, destination) = sign_out(&users, &self.session).await?;
        let mut state = self.state;
        state.set(next);
        Ok(destination)
    }
}

pub fn use_auth_actions() -> AuthActions {
    use_context::<AuthActions>()
}

/// Provider component that manages authentication state.
///
/// Starts out loading with no user and settles once `/users/me/info` answers.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let services = use_services();
    let config = use_config();
    let session = use_hook(|| {
        SessionStore::new(SessionStorage::default(), config.session.storage_key.clone())
    });

    let state = use_signal(AuthState::default);
    use_context_provider(|| state);

    let actions = use_context_provider(|| AuthActions {
        state,
        services,
        session,
    });

    let _ = use_resource(move || {
        let actions = actions.clone();
        async move { actions.refresh().await }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logged_out: EventHandler<Destination>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let actions = use_auth_actions();
    let mut pending = use_signal(|| false);

    let onclick = move |_| {
        let actions = actions.clone();
        async move {
            pending.set(true);
            let result = actions.logout().await;
            pending.set(false);
            if let Ok(destination) = result {
                on_logged_out.call(destination);
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: pending(),
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use store::MemoryStorage;

    /// A user service that answers from fixed outcomes.
    struct FakeUsers {
        signed_in: Option<User>,
        logout_status: Option<u16>,
        logouts: Cell<u32>,
    }

    impl FakeUsers {
        fn new(signed_in: Option<User>) -> Self {
            Self {
                signed_in,
                logout_status: None,
                logouts: Cell::new(0),
            }
        }

        fn unauthorized() -> ApiError {
            ApiError::Status {
                status: 401,
                message: Some("Unauthorized".into()),
            }
        }
    }

    impl SessionApi for FakeUsers {
        async fn me(&self) -> Result<User, ApiError> {
            self.signed_in.clone().ok_or_else(Self::unauthorized)
        }

        async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
            match &self.signed_in {
                Some(user) if user.email == request.email => Ok(user.clone()),
                _ => Err(Self::unauthorized()),
            }
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.logouts.set(self.logouts.get() + 1);
            match self.logout_status {
                Some(status) => Err(ApiError::Status { status, message: None }),
                None => Ok(()),
            }
        }
    }

    fn stored_session(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
        SessionStore::new(storage.clone(), "user")
    }

    fn login_as(email: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: "secret".into(),
            role: None,
        }
    }

    fn teacher() -> User {
        User {
            id: 7,
            name: "Grace".into(),
            email: "grace@example.com".into(),
            role: Role::Teacher,
            specialization: Some("Compilers".into()),
            created_at: None,
        }
    }

    #[test]
    fn test_default_is_loading_and_anonymous() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_signed_in_state() {
        let state = AuthState::signed_in(teacher());
        assert!(!state.loading);
        assert_eq!(state.role(), Some(Role::Teacher));
        assert_eq!(AuthState::anonymous().role(), None);
    }

    #[tokio::test]
    async fn test_session_check_success_persists_user() {
        let storage = MemoryStorage::default();
        let session = stored_session(&storage);

        let state = check_session(&FakeUsers::new(Some(teacher())), &session).await;
        assert_eq!(state, AuthState::signed_in(teacher()));
        assert_eq!(session.load_user().unwrap(), Some(teacher()));
    }

    #[tokio::test]
    async fn test_failed_session_check_clears_user_and_storage() {
        let storage = MemoryStorage::default();
        let session = stored_session(&storage);
        session.save_user(&teacher()).unwrap();

        let state = check_session(&FakeUsers::new(None), &session).await;
        assert_eq!(state, AuthState::anonymous());
        assert!(session.load_user().unwrap().is_none());
        assert!(storage.get("user").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_persists_user_and_opens_role_dashboard() {
        let storage = MemoryStorage::default();
        let session = stored_session(&storage);
        let users = FakeUsers::new(Some(teacher()));

        let (state, destination) = sign_in(&users, &session, &login_as("grace@example.com"))
            .await
            .unwrap();
        assert_eq!(destination, Destination::Dashboard(Role::Teacher));
        assert_eq!(state.role(), Some(Role::Teacher));
        assert!(!state.loading);
        assert_eq!(session.load_user().unwrap(), Some(teacher()));
    }

    #[tokio::test]
    async fn test_rejected_login_stores_nothing() {
        let storage = MemoryStorage::default();
        let session = stored_session(&storage);
        let users = FakeUsers::new(Some(teacher()));

        let err = sign_in(&users, &session, &login_as("nobody@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(session.load_user().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_state_and_storage() {
        let storage = MemoryStorage::default();
        let session = stored_session(&storage);
        session.save_user(&teacher()).unwrap();
        let mut users = FakeUsers::new(Some(teacher()));
        users.logout_status = Some(500);

        let mut state = AuthState::signed_in(teacher());
        let result = sign_out(&users, &session).await;
        assert!(result.is_err());
        if let Ok((next, _)) = result {
            state = next;
        }
        assert_eq!(state, AuthState::signed_in(teacher()));
        assert_eq!(session.load_user().unwrap(), Some(teacher()));
        assert_eq!(users.logouts.get(), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_storage_and_returns_to_login() {
        let storage = MemoryStorage::default();
        let session = stored_session(&storage);
        session.save_user(&teacher()).unwrap();

        let (state, destination) = sign_out(&FakeUsers::new(Some(teacher())), &session)
            .await
            .unwrap();
        assert_eq!(state, AuthState::anonymous());
        assert_eq!(destination, Destination::Login);
        assert!(session.load_user().unwrap().is_none());
    }
}
