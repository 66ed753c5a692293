//! # API crate: REST client for the LMS backends
//!
//! The dashboards talk to two independent services, a user service (auth,
//! registration, user administration) and a course service (courses,
//! enrollments, course analytics). Each gets its own [`ApiClient`] so base URLs
//! and log labels stay separate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest` wrapper: base URL, JSON bodies, cookies, request/response logging |
//! | [`error`] | [`ApiError`] and the messages shown to users |
//! | [`params`] | Query string for paginated, searchable, sortable lists |
//! | [`users`] | [`UserService`] |
//! | [`courses`] | [`CourseService`] |
//!
//! Views get a [`Services`] bundle from context and never build URLs themselves.

pub mod client;
pub mod courses;
pub mod error;
pub mod params;
pub mod users;

pub use client::ApiClient;
pub use courses::CourseService;
pub use error::ApiError;
pub use params::ListParams;
pub use users::UserService;

pub use store::config::ApiConfig;
pub use store::LmsConfig;

/// Both backend services, configured once at startup.
#[derive(Clone, Debug)]
pub struct Services {
    pub users: UserService,
    pub courses: CourseService,
}

impl Services {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            users: UserService::new(ApiClient::new(config.user_base_url.clone(), "users")),
            courses: CourseService::new(
                ApiClient::new(config.course_base_url.clone(), "courses"),
                config.analytics_key.clone(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_from_default_config() {
        let services = Services::new(&LmsConfig::default().api);
        assert_eq!(services.users.client().base_url(), "http://localhost:5000");
        assert_eq!(services.courses.client().base_url(), "http://localhost:4000/api");
        assert_eq!(
            services.courses.client().url("/analytics"),
            "http://localhost:4000/api/analytics"
        );
        assert_eq!(services.users.client().label(), "users");
    }
}
