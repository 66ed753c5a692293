use dioxus::prelude::*;

use store::{Destination, LmsConfig, Role};
use ui::AppProvider;
use views::{
    AdminDashboard, AdminOnly, Contact, GuestOnly, Landing, Login, NotFound, Register, Shell,
    StudentDashboard, StudentOnly, TeacherDashboard, TeacherOnly,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/contact")]
        Contact {},

        #[layout(GuestOnly)]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
        #[end_layout]

        #[layout(StudentOnly)]
            #[route("/dashboard/student")]
            StudentDashboard {},
        #[end_layout]

        #[layout(TeacherOnly)]
            #[route("/dashboard/teacher")]
            TeacherDashboard {},
        #[end_layout]

        #[layout(AdminOnly)]
            #[route("/dashboard/admin")]
            AdminDashboard {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Landing => Route::Landing {},
            Destination::Login => Route::Login {},
            Destination::Dashboard(Role::Student) => Route::StudentDashboard {},
            Destination::Dashboard(Role::Teacher) => Route::TeacherDashboard {},
            Destination::Dashboard(Role::Admin) => Route::AdminDashboard {},
        }
    }
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Config baked into the bundle, with `LMS_*` build-time overrides.
#[cfg(target_arch = "wasm32")]
fn load_config() -> LmsConfig {
    let base = LmsConfig::from_toml(include_str!("../lms.toml")).unwrap_or_else(|e| {
        tracing::warn!("Invalid bundled lms.toml, using defaults: {e}");
        LmsConfig::default()
    });
    base.with_overrides(|key| {
        let value = match key {
            "LMS_USER_API_URL" => option_env!("LMS_USER_API_URL"),
            "LMS_COURSE_API_URL" => option_env!("LMS_COURSE_API_URL"),
            "LMS_ANALYTICS_KEY" => option_env!("LMS_ANALYTICS_KEY"),
            "LMS_PAGE_SIZE" => option_env!("LMS_PAGE_SIZE"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> LmsConfig {
    LmsConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Could not load {}, using defaults: {e}", LmsConfig::filename());
        LmsConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        AppProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destinations_map_to_their_paths() {
        for destination in [
            Destination::Landing,
            Destination::Login,
            Destination::Dashboard(Role::Student),
            Destination::Dashboard(Role::Teacher),
            Destination::Dashboard(Role::Admin),
        ] {
            assert_eq!(Route::from(destination).to_string(), destination.path());
        }
    }

    #[test]
    fn test_unknown_paths_fall_through_to_not_found() {
        let route: Route = "/nowhere/at/all".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
