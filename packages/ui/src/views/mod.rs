use dioxus::prelude::*;

pub(crate) const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod dashboard;
pub use dashboard::{DashboardShell, StatCard};

pub mod forms;
pub use forms::{CourseForm, UserForm, UserKind};

mod admin;
pub use admin::AdminDashboard;

mod teacher;
pub use teacher::TeacherDashboard;

mod student;
pub use student::StudentDashboard;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod landing;
pub use landing::LandingView;

mod contact;
pub use contact::ContactView;

mod pending;
pub use pending::AuthPending;
