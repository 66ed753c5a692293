mod shell;
pub use shell::Shell;

mod guards;
pub use guards::{AdminOnly, GuestOnly, StudentOnly, TeacherOnly};

mod landing;
pub use landing::{Landing, NotFound};

mod contact;
pub use contact::Contact;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboards;
pub use dashboards::{AdminDashboard, StudentDashboard, TeacherDashboard};
