use dioxus::prelude::*;

#[component]
pub fn StudentDashboard() -> Element {
    rsx! { ui::views::StudentDashboard {} }
}

#[component]
pub fn TeacherDashboard() -> Element {
    rsx! { ui::views::TeacherDashboard {} }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { ui::views::AdminDashboard {} }
}
