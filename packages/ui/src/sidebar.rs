use dioxus::prelude::*;
use store::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub section: &'static str,
    pub label: &'static str,
}

const fn item(section: &'static str, label: &'static str) -> NavItem {
    NavItem { section, label }
}

pub const ADMIN_NAV: &[NavItem] = &[
    item("analytics", "Dashboard"),
    item("manage_teachers", "Teachers"),
    item("manage_students", "Students"),
];

pub const TEACHER_NAV: &[NavItem] = &[
    item("students", "Students"),
    item("courses", "Courses"),
    item("recent", "Recents"),
    item("enrollments", "Enrollments"),
];

pub const STUDENT_NAV: &[NavItem] = &[
    item("dashboard", "Home"),
    item("availableCourses", "Available Courses"),
    item("myEnrollments", "My Enrollments"),
];

pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Teacher => TEACHER_NAV,
        Role::Student => STUDENT_NAV,
    }
}

/// Label of `section` in the role's navigation, "Dashboard" if unknown.
pub fn section_label(role: Role, section: &str) -> &'static str {
    nav_items(role)
        .iter()
        .find(|item| item.section == section)
        .map(|item| item.label)
        .unwrap_or("Dashboard")
}

/// Dashboard navigation. Collapses to initials.
#[component]
pub fn DashboardSidebar(
    role: Role,
    active: String,
    on_select: EventHandler<String>,
) -> Element {
    let mut collapsed = use_signal(|| false);
    let nav_class = if collapsed() {
        format!("sidebar sidebar-{} collapsed", role.as_str())
    } else {
        format!("sidebar sidebar-{}", role.as_str())
    };

    rsx! {
        nav {
            class: nav_class,
            div {
                class: "sidebar-header",
                if !collapsed() {
                    h1 { class: "sidebar-title", "{role.title()} Panel" }
                }
                button {
                    class: "sidebar-toggle",
                    title: if collapsed() { "Expand" } else { "Collapse" },
                    onclick: move |_| collapsed.toggle(),
                    if collapsed() { "\u{2630}" } else { "\u{00d7}" }
                }
            }
            ul {
                class: "sidebar-nav",
                for entry in nav_items(role).iter().copied() {
                    li {
                        key: "{entry.section}",
                        button {
                            class: if active == entry.section { "sidebar-item active" } else { "sidebar-item" },
                            title: "{entry.label}",
                            onclick: move |_| on_select.call(entry.section.to_string()),
                            if collapsed() {
                                {initial(entry.label)}
                            } else {
                                "{entry.label}"
                            }
                        }
                    }
                }
            }
            div {
                class: "sidebar-footer",
                if collapsed() {
                    {initial(role.title())}
                } else {
                    "Logged in as "
                    strong { "{role.title()}" }
                }
            }
        }
    }
}

fn initial(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_role_has_its_sections() {
        let admin: Vec<_> = nav_items(Role::Admin).iter().map(|i| i.section).collect();
        assert_eq!(admin, ["analytics", "manage_teachers", "manage_students"]);
        assert_eq!(nav_items(Role::Teacher).len(), 4);
        assert_eq!(nav_items(Role::Student)[0].section, "dashboard");
    }

    #[test]
    fn test_section_label() {
        assert_eq!(section_label(Role::Student, "availableCourses"), "Available Courses");
        assert_eq!(section_label(Role::Teacher, "recent"), "Recents");
        assert_eq!(section_label(Role::Admin, "nope"), "Dashboard");
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("Teacher"), "T");
        assert_eq!(initial(""), "");
    }
}
