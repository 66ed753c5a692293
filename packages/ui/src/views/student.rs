//! Student dashboard: overview, course catalogue and own enrollments.
//!
//! Everything here is fetched once per invalidation and then searched, sorted
//! and paged locally.

use std::collections::HashSet;

use api::ListParams;
use dioxus::prelude::*;
use store::local::apply;
use store::models::display_date;
use store::query::scope;
use store::{Course, Enrollment, Role, TableState};

use super::dashboard::{DashboardShell, StatCard, LOADING_VALUE};
use super::modal_overlay::ModalOverlay;
use crate::components::{Button, ButtonVariant};
use crate::table::{page_parts, use_page_clamp, Column, GenericTable, Pagination};
use crate::toast::{report, use_toasts, ToastLevel};
use crate::{use_config, use_query_client, use_services};

/// How many courses the catalogue asks for in one request.
const CATALOGUE_LIMIT: u32 = 100;
/// Enrollments listed on the overview.
const QUICK_VIEW_LIMIT: usize = 5;

const ENROLL_SCOPES: &[&str] = &[scope::COURSES, scope::MY_ENROLLMENTS];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Layout {
    #[default]
    Cards,
    Table,
}

/// Courses the student is not enrolled in yet.
fn available_courses(courses: &[Course], enrollments: &[Enrollment]) -> Vec<Course> {
    let enrolled: HashSet<i64> = enrollments.iter().map(|e| e.course_id).collect();
    courses
        .iter()
        .filter(|c| !enrolled.contains(&c.id))
        .cloned()
        .collect()
}

fn rating_label(course: &Course) -> String {
    format!("\u{2605} {:.1}", course.display_rating())
}

fn course_columns() -> Vec<Column<Course>> {
    vec![
        Column::new("title", "Title", |c: &Course| c.title.clone()),
        Column::new("category", "Category", |c: &Course| c.category.clone()),
        Column::new("duration", "Duration", |c: &Course| format!("{} hrs", c.duration)),
        Column::new("rating", "Rating", rating_label),
    ]
}

fn enrollment_columns() -> Vec<Column<Enrollment>> {
    vec![
        Column::new("id", "ID", |e: &Enrollment| e.id.to_string()),
        Column::new("courseTitle", "Course", |e: &Enrollment| e.course_title.clone()),
        Column::new("enrollmentDate", "Enrolled On", |e: &Enrollment| {
            display_date(e.enrollment_date.or(e.created_at))
        }),
    ]
}

#[component]
pub fn StudentDashboard() -> Element {
    let config = use_config();
    let services = use_services();
    let mut query = use_query_client();
    let mut toasts = use_toasts();
    let page_size = config.table.page_size;

    let mut section = use_signal(|| "dashboard".to_string());
    let mut layout = use_signal(Layout::default);
    let mut course_table = use_signal(|| TableState::new("title", page_size));
    let mut enrollment_table = use_signal(|| TableState::new("courseTitle", page_size));
    let mut selected = use_signal(|| None::<Course>);
    let mut enrolling = use_signal(|| None::<i64>);
    let mut removing = use_signal(|| None::<i64>);

    let courses = use_resource(move || async move {
        let _generation = query.read().generation(scope::COURSES);
        let courses = services.read().courses.clone();
        courses.courses(&ListParams::page(1, CATALOGUE_LIMIT)).await
    });
    let my_enrollments = use_resource(move || async move {
        let _generation = query.read().generation(scope::MY_ENROLLMENTS);
        let courses = services.read().courses.clone();
        courses.my_enrollments().await
    });

    let enroll = move |course_id: i64| {
        spawn(async move {
            enrolling.set(Some(course_id));
            let courses = services.read().courses.clone();
            let result = courses.enroll(course_id).await;
            enrolling.set(None);
            report(
                &mut toasts,
                &result,
                ToastLevel::Success,
                "Enrolled successfully!",
                "Enrollment failed",
            );
            if query.write().settle(&result, ENROLL_SCOPES) {
                selected.set(None);
            }
        });
    };

    let unenroll = move |enrollment_id: i64| {
        spawn(async move {
            removing.set(Some(enrollment_id));
            let courses = services.read().courses.clone();
            let result = courses.delete_enrollment(enrollment_id).await;
            removing.set(None);
            report(&mut toasts, &result, ToastLevel::Info, "Enrollment removed", "Delete failed");
            query.write().settle(&result, ENROLL_SCOPES);
        });
    };

    let course_actions = use_callback(move |course: Course| {
        let id = course.id;
        let pending = enrolling() == Some(id);
        rsx! {
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| selected.set(Some(course.clone())),
                "View"
            }
            Button {
                variant: ButtonVariant::Primary,
                disabled: pending,
                onclick: move |_| enroll(id),
                if pending { "Enrolling..." } else { "Enroll" }
            }
        }
    });
    let enrollment_actions = use_callback(move |enrollment: Enrollment| {
        let id = enrollment.id;
        let pending = removing() == Some(id);
        rsx! {
            Button {
                variant: ButtonVariant::Destructive,
                disabled: pending,
                onclick: move |_| unenroll(id),
                if pending { "Removing..." } else { "Remove" }
            }
        }
    });

    let (catalogue, _, courses_loading) = page_parts(&*courses.read());
    let (mine, mine_total, mine_loading) = page_parts(&*my_enrollments.read());
    let available = available_courses(&catalogue, &mine);
    let available_count = available.len();
    let course_page = apply(&available, &course_table.read());
    let enrollment_page = apply(&mine, &enrollment_table.read());
    use_page_clamp(course_table, course_page.total, courses_loading || mine_loading);
    use_page_clamp(enrollment_table, enrollment_page.total, mine_loading);

    let body = match section().as_str() {
        "availableCourses" => {
            let table_layout = layout() == Layout::Table;
            let toggle_label = if table_layout { "Card View" } else { "Table View" };
            let search = course_table.read().search.clone();
            rsx! {
                div {
                    class: "section-bar",
                    h2 { class: "section-title", "Course Catalog" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            let next = if layout() == Layout::Cards { Layout::Table } else { Layout::Cards };
                            layout.set(next);
                        },
                        "{toggle_label}"
                    }
                }
                if table_layout {
                    GenericTable::<Course> {
                        columns: course_columns(),
                        rows: course_page.items,
                        total: course_page.total,
                        state: course_table(),
                        loading: courses_loading || mine_loading,
                        search_placeholder: "Search courses...",
                        on_search: move |q| course_table.write().set_search(q),
                        on_sort: move |f: String| course_table.write().toggle_sort(&f),
                        on_page: move |p| course_table.write().set_page(p),
                        actions: course_actions,
                        empty_message: "No courses available",
                    }
                } else {
                    input {
                        class: "input lms-table-search",
                        r#type: "search",
                        placeholder: "Search courses...",
                        value: "{search}",
                        oninput: move |evt| course_table.write().set_search(evt.value()),
                    }
                    if courses_loading || mine_loading {
                        div {
                            class: "card-grid",
                            for i in 0..3 {
                                div { key: "{i}", class: "course-card skeleton-card" }
                            }
                        }
                    } else if course_page.items.is_empty() {
                        p { class: "panel-empty", "No courses available" }
                    } else {
                        div {
                            class: "card-grid",
                            for course in course_page.items {
                                CourseCard {
                                    key: "{course.id}",
                                    course: course.clone(),
                                    pending: enrolling() == Some(course.id),
                                    on_view: move |c| selected.set(Some(c)),
                                    on_enroll: move |id| enroll(id),
                                }
                            }
                        }
                        Pagination {
                            page: course_table.read().page,
                            limit: course_table.read().limit,
                            total: course_page.total,
                            on_page: move |p| course_table.write().set_page(p),
                        }
                    }
                }
            }
        }
        "myEnrollments" => rsx! {
            h2 { class: "section-title", "My Courses" }
            GenericTable::<Enrollment> {
                columns: enrollment_columns(),
                rows: enrollment_page.items,
                total: enrollment_page.total,
                state: enrollment_table(),
                loading: mine_loading,
                search_placeholder: "Search my courses...",
                on_search: move |q| enrollment_table.write().set_search(q),
                on_sort: move |f: String| enrollment_table.write().toggle_sort(&f),
                on_page: move |p| enrollment_table.write().set_page(p),
                actions: enrollment_actions,
                empty_message: "You are not enrolled in any course yet",
            }
        },
        _ => {
            let enrolled_value = if mine_loading { LOADING_VALUE.to_string() } else { mine_total.to_string() };
            let available_value = if courses_loading || mine_loading {
                LOADING_VALUE.to_string()
            } else {
                available_count.to_string()
            };
            let quick_view: Vec<Enrollment> = mine.iter().take(QUICK_VIEW_LIMIT).cloned().collect();
            rsx! {
                div {
                    class: "stat-grid",
                    StatCard { label: "Total Enrolled Courses", value: enrolled_value }
                    StatCard { label: "Courses Available", value: available_value }
                    StatCard { label: "Account Status", value: "Active" }
                }
                div {
                    class: "panel",
                    div {
                        class: "section-bar",
                        h3 { "My Enrollments" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| section.set("myEnrollments".to_string()),
                            "View all"
                        }
                    }
                    if quick_view.is_empty() {
                        p {
                            class: "panel-empty",
                            "You have not enrolled in any course yet."
                        }
                        Button {
                            onclick: move |_| section.set("availableCourses".to_string()),
                            "Browse Courses"
                        }
                    }
                    ul {
                        class: "recent-list",
                        for enrollment in quick_view {
                            li {
                                key: "{enrollment.id}",
                                strong { "{enrollment.course_title}" }
                                span {
                                    class: "recent-date",
                                    {display_date(enrollment.enrollment_date.or(enrollment.created_at))}
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    let modal = match selected() {
        Some(course) => {
            let id = course.id;
            let pending = enrolling() == Some(id);
            let rating = rating_label(&course);
            rsx! {
                ModalOverlay {
                    on_close: move |_| selected.set(None),
                    title: course.title.clone(),
                    div {
                        class: "modal-body course-detail",
                        div {
                            class: "course-meta",
                            span { class: "badge", "{course.category}" }
                            span { "{course.duration} hrs" }
                            span { "{rating}" }
                        }
                        p { class: "modal-text", {course.display_description()} }
                        div {
                            class: "modal-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| selected.set(None),
                                "Close"
                            }
                            Button {
                                disabled: pending,
                                onclick: move |_| enroll(id),
                                if pending { "Enrolling..." } else { "Enroll Now" }
                            }
                        }
                    }
                }
            }
        }
        None => rsx! {},
    };

    rsx! {
        DashboardShell {
            role: Role::Student,
            title: "Student Dashboard",
            active: section(),
            on_select: move |s| section.set(s),
            {body}
            {modal}
        }
    }
}

#[component]
fn CourseCard(
    course: Course,
    pending: bool,
    on_view: EventHandler<Course>,
    on_enroll: EventHandler<i64>,
) -> Element {
    let id = course.id;
    let rating = rating_label(&course);
    let viewed = course.clone();

    rsx! {
        div {
            class: "course-card",
            div {
                class: "course-card-header",
                span { class: "badge", "{course.category}" }
                span { class: "course-rating", "{rating}" }
            }
            h3 { class: "course-title", "{course.title}" }
            p { class: "course-description", {course.display_description()} }
            span { class: "course-duration", "{course.duration} hrs" }
            div {
                class: "course-card-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_view.call(viewed.clone()),
                    "View Details"
                }
                Button {
                    disabled: pending,
                    onclick: move |_| on_enroll.call(id),
                    if pending { "Enrolling..." } else { "Enroll" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, title: &str) -> Course {
        Course {
            id,
            title: title.into(),
            description: String::new(),
            duration: 10,
            category: "Programming".into(),
            rating: None,
            created_at: None,
        }
    }

    fn enrollment(id: i64, course_id: i64) -> Enrollment {
        Enrollment {
            id,
            student_id: 1,
            course_id,
            student_name: None,
            student_email: None,
            course_title: String::new(),
            enrollment_date: None,
            created_at: None,
        }
    }

    #[test]
    fn test_available_excludes_enrolled() {
        let courses = vec![course(1, "Rust"), course(2, "Go"), course(3, "Zig")];
        let mine = vec![enrollment(10, 2)];
        let ids: Vec<i64> = available_courses(&courses, &mine).iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 3]);
        assert_eq!(available_courses(&courses, &[]).len(), 3);
    }

    #[test]
    fn test_rating_label_uses_default_rating() {
        assert_eq!(rating_label(&course(7, "Rust")), "\u{2605} 3.0");
        let mut rated = course(7, "Rust");
        rated.rating = Some(4.5);
        assert_eq!(rating_label(&rated), "\u{2605} 4.5");
    }

    #[test]
    fn test_enroll_refreshes_catalogue_and_enrollments() {
        assert!(ENROLL_SCOPES.contains(&scope::COURSES));
        assert!(ENROLL_SCOPES.contains(&scope::MY_ENROLLMENTS));
    }
}
