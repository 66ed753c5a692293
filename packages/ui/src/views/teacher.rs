//! Teacher dashboard: students, courses, recent additions and enrollments.
//!
//! Students and courses are paged and searched by the backend; the returned
//! page is sorted here. Enrollments are fetched whole and handled locally.

use api::ListParams;
use dioxus::prelude::*;
use store::local::{apply, sort_rows};
use store::models::{display_date, most_recent, CourseInput};
use store::query::scope;
use store::{Course, Enrollment, Role, TableState, User};

use super::dashboard::{DashboardShell, StatCard};
use super::forms::{save_user, CourseForm, UserDraft, UserForm, UserKind};
use super::modal_overlay::{ConfirmDialog, ModalOverlay};
use crate::components::{Button, ButtonVariant};
use crate::table::{page_parts, use_page_clamp, Column, GenericTable};
use crate::toast::{report, use_toasts, ToastLevel};
use crate::{use_config, use_query_client, use_services};

const RECENT_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    EditStudent(Option<User>),
    DeleteStudent(User),
    EditCourse(Option<Course>),
    DeleteCourse(Course),
    DeleteEnrollment(Enrollment),
}

/// What a confirmed delete removes, and what has to be refetched after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Removal {
    Student,
    Course,
    Enrollment,
}

impl Removal {
    fn scopes(&self) -> &'static [&'static str] {
        match self {
            Removal::Student => &[scope::STUDENTS],
            Removal::Course => &[scope::COURSES, scope::ENROLLMENTS],
            Removal::Enrollment => &[scope::ENROLLMENTS, scope::COURSES],
        }
    }

    fn success(&self) -> &'static str {
        match self {
            Removal::Student => "Student deleted.",
            Removal::Course => "Course deleted.",
            Removal::Enrollment => "Enrollment removed.",
        }
    }

    fn fallback(&self) -> &'static str {
        match self {
            Removal::Student => "Failed to delete student.",
            Removal::Course => "Failed to delete course.",
            Removal::Enrollment => "Failed to remove enrollment.",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            Removal::Student => "student",
            Removal::Course => "course",
            Removal::Enrollment => "enrollment",
        }
    }

    fn question(&self) -> String {
        format!("Are you sure you want to delete this {}?", self.noun())
    }
}

fn student_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id.to_string()),
        Column::new("name", "Name", |u: &User| u.name.clone()),
        Column::new("email", "Email", |u: &User| u.email.clone()),
    ]
}

fn course_columns() -> Vec<Column<Course>> {
    vec![
        Column::new("id", "ID", |c: &Course| c.id.to_string()),
        Column::new("title", "Title", |c: &Course| c.title.clone()),
        Column::new("category", "Category", |c: &Course| c.category.clone()),
        Column::new("duration", "Duration", |c: &Course| format!("{} hrs", c.duration)),
    ]
}

fn enrollment_columns() -> Vec<Column<Enrollment>> {
    vec![
        Column::new("id", "ID", |e: &Enrollment| e.id.to_string()),
        Column::new("studentName", "Student", |e: &Enrollment| {
            e.student_name.clone().unwrap_or_else(|| format!("Student #{}", e.student_id))
        }),
        Column::new("courseTitle", "Course", |e: &Enrollment| e.course_title.clone()),
        Column::new("enrollmentDate", "Enrolled", |e: &Enrollment| {
            display_date(e.enrollment_date.or(e.created_at))
        }),
    ]
}

#[component]
pub fn TeacherDashboard() -> Element {
    let config = use_config();
    let services = use_services();
    let mut query = use_query_client();
    let mut toasts = use_toasts();
    let page_size = config.table.page_size;

    let mut section = use_signal(|| "students".to_string());
    let mut student_table = use_signal(|| TableState::new("id", page_size));
    let mut course_table = use_signal(|| TableState::new("id", page_size));
    let mut enrollment_table = use_signal(|| TableState::new("id", page_size));
    let mut dialog = use_signal(|| None::<Dialog>);
    let mut busy = use_signal(|| false);

    let students = use_resource(move || async move {
        let _generation = query.read().generation(scope::STUDENTS);
        let params = ListParams::from_table_unsorted(&student_table.read());
        let users = services.read().users.clone();
        users.students(&params).await
    });
    let courses = use_resource(move || async move {
        let _generation = query.read().generation(scope::COURSES);
        let params = ListParams::from_table_unsorted(&course_table.read());
        let courses = services.read().courses.clone();
        courses.courses(&params).await
    });
    let enrollments = use_resource(move || async move {
        let _generation = query.read().generation(scope::ENROLLMENTS);
        let courses = services.read().courses.clone();
        courses.enrollments().await
    });

    let submit_student = move |(target, draft): (Option<User>, UserDraft)| {
        spawn(async move {
            busy.set(true);
            let users = services.read().users.clone();
            let target_id = target.as_ref().map(|u| u.id);
            let result = save_user(&users, UserKind::Student, target_id, &draft).await;
            busy.set(false);
            let (success, fallback) = match target_id {
                None => ("Student created successfully!", "Failed to create student."),
                Some(_) => ("Student updated successfully!", "Failed to update student."),
            };
            report(&mut toasts, &result, ToastLevel::Success, success, fallback);
            if query.write().settle(&result, &[scope::STUDENTS]) {
                dialog.set(None);
            }
        });
    };

    let submit_course = move |(target, input): (Option<i64>, CourseInput)| {
        spawn(async move {
            busy.set(true);
            let courses = services.read().courses.clone();
            let result = match target {
                None => courses.create_course(&input).await,
                Some(id) => courses.update_course(id, &input).await,
            };
            busy.set(false);
            let (success, fallback) = match target {
                None => ("Course created successfully!", "Failed to create course."),
                Some(_) => ("Course updated successfully!", "Failed to update course."),
            };
            report(&mut toasts, &result, ToastLevel::Success, success, fallback);
            if query.write().settle(&result, &[scope::COURSES]) {
                dialog.set(None);
            }
        });
    };

    let remove = move |(removal, id): (Removal, i64)| {
        spawn(async move {
            busy.set(true);
            let users = services.read().users.clone();
            let courses = services.read().courses.clone();
            let result = match removal {
                Removal::Student => users.delete(id).await,
                Removal::Course => courses.delete_course(id).await,
                Removal::Enrollment => courses.delete_enrollment(id).await,
            };
            busy.set(false);
            report(&mut toasts, &result, ToastLevel::Info, removal.success(), removal.fallback());
            query.write().settle(&result, removal.scopes());
            dialog.set(None);
        });
    };

    let student_actions = use_callback(move |user: User| {
        let edit_target = user.clone();
        rsx! {
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| dialog.set(Some(Dialog::EditStudent(Some(edit_target.clone())))),
                "Edit"
            }
            Button {
                variant: ButtonVariant::Destructive,
                onclick: move |_| dialog.set(Some(Dialog::DeleteStudent(user.clone()))),
                "Delete"
            }
        }
    });
    let course_actions = use_callback(move |course: Course| {
        let edit_target = course.clone();
        rsx! {
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| dialog.set(Some(Dialog::EditCourse(Some(edit_target.clone())))),
                "Edit"
            }
            Button {
                variant: ButtonVariant::Destructive,
                onclick: move |_| dialog.set(Some(Dialog::DeleteCourse(course.clone()))),
                "Delete"
            }
        }
    });
    let enrollment_actions = use_callback(move |enrollment: Enrollment| {
        rsx! {
            Button {
                variant: ButtonVariant::Destructive,
                onclick: move |_| dialog.set(Some(Dialog::DeleteEnrollment(enrollment.clone()))),
                "Remove"
            }
        }
    });

    let (mut student_rows, student_total, students_loading) = page_parts(&*students.read());
    sort_rows(&mut student_rows, &student_table.read().sort);
    let (mut course_rows, course_total, courses_loading) = page_parts(&*courses.read());
    sort_rows(&mut course_rows, &course_table.read().sort);
    let (all_enrollments, _, enrollments_loading) = page_parts(&*enrollments.read());
    let enrollment_page = apply(&all_enrollments, &enrollment_table.read());
    use_page_clamp(student_table, student_total, students_loading);
    use_page_clamp(course_table, course_total, courses_loading);
    use_page_clamp(enrollment_table, enrollment_page.total, enrollments_loading);

    let body = match section().as_str() {
        "courses" => rsx! {
            h2 { class: "section-title", "Courses" }
            GenericTable::<Course> {
                columns: course_columns(),
                rows: course_rows,
                total: course_total,
                state: course_table(),
                loading: courses_loading,
                search_placeholder: "Search courses...",
                on_search: move |q| course_table.write().set_search(q),
                on_sort: move |f: String| course_table.write().toggle_sort(&f),
                on_page: move |p| course_table.write().set_page(p),
                create_label: "Add Course",
                on_create: move |_| dialog.set(Some(Dialog::EditCourse(None))),
                actions: course_actions,
                empty_message: "No courses found",
            }
        },
        "recent" => {
            let newest_students = most_recent(&student_rows, |u| u.created_at, RECENT_LIMIT);
            let newest_courses = most_recent(&course_rows, |c| c.created_at, RECENT_LIMIT);
            rsx! {
                h2 { class: "section-title", "Recent Activity" }
                div {
                    class: "stat-grid",
                    StatCard { label: "Students", value: student_total.to_string() }
                    StatCard { label: "Courses", value: course_total.to_string() }
                    StatCard { label: "Enrollments", value: all_enrollments.len().to_string() }
                }
                div {
                    class: "panel-grid",
                    div {
                        class: "panel",
                        h3 { "Recently Added Students" }
                        if newest_students.is_empty() {
                            p { class: "panel-empty", "No recent students" }
                        }
                        ul {
                            class: "recent-list",
                            for user in newest_students {
                                li {
                                    key: "{user.id}",
                                    div {
                                        strong { "{user.name}" }
                                        span { class: "recent-email", "{user.email}" }
                                    }
                                    span { class: "recent-date", {display_date(user.created_at)} }
                                }
                            }
                        }
                    }
                    div {
                        class: "panel",
                        h3 { "Recently Added Courses" }
                        if newest_courses.is_empty() {
                            p { class: "panel-empty", "No recent courses" }
                        }
                        ul {
                            class: "recent-list",
                            for course in newest_courses {
                                li {
                                    key: "{course.id}",
                                    div {
                                        strong { "{course.title}" }
                                        span { class: "recent-email", "{course.category}" }
                                    }
                                    span { class: "recent-date", {display_date(course.created_at)} }
                                }
                            }
                        }
                    }
                }
            }
        }
        "enrollments" => rsx! {
            h2 { class: "section-title", "Enrollments" }
            GenericTable::<Enrollment> {
                columns: enrollment_columns(),
                rows: enrollment_page.items,
                total: enrollment_page.total,
                state: enrollment_table(),
                loading: enrollments_loading,
                search_placeholder: "Search by student or course...",
                on_search: move |q| enrollment_table.write().set_search(q),
                on_sort: move |f: String| enrollment_table.write().toggle_sort(&f),
                on_page: move |p| enrollment_table.write().set_page(p),
                actions: enrollment_actions,
                empty_message: "No enrollments found",
            }
        },
        _ => rsx! {
            h2 { class: "section-title", "Students" }
            GenericTable::<User> {
                columns: student_columns(),
                rows: student_rows,
                total: student_total,
                state: student_table(),
                loading: students_loading,
                search_placeholder: "Search students...",
                on_search: move |q| student_table.write().set_search(q),
                on_sort: move |f: String| student_table.write().toggle_sort(&f),
                on_page: move |p| student_table.write().set_page(p),
                create_label: "Add Student",
                on_create: move |_| dialog.set(Some(Dialog::EditStudent(None))),
                actions: student_actions,
                empty_message: "No students found",
            }
        },
    };

    let modal = match dialog() {
        Some(Dialog::EditStudent(target)) => {
            let title = if target.is_some() { "Edit Student" } else { "Add Student" }.to_string();
            let form_key = target.as_ref().map(|u| u.id).unwrap_or_default();
            let submit_target = target.clone();
            rsx! {
                ModalOverlay {
                    on_close: move |_| dialog.set(None),
                    title,
                    UserForm {
                        key: "{form_key}",
                        kind: UserKind::Student,
                        initial: target,
                        busy: busy(),
                        on_submit: move |draft| submit_student((submit_target.clone(), draft)),
                        on_cancel: move |_| dialog.set(None),
                    }
                }
            }
        }
        Some(Dialog::EditCourse(target)) => {
            let title = if target.is_some() { "Edit Course" } else { "Add Course" }.to_string();
            let target_id = target.as_ref().map(|c| c.id);
            let form_key = target_id.unwrap_or_default();
            rsx! {
                ModalOverlay {
                    on_close: move |_| dialog.set(None),
                    title,
                    CourseForm {
                        key: "{form_key}",
                        initial: target,
                        busy: busy(),
                        on_submit: move |input| submit_course((target_id, input)),
                        on_cancel: move |_| dialog.set(None),
                    }
                }
            }
        }
        Some(Dialog::DeleteStudent(user)) => confirm(Removal::Student, user.id, busy(), remove, dialog),
        Some(Dialog::DeleteCourse(course)) => confirm(Removal::Course, course.id, busy(), remove, dialog),
        Some(Dialog::DeleteEnrollment(enrollment)) => {
            confirm(Removal::Enrollment, enrollment.id, busy(), remove, dialog)
        }
        None => rsx! {},
    };

    rsx! {
        DashboardShell {
            role: Role::Teacher,
            title: "Teacher Dashboard",
            active: section(),
            on_select: move |s| section.set(s),
            {body}
            {modal}
        }
    }
}

fn confirm(
    removal: Removal,
    id: i64,
    busy: bool,
    mut remove: impl FnMut((Removal, i64)) + 'static,
    mut dialog: Signal<Option<Dialog>>,
) -> Element {
    let title = format!("Delete {}", removal.noun());
    rsx! {
        ConfirmDialog {
            title,
            message: removal.question(),
            busy,
            on_confirm: move |_| remove((removal, id)),
            on_cancel: move |_| dialog.set(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_delete_refreshes_enrollments() {
        assert_eq!(Removal::Course.scopes(), &[scope::COURSES, scope::ENROLLMENTS]);
        assert!(Removal::Enrollment.scopes().contains(&scope::COURSES));
        assert_eq!(Removal::Student.scopes(), &[scope::STUDENTS]);
    }

    #[test]
    fn test_removal_wording() {
        assert_eq!(
            Removal::Enrollment.question(),
            "Are you sure you want to delete this enrollment?"
        );
        assert_eq!(Removal::Course.success(), "Course deleted.");
        assert_eq!(Removal::Student.fallback(), "Failed to delete student.");
    }

    #[test]
    fn test_enrollment_student_falls_back_to_id() {
        let enrollment = Enrollment {
            id: 4,
            student_id: 12,
            course_id: 3,
            student_name: None,
            student_email: None,
            course_title: "Rust".into(),
            enrollment_date: None,
            created_at: None,
        };
        let columns = enrollment_columns();
        assert_eq!((columns[1].cell)(&enrollment), "Student #12");
        assert_eq!((columns[3].cell)(&enrollment), "-");
    }
}
