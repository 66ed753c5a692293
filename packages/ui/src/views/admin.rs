//! Admin dashboard: platform analytics plus teacher and student management.

use api::ListParams;
use dioxus::prelude::*;
use store::models::{display_date, CategoryCount, CourseCount};
use store::query::scope;
use store::{Role, TableState, User};

use super::dashboard::{DashboardShell, StatCard, LOADING_VALUE};
use super::forms::{save_user, UserDraft, UserForm, UserKind};
use super::modal_overlay::{ConfirmDialog, ModalOverlay};
use crate::components::{Button, ButtonVariant};
use crate::table::{page_parts, use_page_clamp, Column, GenericTable};
use crate::toast::{report, use_toasts, ToastLevel};
use crate::{use_config, use_query_client, use_services};

/// Number of users in each "recently added" list.
const RECENT_LIMIT: u32 = 5;

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Edit(UserKind, Option<User>),
    Delete(UserKind, User),
}

fn user_scopes(kind: UserKind) -> &'static [&'static str] {
    match kind {
        UserKind::Student => &[scope::STUDENTS, scope::ANALYTICS, scope::RECENT_USERS],
        UserKind::Teacher => &[scope::TEACHERS, scope::ANALYTICS, scope::RECENT_USERS],
    }
}

/// Bar width in percent of the largest count.
fn share(count: u64, max: u64) -> u64 {
    if max == 0 {
        0
    } else {
        (count * 100 / max).min(100)
    }
}

fn teacher_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id.to_string()),
        Column::new("name", "Name", |u: &User| u.name.clone()),
        Column::new("email", "Email", |u: &User| u.email.clone()),
        Column::new("specialization", "Specialization", |u: &User| {
            u.specialization.clone().unwrap_or_else(|| "-".to_string())
        }),
        Column::new("createdAt", "Joined", |u: &User| display_date(u.created_at)),
    ]
}

fn student_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", |u: &User| u.id.to_string()),
        Column::new("name", "Name", |u: &User| u.name.clone()),
        Column::new("email", "Email", |u: &User| u.email.clone()),
        Column::new("createdAt", "Joined", |u: &User| display_date(u.created_at)),
    ]
}

#[component]
pub fn AdminDashboard() -> Element {
    let config = use_config();
    let services = use_services();
    let mut query = use_query_client();
    let mut toasts = use_toasts();
    let page_size = config.table.page_size;

    let mut section = use_signal(|| "analytics".to_string());
    let mut teacher_table = use_signal(|| TableState::new("name", page_size));
    let mut student_table = use_signal(|| TableState::new("name", page_size));
    let mut dialog = use_signal(|| None::<Dialog>);
    let mut busy = use_signal(|| false);

    let user_analytics = use_resource(move || async move {
        let _generation = query.read().generation(scope::ANALYTICS);
        let users = services.read().users.clone();
        users.analytics().await
    });
    let course_analytics = use_resource(move || async move {
        let _generation = query.read().generation(scope::ANALYTICS);
        let courses = services.read().courses.clone();
        courses.analytics().await
    });
    let recent_students = use_resource(move || async move {
        let _generation = query.read().generation(scope::RECENT_USERS);
        let users = services.read().users.clone();
        users.students(&ListParams::recent(RECENT_LIMIT)).await
    });
    let recent_teachers = use_resource(move || async move {
        let _generation = query.read().generation(scope::RECENT_USERS);
        let users = services.read().users.clone();
        users.teachers(&ListParams::recent(RECENT_LIMIT)).await
    });
    let teachers = use_resource(move || async move {
        let _generation = query.read().generation(scope::TEACHERS);
        let params = ListParams::from_table(&teacher_table.read());
        let users = services.read().users.clone();
        users.teachers(&params).await
    });
    let students = use_resource(move || async move {
        let _generation = query.read().generation(scope::STUDENTS);
        let params = ListParams::from_table(&student_table.read());
        let users = services.read().users.clone();
        users.students(&params).await
    });

    let submit_user = move |(kind, target, draft): (UserKind, Option<i64>, UserDraft)| {
        spawn(async move {
            busy.set(true);
            let users = services.read().users.clone();
            let result = save_user(&users, kind, target, &draft).await;
            busy.set(false);
            let success = match target {
                None => kind.created_message(),
                Some(_) => kind.updated_message(draft.name.trim()),
            };
            let verb = if target.is_some() { "update" } else { "create" };
            report(&mut toasts, &result, ToastLevel::Success, &success, &kind.failure_message(verb));
            if query.write().settle(&result, user_scopes(kind)) {
                dialog.set(None);
            }
        });
    };

    let delete_user = move |(kind, user): (UserKind, User)| {
        spawn(async move {
            busy.set(true);
            let users = services.read().users.clone();
            let result = users.delete(user.id).await;
            busy.set(false);
            report(
                &mut toasts,
                &result,
                ToastLevel::Success,
                &kind.deleted_message(),
                &kind.failure_message("delete"),
            );
            query.write().settle(&result, user_scopes(kind));
            dialog.set(None);
        });
    };

    let user_actions = move |kind: UserKind| {
        move |user: User| {
            let edit_target = user.clone();
            rsx! {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| dialog.set(Some(Dialog::Edit(kind, Some(edit_target.clone())))),
                    "Edit"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| dialog.set(Some(Dialog::Delete(kind, user.clone()))),
                    "Delete"
                }
            }
        }
    };
    let teacher_actions = use_callback(user_actions(UserKind::Teacher));
    let student_actions = use_callback(user_actions(UserKind::Student));

    let (teacher_rows, teacher_total, teachers_loading) = page_parts(&*teachers.read());
    let (student_rows, student_total, students_loading) = page_parts(&*students.read());
    use_page_clamp(teacher_table, teacher_total, teachers_loading);
    use_page_clamp(student_table, student_total, students_loading);
    let user_stats = match &*user_analytics.read() {
        Some(Ok(stats)) => Some(stats.clone()),
        _ => None,
    };
    let course_stats = match &*course_analytics.read() {
        Some(Ok(stats)) => Some(stats.clone()),
        _ => None,
    };
    let newest_students = page_parts(&*recent_students.read()).0;
    let newest_teachers = page_parts(&*recent_teachers.read()).0;

    let body = match section().as_str() {
        "manage_teachers" => rsx! {
            h2 { class: "section-title", "Manage Teachers" }
            GenericTable::<User> {
                columns: teacher_columns(),
                rows: teacher_rows,
                total: teacher_total,
                state: teacher_table(),
                loading: teachers_loading,
                search_placeholder: "Search teachers...",
                on_search: move |q| teacher_table.write().set_search(q),
                on_sort: move |f: String| teacher_table.write().toggle_sort(&f),
                on_page: move |p| teacher_table.write().set_page(p),
                create_label: "Add Teacher",
                on_create: move |_| dialog.set(Some(Dialog::Edit(UserKind::Teacher, None))),
                actions: teacher_actions,
                empty_message: "No teachers found",
            }
        },
        "manage_students" => rsx! {
            h2 { class: "section-title", "Manage Students" }
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
                on_create: move |_| dialog.set(Some(Dialog::Edit(UserKind::Student, None))),
                actions: student_actions,
                empty_message: "No students found",
            }
        },
        _ => rsx! {
            AnalyticsOverview {
                user_analytics: user_stats,
                course_analytics: course_stats,
                recent_students: newest_students,
                recent_teachers: newest_teachers,
            }
        },
    };

    let modal = match dialog() {
        Some(Dialog::Edit(kind, target)) => {
            let title = match target {
                Some(_) => format!("Edit {}", kind.label()),
                None => format!("Add {}", kind.label()),
            };
            let target_id = target.as_ref().map(|u| u.id);
            let form_key = target_id.unwrap_or_default();
            rsx! {
                ModalOverlay {
                    on_close: move |_| dialog.set(None),
                    title,
                    UserForm {
                        key: "{form_key}",
                        kind,
                        initial: target,
                        busy: busy(),
                        on_submit: move |draft| submit_user((kind, target_id, draft)),
                        on_cancel: move |_| dialog.set(None),
                    }
                }
            }
        }
        Some(Dialog::Delete(kind, user)) => {
            let title = format!("Delete {}", kind.label());
            let message = format!("Are you sure you want to delete {}? This cannot be undone.", user.name);
            rsx! {
                ConfirmDialog {
                    title,
                    message,
                    busy: busy(),
                    on_confirm: move |_| delete_user((kind, user.clone())),
                    on_cancel: move |_| dialog.set(None),
                }
            }
        }
        None => rsx! {},
    };

    rsx! {
        DashboardShell {
            role: Role::Admin,
            title: "Admin Dashboard",
            active: section(),
            on_select: move |s| section.set(s),
            {body}
            {modal}
        }
    }
}

#[component]
fn AnalyticsOverview(
    user_analytics: Option<store::UserAnalytics>,
    course_analytics: Option<store::CourseAnalytics>,
    recent_students: Vec<User>,
    recent_teachers: Vec<User>,
) -> Element {
    let count = |n: Option<u64>| n.map(|n| n.to_string()).unwrap_or_else(|| LOADING_VALUE.to_string());
    let students = user_analytics.as_ref().map(|a| a.total_students);
    let teachers = user_analytics.as_ref().map(|a| a.total_teachers);
    let courses = course_analytics.as_ref().map(|a| a.total_courses);
    let enrollments = course_analytics.as_ref().map(|a| a.total_enrollments);

    let by_category: Vec<CategoryCount> = course_analytics
        .as_ref()
        .map(|a| a.enrollments_by_category.clone())
        .unwrap_or_default();
    let by_course: Vec<CourseCount> = course_analytics
        .as_ref()
        .map(|a| a.enrollments_by_course.clone())
        .unwrap_or_default();
    let category_max = by_category.iter().map(|c| c.count).max().unwrap_or(0);
    let course_max = by_course.iter().map(|c| c.count).max().unwrap_or(0);
    let users_max = students.unwrap_or(0).max(teachers.unwrap_or(0));

    rsx! {
        div {
            class: "stat-grid",
            StatCard { label: "Total Students", value: count(students) }
            StatCard { label: "Total Teachers", value: count(teachers) }
            StatCard { label: "Total Courses", value: count(courses) }
            StatCard { label: "Total Enrollments", value: count(enrollments) }
        }

        div {
            class: "panel-grid",
            div {
                class: "panel",
                h3 { "Users Overview" }
                BarRow { label: "Students", count: students.unwrap_or(0), max: users_max }
                BarRow { label: "Teachers", count: teachers.unwrap_or(0), max: users_max }
            }
            div {
                class: "panel",
                h3 { "Enrollments by Category" }
                if by_category.is_empty() {
                    p { class: "panel-empty", "No enrollments yet" }
                }
                for entry in by_category {
                    BarRow {
                        key: "{entry.category}",
                        label: entry.category.clone(),
                        count: entry.count,
                        max: category_max,
                    }
                }
            }
            div {
                class: "panel",
                h3 { "Top Enrollments by Course" }
                if by_course.is_empty() {
                    p { class: "panel-empty", "No enrollments yet" }
                }
                for entry in by_course {
                    BarRow {
                        key: "{entry.course_title}",
                        label: entry.course_title.clone(),
                        count: entry.count,
                        max: course_max,
                    }
                }
            }
        }

        div {
            class: "panel-grid",
            RecentUsers { title: "Recently Added Students", users: recent_students }
            RecentUsers { title: "Recently Added Teachers", users: recent_teachers }
        }
    }
}

#[component]
fn BarRow(label: String, count: u64, max: u64) -> Element {
    let width = share(count, max);
    rsx! {
        div {
            class: "bar-row",
            span { class: "bar-label", "{label}" }
            div {
                class: "bar-track",
                div { class: "bar-fill", style: "width: {width}%" }
            }
            span { class: "bar-count", "{count}" }
        }
    }
}

#[component]
fn RecentUsers(title: String, users: Vec<User>) -> Element {
    rsx! {
        div {
            class: "panel",
            h3 { "{title}" }
            if users.is_empty() {
                p { class: "panel-empty", "Nobody yet" }
            }
            ul {
                class: "recent-list",
                for user in users {
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
    }
}
