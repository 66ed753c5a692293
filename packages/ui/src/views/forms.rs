//! Create/edit forms for users and courses.
//!
//! Each form keeps a draft of raw text fields, validates it on submit, and hands
//! the draft to the owning dashboard, which decides which endpoint to call.

use api::{ApiError, UserService};
use dioxus::prelude::*;
use store::models::{CourseInput, StudentRegistration, TeacherRegistration, UserUpdate};
use store::{validate, Course, User};

use crate::components::{Button, ButtonVariant, Field, Label, TextArea};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserKind {
    Student,
    Teacher,
}

impl UserKind {
    pub fn label(&self) -> &'static str {
        match self {
            UserKind::Student => "Student",
            UserKind::Teacher => "Teacher",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            UserKind::Student => "student",
            UserKind::Teacher => "teacher",
        }
    }

    pub fn created_message(&self) -> String {
        format!("{} created successfully!", self.label())
    }

    pub fn updated_message(&self, name: &str) -> String {
        format!("{} {name} updated successfully!", self.label())
    }

    pub fn deleted_message(&self) -> String {
        format!("{} deleted successfully!", self.label())
    }

    pub fn failure_message(&self, verb: &str) -> String {
        format!("Failed to {verb} {}.", self.noun())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub specialization: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserDraft {
    /// Edit draft of an existing user; the password starts blank (unchanged).
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            specialization: user.specialization.clone().unwrap_or_default(),
        }
    }

    /// New accounts need a password; edits may leave it blank.
    pub fn validate(&self, editing: bool) -> Result<(), UserErrors> {
        let errors = UserErrors {
            name: validate::required(&self.name, "Name"),
            email: validate::email(&self.email),
            password: if editing {
                validate::optional_password(&self.password)
            } else {
                validate::password(&self.password)
            },
        };
        if errors == UserErrors::default() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_student_registration(&self) -> StudentRegistration {
        StudentRegistration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    pub fn to_teacher_registration(&self) -> TeacherRegistration {
        TeacherRegistration::new(
            self.name.trim().to_string(),
            self.email.trim().to_string(),
            self.password.clone(),
            &self.specialization,
        )
    }

    pub fn to_update(&self) -> UserUpdate {
        UserUpdate::new(
            self.name.trim().to_string(),
            self.email.trim().to_string(),
            &self.specialization,
            &self.password,
        )
    }
}

/// Create (`target == None`) or update a student or teacher.
pub async fn save_user(
    users: &UserService,
    kind: UserKind,
    target: Option<i64>,
    draft: &UserDraft,
) -> Result<(), ApiError> {
    match (kind, target) {
        (UserKind::Student, None) => users.register_student(&draft.to_student_registration()).await,
        (UserKind::Teacher, None) => users.register_teacher(&draft.to_teacher_registration()).await,
        (_, Some(id)) => users.update(id, &draft.to_update()).await,
    }
}

#[component]
pub fn UserForm(
    kind: UserKind,
    /// The user being edited; `None` creates a new one.
    initial: Option<User>,
    #[props(default)] busy: bool,
    on_submit: EventHandler<UserDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = initial.is_some();
    let start = initial.as_ref().map(UserDraft::from_user).unwrap_or_default();
    let mut name = use_signal(|| start.name.clone());
    let mut email = use_signal(|| start.email.clone());
    let mut password = use_signal(String::new);
    let mut specialization = use_signal(|| start.specialization.clone());
    let mut errors = use_signal(UserErrors::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = UserDraft {
            name: name(),
            email: email(),
            password: password(),
            specialization: specialization(),
        };
        match draft.validate(editing) {
            Ok(()) => {
                errors.set(UserErrors::default());
                on_submit.call(draft);
            }
            Err(e) => errors.set(e),
        }
    };

    let password_placeholder = if editing {
        "Leave blank to keep the current password"
    } else {
        "At least 6 characters"
    };
    let submit_label = match (editing, busy) {
        (_, true) => "Saving...",
        (true, false) => "Save Changes",
        (false, false) => "Create",
    };

    rsx! {
        form {
            class: "modal-body form-grid",
            onsubmit: handle_submit,
            Field {
                id: "user-name",
                label: "Name",
                value: name(),
                error: errors().name,
                oninput: move |v| name.set(v),
            }
            Field {
                id: "user-email",
                label: "Email",
                r#type: "email",
                value: email(),
                error: errors().email,
                oninput: move |v| email.set(v),
            }
            Field {
                id: "user-password",
                label: "Password",
                r#type: "password",
                placeholder: password_placeholder.to_string(),
                value: password(),
                error: errors().password,
                oninput: move |v| password.set(v),
            }
            if kind == UserKind::Teacher {
                Field {
                    id: "user-specialization",
                    label: "Specialization",
                    placeholder: "Optional",
                    value: specialization(),
                    oninput: move |v| specialization.set(v),
                }
            }
            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: busy,
                    "{submit_label}"
                }
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub category: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub category: Option<String>,
}

impl CourseDraft {
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
            duration: course.duration.to_string(),
            category: course.category.clone(),
        }
    }

    pub fn validate(&self) -> Result<CourseInput, CourseErrors> {
        let duration = validate::duration(&self.duration);
        let errors = CourseErrors {
            title: validate::required(&self.title, "Title"),
            description: validate::required(&self.description, "Description"),
            duration: duration.as_ref().err().cloned(),
            category: validate::required(&self.category, "Category"),
        };
        match duration {
            Ok(duration) if errors == CourseErrors::default() => Ok(CourseInput {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                duration,
                category: self.category.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

#[component]
pub fn CourseForm(
    initial: Option<Course>,
    #[props(default)] busy: bool,
    on_submit: EventHandler<CourseInput>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = initial.is_some();
    let start = initial.as_ref().map(CourseDraft::from_course).unwrap_or_default();
    let mut title = use_signal(|| start.title.clone());
    let mut description = use_signal(|| start.description.clone());
    let mut duration = use_signal(|| start.duration.clone());
    let mut category = use_signal(|| start.category.clone());
    let mut errors = use_signal(CourseErrors::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = CourseDraft {
            title: title(),
            description: description(),
            duration: duration(),
            category: category(),
        };
        match draft.validate() {
            Ok(input) => {
                errors.set(CourseErrors::default());
                on_submit.call(input);
            }
            Err(e) => errors.set(e),
        }
    };

    let submit_label = match (editing, busy) {
        (_, true) => "Saving...",
        (true, false) => "Save Changes",
        (false, false) => "Create Course",
    };

    rsx! {
        form {
            class: "modal-body form-grid",
            onsubmit: handle_submit,
            Field {
                id: "course-title",
                label: "Title",
                value: title(),
                error: errors().title,
                oninput: move |v| title.set(v),
            }
            div {
                class: "field",
                Label { html_for: "course-description", "Description" }
                TextArea {
                    id: "course-description",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
                if let Some(message) = errors().description {
                    p { class: "field-error", "{message}" }
                }
            }
            Field {
                id: "course-duration",
                label: "Duration (hours)",
                r#type: "number",
                value: duration(),
                error: errors().duration,
                oninput: move |v| duration.set(v),
            }
            Field {
                id: "course-category",
                label: "Category",
                value: category(),
                error: errors().category,
                oninput: move |v| category.set(v),
            }
            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: busy,
                    "{submit_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    fn draft() -> UserDraft {
        UserDraft {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            specialization: "  ".into(),
        }
    }

    #[test]
    fn test_new_user_needs_password() {
        let mut d = draft();
        d.password.clear();
        let errors = d.validate(false).unwrap_err();
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
        assert!(errors.name.is_none());
        assert!(d.validate(true).is_ok());
    }

    #[test]
    fn test_edit_rejects_short_password() {
        let mut d = draft();
        d.password = "abc".into();
        assert!(d.validate(true).unwrap_err().password.is_some());
    }

    #[test]
    fn test_payloads_trim_and_drop_blanks() {
        let d = draft();
        assert_eq!(d.to_student_registration().name, "Ada");
        assert_eq!(d.to_teacher_registration().specialization, None);

        let mut edit = d.clone();
        edit.password.clear();
        let update = edit.to_update();
        assert_eq!(update.password, None);
        assert_eq!(update.specialization, None);
    }

    #[test]
    fn test_from_user_keeps_specialization() {
        let user = User {
            id: 1,
            name: "Grace".into(),
            email: "grace@example.com".into(),
            role: Role::Teacher,
            specialization: Some("Compilers".into()),
            created_at: None,
        };
        let d = UserDraft::from_user(&user);
        assert_eq!(d.specialization, "Compilers");
        assert!(d.password.is_empty());
    }

    #[test]
    fn test_user_kind_messages() {
        assert_eq!(UserKind::Student.created_message(), "Student created successfully!");
        assert_eq!(
            UserKind::Teacher.updated_message("Grace"),
            "Teacher Grace updated successfully!"
        );
        assert_eq!(UserKind::Teacher.failure_message("delete"), "Failed to delete teacher.");
    }

    #[test]
    fn test_course_draft_validation() {
        let draft = CourseDraft {
            title: "Rust".into(),
            description: "Ownership and borrowing".into(),
            duration: "12".into(),
            category: "Programming".into(),
        };
        let input = draft.validate().unwrap();
        assert_eq!(input.duration, 12);

        let bad = CourseDraft {
            duration: "soon".into(),
            title: " ".into(),
            ..draft
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.duration.as_deref(), Some("Duration must be a number"));
        assert!(errors.category.is_none());
    }
}
