//! # Domain models shared by the API client and the UI
//!
//! Plain records mirrored from the two backends. They are `Serialize +
//! Deserialize` with camelCase field names so they can be decoded straight from
//! the REST responses and persisted as JSON in browser storage.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A student, teacher or admin account. The [`Role`] picks the dashboard. |
//! | [`Course`] | A course offered by the course service. |
//! | [`Enrollment`] | Join record linking a student to a course, with denormalised display names. |
//! | [`Page`] | A list envelope (`items` + `total`) normalised from the several shapes the backends return. |
//! | [`UserAnalytics`] / [`CourseAnalytics`] | Summary counters for the admin dashboard. |
//!
//! The request payloads ([`LoginRequest`], [`StudentRegistration`], ...) live here
//! too so that forms in the UI can build them without depending on the HTTP layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Account role, lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Title used by the sidebar header ("Student Panel").
    pub fn title(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as returned by the user service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A course as returned by the course service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Course {
    /// Rating shown to students; courses without one get a stable 1..=5 value.
    pub fn display_rating(&self) -> f64 {
        self.rating
            .unwrap_or_else(|| (self.id.rem_euclid(5) + 1) as f64)
    }

    /// Description shown to students, with a placeholder for empty ones.
    pub fn display_description(&self) -> &str {
        if self.description.trim().is_empty() {
            "This course offers an exciting introduction to the subject matter."
        } else {
            &self.description
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct NestedStudent {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct NestedCourse {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnrollment {
    id: i64,
    #[serde(default)]
    student_id: i64,
    course_id: i64,
    #[serde(default)]
    student_name: Option<String>,
    #[serde(default)]
    student_email: Option<String>,
    #[serde(default)]
    course_title: Option<String>,
    #[serde(default)]
    student: Option<NestedStudent>,
    #[serde(default)]
    course: Option<NestedCourse>,
    #[serde(default)]
    enrollment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

/// An enrollment with its display fields flattened.
///
/// The course service sometimes nests the student and course (`student.name`,
/// `course.title`) and sometimes sends them flat (`studentName`,
/// `courseTitle`); both decode into the flat form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub course_title: String,
    pub enrollment_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl<'de> Deserialize<'de> for Enrollment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnrollment::deserialize(deserializer)?;
        let nested_student = raw.student.unwrap_or_default();
        Ok(Enrollment {
            id: raw.id,
            student_id: raw.student_id,
            course_id: raw.course_id,
            student_name: raw.student_name.or(nested_student.name),
            student_email: raw.student_email.or(nested_student.email),
            course_title: raw
                .course_title
                .or(raw.course.and_then(|c| c.title))
                .unwrap_or_default(),
            enrollment_date: raw.enrollment_date,
            created_at: raw.created_at,
        })
    }
}

/// A page of results plus the total number of matching items.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPage<T> {
    Bare(Vec<T>),
    Envelope {
        #[serde(alias = "users", alias = "courses", alias = "data")]
        items: Vec<T>,
        #[serde(default)]
        total: Option<u64>,
    },
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawPage::deserialize(deserializer)? {
            RawPage::Bare(items) => Page {
                total: items.len() as u64,
                items,
            },
            RawPage::Envelope { items, total } => Page {
                total: total.unwrap_or(items.len() as u64),
                items,
            },
        })
    }
}

/// User counters from `GET /users/analytics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnalytics {
    #[serde(default)]
    pub total_students: u64,
    #[serde(default)]
    pub total_teachers: u64,
}

/// Enrollment count for one course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCount {
    pub course_title: String,
    #[serde(deserialize_with = "count_from_any")]
    pub count: u64,
}

/// Enrollment count for one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    #[serde(deserialize_with = "count_from_any")]
    pub count: u64,
}

/// Course counters from `GET /analytics?apiKey=`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAnalytics {
    #[serde(default)]
    pub total_courses: u64,
    #[serde(default)]
    pub total_enrollments: u64,
    #[serde(default)]
    pub enrollments_by_course: Vec<CourseCount>,
    #[serde(default)]
    pub enrollments_by_category: Vec<CategoryCount>,
}

/// Aggregate SQL counts come back as strings from the course service.
fn count_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

impl TeacherRegistration {
    /// Build a registration, dropping a blank specialization.
    pub fn new(name: String, email: String, password: String, specialization: &str) -> Self {
        Self {
            name,
            email,
            password,
            specialization: non_blank(specialization),
        }
    }
}

/// Body of `PUT /users/:id`.
///
/// Blank passwords and specializations are left out so the backend keeps the
/// stored values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn new(name: String, email: String, specialization: &str, password: &str) -> Self {
        Self {
            name,
            email,
            specialization: non_blank(specialization),
            password: non_blank(password),
        }
    }
}

/// Body of `POST /courses` and `PUT /courses/:id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseInput {
    pub title: String,
    pub description: String,
    pub duration: u32,
    pub category: String,
}

impl From<&Course> for CourseInput {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone(),
            duration: course.duration,
            category: course.category.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub course_id: i64,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Calendar date shown in tables and lists, `-` when unknown.
pub fn display_date(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|ts| ts.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// The `limit` newest items by `created_at`; items without a timestamp are skipped.
pub fn most_recent<T: Clone>(
    items: &[T],
    created_at: impl Fn(&T) -> Option<DateTime<Utc>>,
    limit: usize,
) -> Vec<T> {
    let mut dated: Vec<(DateTime<Utc>, &T)> = items
        .iter()
        .filter_map(|item| created_at(item).map(|ts| (ts, item)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().take(limit).map(|(_, item)| item.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_date() {
        let ts = "2024-03-05T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(display_date(Some(ts)), "Mar 05, 2024");
        assert_eq!(display_date(None), "-");
    }

    #[test]
    fn test_user_page_from_users_envelope() {
        let body = json!({
            "users": [
                {"id": 1, "name": "Ada", "email": "ada@example.com", "role": "student",
                 "createdAt": "2024-03-01T10:00:00.000Z"}
            ],
            "total": 42
        });
        let page: Page<User> = serde_json::from_value(body).unwrap();
        assert_eq!(page.total, 42);
        assert_eq!(page.items[0].role, Role::Student);
        assert!(page.items[0].created_at.is_some());
    }

    #[test]
    fn test_course_page_from_data_envelope_and_bare_array() {
        let enveloped: Page<Course> = serde_json::from_value(json!({
            "data": [{"id": 3, "title": "Rust", "description": "", "duration": 4, "category": "dev"}],
            "total": 7
        }))
        .unwrap();
        assert_eq!(enveloped.total, 7);

        let bare: Page<Course> = serde_json::from_value(json!([
            {"id": 1, "title": "A"}, {"id": 2, "title": "B"}
        ]))
        .unwrap();
        assert_eq!(bare.total, 2);
        assert_eq!(bare.items[1].title, "B");
    }

    #[test]
    fn test_enrollment_accepts_nested_names() {
        let nested: Enrollment = serde_json::from_value(json!({
            "id": 9, "studentId": 2, "courseId": 5,
            "student": {"name": "Grace", "email": "g@example.com"},
            "course": {"title": "Compilers"}
        }))
        .unwrap();
        assert_eq!(nested.student_name.as_deref(), Some("Grace"));
        assert_eq!(nested.course_title, "Compilers");

        let flat: Enrollment = serde_json::from_value(json!({
            "id": 10, "courseId": 5, "courseTitle": "Compilers"
        }))
        .unwrap();
        assert_eq!(flat.course_title, "Compilers");
        assert_eq!(flat.student_id, 0);
    }

    #[test]
    fn test_course_analytics_counts_from_strings() {
        let analytics: CourseAnalytics = serde_json::from_value(json!({
            "totalCourses": 3,
            "totalEnrollments": 11,
            "enrollmentsByCourse": [{"courseTitle": "Rust", "count": "8"}],
            "enrollmentsByCategory": [{"category": "dev", "count": 3}]
        }))
        .unwrap();
        assert_eq!(analytics.enrollments_by_course[0].count, 8);
        assert_eq!(analytics.enrollments_by_category[0].count, 3);
    }

    #[test]
    fn test_user_update_omits_blank_fields() {
        let update = UserUpdate::new("Ada".into(), "ada@example.com".into(), "  ", "");
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, json!({"name": "Ada", "email": "ada@example.com"}));

        let update = UserUpdate::new("Ada".into(), "ada@example.com".into(), "Math", "secret1");
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["specialization"], "Math");
        assert_eq!(body["password"], "secret1");
    }

    #[test]
    fn test_course_display_defaults() {
        let course = Course {
            id: 7,
            title: "Rust".into(),
            description: String::new(),
            duration: 1,
            category: "dev".into(),
            rating: None,
            created_at: None,
        };
        assert_eq!(course.display_rating(), 3.0);
        assert!(course.display_description().starts_with("This course"));
    }

    #[test]
    fn test_most_recent_skips_undated_and_orders_newest_first() {
        let users: Vec<User> = serde_json::from_value(json!([
            {"id": 1, "name": "a", "email": "a@x", "role": "student", "createdAt": "2024-01-01T00:00:00Z"},
            {"id": 2, "name": "b", "email": "b@x", "role": "student"},
            {"id": 3, "name": "c", "email": "c@x", "role": "student", "createdAt": "2024-06-01T00:00:00Z"}
        ]))
        .unwrap();
        let recent = most_recent(&users, |u| u.created_at, 5);
        let ids: Vec<i64> = recent.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
