//! Course service: courses, enrollments and course analytics.

use store::models::{Course, CourseAnalytics, CourseInput, Enrollment, EnrollmentRequest, Page};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::params::ListParams;

#[derive(Clone, Debug)]
pub struct CourseService {
    client: ApiClient,
    analytics_key: String,
}

impl CourseService {
    pub fn new(client: ApiClient, analytics_key: impl Into<String>) -> Self {
        Self {
            client,
            analytics_key: analytics_key.into(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn courses(&self, params: &ListParams) -> Result<Page<Course>, ApiError> {
        self.client.get("/courses", &params.to_query()).await
    }

    pub async fn course(&self, id: i64) -> Result<Course, ApiError> {
        self.client.get(&format!("/courses/{id}"), &[]).await
    }

    pub async fn create_course(&self, input: &CourseInput) -> Result<(), ApiError> {
        self.client.post_unit("/courses", input).await
    }

    pub async fn update_course(&self, id: i64, input: &CourseInput) -> Result<(), ApiError> {
        self.client.put(&format!("/courses/{id}"), input).await
    }

    pub async fn delete_course(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/courses/{id}")).await
    }

    pub async fn analytics(&self) -> Result<CourseAnalytics, ApiError> {
        self.client
            .get("/analytics", &[("apiKey", self.analytics_key.clone())])
            .await
    }

    pub async fn enrollments(&self) -> Result<Page<Enrollment>, ApiError> {
        self.client.get("/enrollments", &[]).await
    }

    pub async fn enrollment(&self, id: i64) -> Result<Enrollment, ApiError> {
        self.client.get(&format!("/enrollments/{id}"), &[]).await
    }

    /// Enrollments of the signed-in student.
    pub async fn my_enrollments(&self) -> Result<Page<Enrollment>, ApiError> {
        self.client.get("/enrollments/my", &[]).await
    }

    pub async fn enroll(&self, course_id: i64) -> Result<(), ApiError> {
        self.client
            .post_unit("/enrollments", &EnrollmentRequest { course_id })
            .await
    }

    pub async fn update_enrollment(&self, id: i64, request: &EnrollmentRequest) -> Result<(), ApiError> {
        self.client.put(&format!("/enrollments/{id}"), request).await
    }

    pub async fn delete_enrollment(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/enrollments/{id}")).await
    }
}
