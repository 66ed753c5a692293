//! User service: authentication, registration, user administration and user
//! analytics.

use store::models::{
    LoginRequest, LoginResponse, Page, StudentRegistration, TeacherRegistration, User,
    UserAnalytics, UserUpdate,
};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::params::ListParams;

#[derive(Clone, Debug)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Sign in; the backend sets the session cookie and returns the user.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let response: LoginResponse = self.client.post("/users/login", request).await?;
        Ok(response.user)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.post_unit("/users/logout", &serde_json::json!({})).await
    }

    /// The user behind the current session cookie.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.client.get("/users/me/info", &[]).await
    }

    pub async fn register_student(&self, registration: &StudentRegistration) -> Result<(), ApiError> {
        self.client.post_unit("/users/register/student", registration).await
    }

    pub async fn register_teacher(&self, registration: &TeacherRegistration) -> Result<(), ApiError> {
        self.client.post_unit("/users/register/teacher", registration).await
    }

    pub async fn students(&self, params: &ListParams) -> Result<Page<User>, ApiError> {
        self.client.get("/users/students", &params.to_query()).await
    }

    pub async fn teachers(&self, params: &ListParams) -> Result<Page<User>, ApiError> {
        self.client.get("/users/teachers", &params.to_query()).await
    }

    pub async fn user(&self, id: i64) -> Result<User, ApiError> {
        self.client.get(&format!("/users/{id}"), &[]).await
    }

    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<(), ApiError> {
        self.client.put(&format!("/users/{id}"), update).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/users/{id}")).await
    }

    pub async fn analytics(&self) -> Result<UserAnalytics, ApiError> {
        self.client.get("/users/analytics", &[]).await
    }
}
