//! # HTTP client for one backend service
//!
//! [`ApiClient`] wraps a `reqwest::Client` with a base URL and a label used in
//! log lines. Every request is logged before it is sent (`GET /users/students`)
//! and every outcome after (`/users/students 200`, or the failure), which is what
//! shows up in the browser console during development.
//!
//! Requests always carry `Accept: application/json`; bodies are JSON. On wasm the
//! fetch is made with `credentials: include` so the session cookie set by the
//! user service travels with every call, including cross-origin ones to the
//! course service.

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    label: &'static str,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, label: &'static str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            label,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let body = self
            .execute(Method::GET, path, self.request(Method::GET, path).query(query))
            .await?;
        decode(&body)
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self
            .execute(Method::POST, path, self.request(Method::POST, path).json(body))
            .await?;
        decode(&text)
    }

    /// POST whose response body is not needed.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.post::<B, IgnoredAny>(path, body).await.map(|_| ())
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let text = self
            .execute(Method::PUT, path, self.request(Method::PUT, path).json(body))
            .await?;
        decode::<IgnoredAny>(&text).map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let text = self
            .execute(Method::DELETE, path, self.request(Method::DELETE, path))
            .await?;
        decode::<IgnoredAny>(&text).map(|_| ())
    }

    /// Send, log, and return the body of a successful response.
    async fn execute(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<String, ApiError> {
        tracing::info!(service = self.label, "Request: {method} {path}");

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(service = self.label, "Error: {path} {e}");
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(service = self.label, "Error: {path} {}", status.as_u16());
            return Err(ApiError::from_body(status.as_u16(), &body));
        }

        tracing::info!(service = self.label, "Response: {path} {}", status.as_u16());
        Ok(body)
    }
}

/// Decode a JSON body; an empty body decodes as `null`.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = body.trim();
    let body = if body.is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}
