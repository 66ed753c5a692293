//! Errors returned by the REST client.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },
    /// The request never got an answer (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Build a status error, taking the message from a JSON `{"message": ...}`
    /// (or `{"error": ...}`) body when there is one.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// The message the backend put in the error body, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for a toast: the backend message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }

    /// Text for a failed sign-in.
    pub fn login_message(&self) -> String {
        match self.status() {
            Some(400 | 401) => "Invalid email or password.".to_string(),
            Some(500) => "Server error. Please try again later.".to_string(),
            _ => self.user_message("Login failed. Please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json_body() {
        let err = ApiError::from_body(409, r#"{"message":"Email already registered"}"#);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.backend_message(), Some("Email already registered"));
        assert_eq!(err.user_message("Failed to create student."), "Email already registered");
        assert_eq!(err.to_string(), "HTTP 409: Email already registered");
    }

    #[test]
    fn test_fallback_for_plain_or_empty_body() {
        let err = ApiError::from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.backend_message(), None);
        assert_eq!(err.user_message("Failed to delete course."), "Failed to delete course.");

        let err = ApiError::from_body(404, r#"{"message":"  "}"#);
        assert_eq!(err.backend_message(), None);
    }

    #[test]
    fn test_error_field_is_accepted() {
        let err = ApiError::from_body(403, r#"{"error":"Invalid API key"}"#);
        assert_eq!(err.backend_message(), Some("Invalid API key"));
    }

    #[test]
    fn test_login_messages() {
        assert_eq!(
            ApiError::from_body(401, r#"{"message":"nope"}"#).login_message(),
            "Invalid email or password."
        );
        assert_eq!(
            ApiError::from_body(500, "").login_message(),
            "Server error. Please try again later."
        );
        assert_eq!(
            ApiError::from_body(403, r#"{"message":"Account disabled"}"#).login_message(),
            "Account disabled"
        );
    }
}
