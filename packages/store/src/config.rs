//! # Front-end configuration in `lms.toml`
//!
//! Where the two backends live and a few client-side knobs. The web build embeds
//! the file at compile time; native builds read it from the working directory and
//! then apply `LMS_*` environment overrides (a `.env` file is honoured).
//!
//! ```toml
//! [api]
//! user_base_url = "http://localhost:5000"
//! course_base_url = "http://localhost:4000/api"
//! analytics_key = "validKey123"
//!
//! [table]
//! page_size = 10
//!
//! [session]
//! storage_key = "user"
//! ```
//!
//! Every field has a default, so a missing or empty file is the default config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level configuration stored in `lms.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LmsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_user_base_url")]
    pub user_base_url: String,
    #[serde(default = "default_course_base_url")]
    pub course_base_url: String,
    /// Key the course service expects on `/analytics`.
    #[serde(default = "default_analytics_key")]
    pub analytics_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Local-storage key holding the signed-in user.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_user_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_course_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

fn default_analytics_key() -> String {
    "validKey123".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_storage_key() -> String {
    "user".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            user_base_url: default_user_base_url(),
            course_base_url: default_course_base_url(),
            analytics_key: default_analytics_key(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl LmsConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "lms.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Apply `LMS_*` overrides from `lookup`.
    ///
    /// Unparseable numbers are ignored and keep the configured value.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("LMS_USER_API_URL") {
            self.api.user_base_url = url;
        }
        if let Some(url) = lookup("LMS_COURSE_API_URL") {
            self.api.course_base_url = url;
        }
        if let Some(key) = lookup("LMS_ANALYTICS_KEY") {
            self.api.analytics_key = key;
        }
        if let Some(size) = lookup("LMS_PAGE_SIZE").and_then(|s| s.parse().ok()) {
            self.table.page_size = size;
        }
        self
    }

    /// Load `lms.toml` from the working directory plus environment overrides.
    ///
    /// A missing file is not an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = Self::filename();
        let base = match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_string(),
                    source,
                })
            }
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = LmsConfig::from_toml("").unwrap();
        assert_eq!(config, LmsConfig::default());
        assert_eq!(config.api.course_base_url, "http://localhost:4000/api");
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.session.storage_key, "user");
    }

    #[test]
    fn test_partial_sections() {
        let config = LmsConfig::from_toml(
            r#"
            [api]
            user_base_url = "https://users.example.com"

            [table]
            page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.api.user_base_url, "https://users.example.com");
        assert_eq!(config.api.analytics_key, "validKey123");
        assert_eq!(config.table.page_size, 25);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = LmsConfig::default();
        config.api.analytics_key = "k".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(LmsConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(LmsConfig::from_toml("[table]\npage_size = \"ten\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = LmsConfig::default().with_overrides(|key| match key {
            "LMS_COURSE_API_URL" => Some("http://courses:4000/api".to_string()),
            "LMS_PAGE_SIZE" => Some("not-a-number".to_string()),
            _ => None,
        });
        assert_eq!(config.api.course_base_url, "http://courses:4000/api");
        assert_eq!(config.api.user_base_url, "http://localhost:5000");
        assert_eq!(config.table.page_size, 10);
    }
}
