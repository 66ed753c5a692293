//! # Persisted session: the signed-in user in key/value storage
//!
//! The auth context mirrors the current user into browser local storage after
//! every successful session check or login, and clears it when the session
//! ends. All access goes
//! through the [`KeyValueStore`] trait so the same logic runs against
//! [`crate::LocalStorage`] in the browser and [`crate::MemoryStorage`] in tests
//! and native builds.

use thiserror::Error;

use crate::models::User;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write to {key}")]
    Write { key: String },
    #[error("stored session is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and writes the user blob under one storage key.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn save_user(&self, user: &User) -> Result<(), StorageError> {
        let json = serde_json::to_string(user)?;
        self.storage.set(&self.key, &json)
    }

    /// The stored user, or `None` if nothing is stored.
    pub fn load_user(&self) -> Result<Option<User>, StorageError> {
        match self.storage.get(&self.key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::models::Role;

    fn teacher() -> User {
        User {
            id: 5,
            name: "Turing".to_string(),
            email: "alan@example.com".to_string(),
            role: Role::Teacher,
            specialization: Some("Computability".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_save_load_clear() {
        let storage = MemoryStorage::new();
        let session = SessionStore::new(storage.clone(), "user");

        assert!(session.load_user().unwrap().is_none());

        session.save_user(&teacher()).unwrap();
        assert_eq!(session.load_user().unwrap(), Some(teacher()));
        assert!(storage.get("user").unwrap().unwrap().contains("\"role\":\"teacher\""));

        session.clear().unwrap();
        assert!(session.load_user().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let storage = MemoryStorage::new();
        storage.set("user", "{not json").unwrap();
        let session = SessionStore::new(storage, "user");
        assert!(matches!(session.load_user(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let session = SessionStore::new(storage.clone(), "lms-user");
        session.save_user(&teacher()).unwrap();
        assert!(storage.get("user").unwrap().is_none());
        assert!(storage.get("lms-user").unwrap().is_some());
    }
}
