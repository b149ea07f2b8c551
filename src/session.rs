//! # Session Persistence
//!
//! Save and load the signed-in session to/from disk.
//!
//! The sidebar collapse state is deliberately never persisted; only the
//! session survives a restart.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// A signed-in session.
///
/// Stored as JSON in the platform config directory and restored on startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user's username.
    pub username: String,

    /// Contact email, if the user provided one in settings.
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    /// Create a session for a username with no contact email.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
        }
    }
}

/// Errors that can occur while writing the session file.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Filesystem error while creating or writing the file.
    #[error("failed to write session file: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Disk-backed store for the current session.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Returns a store rooted at the platform config directory, or `None`
    /// when the platform provides no config directory.
    #[must_use]
    pub fn from_config_dir() -> Option<Self> {
        let Some(dir) = dirs::config_dir() else {
            tracing::warn!("Could not determine config directory");
            return None;
        };
        Some(Self {
            path: dir.join("overlook").join("session.json"),
        })
    }

    /// Returns a store backed by an explicit file path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the persisted session, or `None` if absent or unreadable.
    ///
    /// A corrupt or unreadable file is logged and treated as "no session";
    /// startup never fails because of it.
    pub fn load(&self) -> Option<Session> {
        if !self.path.exists() {
            tracing::debug!(path = ?self.path, "No session file found");
            return None;
        }

        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(session) => {
                    tracing::info!(path = ?self.path, "Restored session");
                    Some(session)
                }
                Err(e) => {
                    tracing::warn!(path = ?self.path, error = %e, "Corrupt session file, ignoring");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Failed to read session file");
                None
            }
        }
    }

    /// Saves the session to disk, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, contents)?;

        tracing::info!(path = ?self.path, "Saved session");
        Ok(())
    }

    /// Removes the persisted session, if any.
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::info!(path = ?self.path, "Cleared session");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        let session = Session::new("alice");
        store.save(&session).unwrap();

        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("absent.json"));

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_load_corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let store = SessionStore::at(path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("nested").join("session.json"));

        store.save(&Session::new("bob")).unwrap();
        assert!(store.load().is_some());
    }

    #[test]
    fn test_clear_removes_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        store.save(&Session::new("carol")).unwrap();
        store.clear().unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_on_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("absent.json"));

        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_email_defaults_to_none_on_old_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"username":"dave"}"#).unwrap();

        let store = SessionStore::at(path);
        let session = store.load().unwrap();
        assert_eq!(session.username, "dave");
        assert_eq!(session.email, None);
    }
}
