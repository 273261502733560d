//! Session slot and its persistence.
//!
//! The session is a single process-wide slot: the auth context is the only
//! writer (the mutating methods are crate-private), every other component is
//! a reader. The slot is restored from a JSON file at startup and written
//! back on every change, mirroring the one storage key the browser client
//! kept under `localStorage`.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopjoy_core::{UserId, UserType};

/// The client's record of the currently authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Backend user ID, sent as the `X-User-Id` header on every request.
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub user_type: UserType,
}

impl Session {
    /// Whether this session belongs to an admin account.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }

    /// Whether this session belongs to a customer account.
    #[must_use]
    pub fn is_customer(&self) -> bool {
        self.user_type == UserType::Customer
    }

    /// Display name: "First Last" when available, username otherwise.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            _ => self.username.clone(),
        }
    }
}

/// Errors that can occur persisting the session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Holder of the current session, shared across the process.
///
/// Cheap to clone. Readers use [`SessionStore::current`]; writes go through
/// the crate-private [`set`](SessionStore::set) / [`clear`](SessionStore::clear)
/// so that only the auth context can transition the state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    path: PathBuf,
    slot: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Create the store, restoring a persisted session if one exists.
    ///
    /// A missing or malformed file leaves the store anonymous; the malformed
    /// case is logged and the file is ignored rather than treated as fatal.
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let restored = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Session>(&contents) {
                Ok(session) => Some(session),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring malformed session file");
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            inner: Arc::new(SessionStoreInner {
                path,
                slot: RwLock::new(restored),
            }),
        }
    }

    /// The current session, if one is held.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.inner
            .slot
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Whether a session is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .slot
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .is_some()
    }

    /// Store a session and persist it.
    pub(crate) fn set(&self, session: Session) -> Result<(), SessionError> {
        let json = serde_json::to_string(&session)?;
        {
            let mut slot = self
                .inner
                .slot
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            *slot = Some(session);
        }
        std::fs::write(&self.inner.path, json)?;
        Ok(())
    }

    /// Drop the session and delete the persisted copy.
    ///
    /// The in-memory slot is cleared before the file is touched, so the
    /// process is anonymous even when removing the file fails.
    pub(crate) fn clear(&self) -> Result<(), SessionError> {
        {
            let mut slot = self
                .inner
                .slot
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            *slot = None;
        }
        match std::fs::remove_file(&self.inner.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            user_id: UserId::new(3),
            username: "admin".to_string(),
            email: "admin@shopjoy.test".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Admin".to_string()),
            user_type: UserType::Admin,
        }
    }

    #[test]
    fn test_load_missing_file_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::load(dir.path().join("session.json"));
        assert!(store.current().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_load_malformed_file_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = SessionStore::load(&path);
        assert!(store.current().is_none());
    }

    #[test]
    fn test_set_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(&path);
        store.set(sample_session()).unwrap();
        assert!(store.is_authenticated());

        // A fresh store sees the persisted session (startup restore).
        let restored = SessionStore::load(&path);
        assert_eq!(restored.current(), Some(sample_session()));
    }

    #[test]
    fn test_clear_removes_slot_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::load(&path);
        store.set(sample_session()).unwrap();
        store.clear().unwrap();

        assert!(store.current().is_none());
        assert!(!path.exists());

        // Clearing an already-anonymous store is a no-op, not an error.
        store.clear().unwrap();
    }

    #[test]
    fn test_role_flags() {
        let session = sample_session();
        assert!(session.is_admin());
        assert!(!session.is_customer());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut session = sample_session();
        assert_eq!(session.display_name(), "Ada Admin");
        session.first_name = None;
        session.last_name = None;
        assert_eq!(session.display_name(), "admin");
    }
}
