//! Bearer token persistence and the logged-in user profile.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use thiserror::Error;

use crate::domain::auth::{AuthUser, LoginResponse};

#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("token storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid token key: {0}")]
    InvalidKey(String),
}

/// Key/value storage surviving between client runs.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError>;
    fn remove(&self, key: &str) -> Result<(), TokenStoreError>;
}

/// Process-local store, forgotten on exit.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

/// Stores each key as a file named after it inside `dir`.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, TokenStoreError> {
        let plain = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);
        if !plain {
            return Err(TokenStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let value = contents.trim();
                Ok((!value.is_empty()).then(|| value.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options.open(path)?;
        // An existing file keeps the mode it was created with.
        #[cfg(unix)]
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        file.write_all(value.as_bytes())?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Authentication state shared by every request of one client.
///
/// The token lives in the [`TokenStore`] under `token_key`; the profile of the
/// logged-in user is kept in memory only.
pub struct Session {
    store: Arc<dyn TokenStore>,
    token_key: String,
    user: RwLock<Option<AuthUser>>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>, token_key: impl Into<String>) -> Self {
        Self {
            store,
            token_key: token_key.into(),
            user: RwLock::new(None),
        }
    }

    /// Session backed by a [`MemoryTokenStore`].
    pub fn in_memory(token_key: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()), token_key)
    }

    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    /// Persists the token of a successful login and remembers the user.
    pub fn begin(&self, response: &LoginResponse) -> Result<AuthUser, TokenStoreError> {
        self.store.set(&self.token_key, &response.token)?;
        let user = AuthUser::from(response);
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
        log::info!("Logged in as {} ({})", user.email, user.role);
        Ok(user)
    }

    /// Current bearer token. Storage failures read as "no token".
    pub fn token(&self) -> Option<String> {
        match self.store.get(&self.token_key) {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Failed to read token `{}`: {e}", self.token_key);
                None
            }
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Forgets the token and the user profile.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.token_key) {
            log::error!("Failed to remove token `{}`: {e}", self.token_key);
        }
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token_key", &self.token_key)
            .field("user", &self.user())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTokenStore;

    fn login_response() -> LoginResponse {
        LoginResponse {
            id: 7,
            email: "admin@klinik.id".into(),
            name: "Admin".into(),
            role: "admin".into(),
            token: "abc.def".into(),
            clinic_id: 2,
        }
    }

    #[test]
    fn begin_then_clear_round_trip() {
        let session = Session::in_memory("token");
        assert!(!session.is_authenticated());

        let user = session.begin(&login_response()).unwrap();
        assert_eq!(user.clinic_id, 2);
        assert_eq!(session.token().as_deref(), Some("abc.def"));
        assert_eq!(session.user(), Some(user));

        session.clear();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn file_store_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("auth"));
        assert_eq!(store.get("token").unwrap(), None);

        store.set("token", "abc.def").unwrap();
        let reopened = FileTokenStore::new(dir.path().join("auth"));
        assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc.def"));

        reopened.remove("token").unwrap();
        reopened.remove("token").unwrap();
        assert_eq!(store.get("token").unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn token_file_is_private_to_its_owner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "stale").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileTokenStore::new(dir.path());
        store.set("token", "abc.def").unwrap();
        store.set("other", "xyz").unwrap();

        for key in ["token", "other"] {
            let mode = std::fs::metadata(dir.path().join(key))
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o600, "{key}");
        }
        assert_eq!(store.get("token").unwrap().as_deref(), Some("abc.def"));
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path());
        assert!(matches!(
            store.set("../token", "x"),
            Err(TokenStoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(TokenStoreError::InvalidKey(_))));
    }

    #[test]
    fn unreadable_token_counts_as_logged_out() {
        let mut store = MockTokenStore::new();
        store.expect_get().returning(|_| {
            Err(TokenStoreError::Io(std::io::Error::other("disk gone")))
        });
        let session = Session::new(Arc::new(store), "token");
        assert!(!session.is_authenticated());
    }
}
