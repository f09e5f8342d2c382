use std::fs;
use std::path::PathBuf;

use keyring::Entry;

use crate::config::ClientConfig;
use crate::models::SessionData;

const POINTER_FILE: &str = "current_user";

/// Durable home of the session credential.
///
/// The contract is presence-only: callers see a credential or they do not.
/// Implementations log underlying storage failures and degrade them to
/// absence rather than surfacing a distinct error.
pub trait SessionStore: Send + Sync {
    /// Persist the credential, replacing any record for the same user.
    fn save(&self, data: &SessionData);

    /// The previously saved credential, if any.
    fn get(&self) -> Option<SessionData>;

    /// Erase the saved credential. No-op when nothing is saved.
    fn delete(&self);
}

/// Platform-keychain backed store.
///
/// Two-step layout mirroring the service's single-user device model: a
/// plain pointer file records which uid is current, and the token itself
/// lives in the OS keychain under `(service, uid)`. Both must be present
/// for [`SessionStore::get`] to succeed.
pub struct KeychainStore {
    service: String,
    state_dir: PathBuf,
}

impl KeychainStore {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            service: config.keychain_service.clone(),
            state_dir: config.resolve_state_dir(),
        }
    }

    fn pointer_path(&self) -> PathBuf {
        self.state_dir.join(POINTER_FILE)
    }

    fn current_uid(&self) -> Option<i64> {
        let raw = fs::read_to_string(self.pointer_path()).ok()?;
        raw.trim().parse().ok()
    }

    fn entry(&self, uid: i64) -> Result<Entry, keyring::Error> {
        Entry::new(&self.service, &uid.to_string())
    }
}

impl SessionStore for KeychainStore {
    fn save(&self, data: &SessionData) {
        if let Err(err) = fs::create_dir_all(&self.state_dir)
            .and_then(|_| fs::write(self.pointer_path(), data.uid.to_string()))
        {
            tracing::warn!("failed to write current-user pointer: {}", err);
            return;
        }
        // set_password is an upsert, so re-saving the same uid updates
        // the token in place.
        match self.entry(data.uid).and_then(|entry| entry.set_password(&data.token)) {
            Ok(()) => tracing::debug!(uid = data.uid, "session credential saved"),
            Err(err) => tracing::warn!("failed to store token in keychain: {}", err),
        }
    }

    fn get(&self) -> Option<SessionData> {
        let uid = self.current_uid()?;
        match self.entry(uid).and_then(|entry| entry.get_password()) {
            Ok(token) => Some(SessionData { uid, token }),
            Err(keyring::Error::NoEntry) => None,
            Err(err) => {
                tracing::warn!("keychain read failed, treating as absent: {}", err);
                None
            }
        }
    }

    fn delete(&self) {
        let Some(uid) = self.current_uid() else {
            return;
        };
        match self.entry(uid).and_then(|entry| entry.delete_credential()) {
            Ok(()) | Err(keyring::Error::NoEntry) => {}
            Err(err) => tracing::warn!("failed to delete keychain entry: {}", err),
        }
        if let Err(err) = fs::remove_file(self.pointer_path()) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to remove current-user pointer: {}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keychain-backed behavior needs a real platform secret service, so
    // those paths are covered by the in-memory store in testkit. Here we
    // only pin the pointer-file mechanics.

    fn store_in(dir: &std::path::Path) -> KeychainStore {
        let config = ClientConfig {
            state_dir: Some(dir.to_path_buf()),
            ..Default::default()
        };
        KeychainStore::new(&config)
    }

    #[test]
    fn test_get_without_pointer_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(dir.path()).get().is_none());
    }

    #[test]
    fn test_delete_without_pointer_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        store_in(dir.path()).delete();
        assert!(!dir.path().join(POINTER_FILE).exists());
    }

    #[test]
    fn test_garbage_pointer_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(POINTER_FILE), "not-a-uid").unwrap();
        assert!(store_in(dir.path()).get().is_none());
    }
}
