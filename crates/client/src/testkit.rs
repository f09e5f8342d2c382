//! Test doubles for embedding the client without a platform keychain.

use parking_lot::Mutex;

use crate::models::SessionData;
use crate::store::SessionStore;

/// In-memory [`SessionStore`]. Backs unit tests and headless environments.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<SessionData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, data: &SessionData) {
        *self.slot.lock() = Some(data.clone());
    }

    fn get(&self) -> Option<SessionData> {
        self.slot.lock().clone()
    }

    fn delete(&self) {
        *self.slot.lock() = None;
    }
}
