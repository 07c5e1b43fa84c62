//! Client-held session: the current-user record and its storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only reader/writer of the persisted record and is
//! provided through Leptos context. Route guards, the navbar, and the profile
//! page read identity from it; login/register write it; logout clears it.
//!
//! TRADE-OFFS
//! ==========
//! The record is trusted as-is: no expiry and no server-side validation.
//! Reads always go to the backend so a `set`/`clear` is visible to the very
//! next `get`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::net::types::UserSummary;

/// Storage key holding the serialized [`SessionRecord`].
pub const SESSION_STORAGE_KEY: &str = "user";

/// Identity of the signed-in user. Its presence is the sole authorization signal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    pub email: String,
}

impl From<UserSummary> for SessionRecord {
    fn from(user: UserSummary) -> Self {
        Self { username: user.username, email: user.email }
    }
}

/// Durable string key-value storage behind the session store.
pub trait SessionBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. A no-op outside the browser (SSR).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage()
                && let Err(e) = storage.set_item(key, value)
            {
                log::warn!("session write failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage, used by tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Explicit `get`/`set`/`clear` access to the persisted session record.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::browser()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Store backed by process memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Current record, or `None` when logged out or the stored value is unreadable.
    #[must_use]
    pub fn get(&self) -> Option<SessionRecord> {
        let raw = self.backend.read(SESSION_STORAGE_KEY)?;
        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("ignoring malformed session record: {e}");
                None
            }
        }
    }

    pub fn set(&self, record: &SessionRecord) {
        match serde_json::to_string(record) {
            Ok(raw) => self.backend.write(SESSION_STORAGE_KEY, &raw),
            Err(e) => log::error!("session record serialization failed: {e}"),
        }
    }

    pub fn clear(&self) {
        self.backend.remove(SESSION_STORAGE_KEY);
    }
}

/// Reactive mirror of the store for rendering.
///
/// `ready` stays `false` until the browser has read storage after hydration,
/// so server-rendered and first client markup agree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionRecord>,
    pub ready: bool,
}

impl SessionState {
    /// Snapshot the store after it has been read in the browser.
    #[must_use]
    pub fn loaded(store: &SessionStore) -> Self {
        Self { user: store.get(), ready: true }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
