//! Persisted session flag store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only reader/writer of the `isLoggedIn` and `user` keys. Reads fail
//! closed: any stored flag other than the literal `"true"` means signed out.
//!
//! TRADE-OFFS
//! ==========
//! Storage sits behind [`KeyValueStore`] so the browser-backed store can be
//! swapped for [`MemoryStorage`] in tests and on the server, where
//! `localStorage` does not exist.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::state::session::SessionState;

/// Key holding the session flag.
pub const SESSION_FLAG_KEY: &str = "isLoggedIn";
/// Key holding the display-only identity hint.
pub const IDENTITY_KEY: &str = "user";

const SESSION_FLAG_SET: &str = "true";

/// Minimal string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Inert outside hydrate builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
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

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for {key}");
                }
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
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage remove failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage for tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Session flag accessor over any [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist the flag and identity hint.
    ///
    /// A false flag removes the key rather than storing `"false"`. A missing
    /// identity removes any previously stored one.
    pub fn set_session(&self, logged_in: bool, identity: Option<&str>) {
        if logged_in {
            self.storage.set(SESSION_FLAG_KEY, SESSION_FLAG_SET);
        } else {
            self.storage.remove(SESSION_FLAG_KEY);
        }
        match identity {
            Some(identity) => self.storage.set(IDENTITY_KEY, identity),
            None => self.storage.remove(IDENTITY_KEY),
        }
    }

    /// Remove both keys.
    pub fn clear_session(&self) {
        self.storage.remove(SESSION_FLAG_KEY);
        self.storage.remove(IDENTITY_KEY);
    }

    /// True iff the stored flag is exactly `"true"`.
    pub fn is_logged_in(&self) -> bool {
        self.storage
            .get(SESSION_FLAG_KEY)
            .is_some_and(|value| value == SESSION_FLAG_SET)
    }

    /// Stored identity hint, ignoring empty values.
    pub fn identity(&self) -> Option<String> {
        self.storage.get(IDENTITY_KEY).filter(|value| !value.is_empty())
    }

    /// Read the store into a restored [`SessionState`].
    pub fn snapshot(&self) -> SessionState {
        if self.is_logged_in() {
            SessionState::signed_in(self.identity())
        } else {
            SessionState::signed_out()
        }
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Session store backed by browser `localStorage`.
pub fn browser() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
