//! Key/value storage for the persisted dark mode flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build talks to `localStorage`; native builds and tests use the
//! in-memory store. Storage failures never surface as errors: reads degrade to
//! "absent" and writes are best-effort.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::state::theme::{ACTIVE_VALUE, Theme, ThemeFlag};

#[cfg(test)]
#[path = "flag_store_test.rs"]
mod flag_store_test;

/// Minimal string key/value store.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Read and parse the theme flag under `key`.
pub fn read_flag<S: FlagStore + ?Sized>(store: &S, key: &str) -> ThemeFlag {
    ThemeFlag::from_stored(store.get(key).as_deref())
}

/// Persist `theme`: dark writes `"active"`, light clears the key.
pub fn write_flag<S: FlagStore + ?Sized>(store: &S, key: &str, theme: Theme) {
    match theme.flag() {
        ThemeFlag::Active => store.set(key, ACTIVE_VALUE),
        ThemeFlag::Inactive => store.remove(key),
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryFlagStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryFlagStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl FlagStore for MemoryFlagStore {
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

/// `window.localStorage`, or nothing when storage is unavailable (privacy
/// mode, sandboxed iframe).
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug, Default)]
pub struct LocalFlagStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalFlagStore {
    #[must_use]
    pub fn from_window() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
            None => None,
        };
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl FlagStore for LocalFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read failed: key={key} err={err:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("localStorage write failed: key={key} err={err:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.remove_item(key) {
            log::warn!("localStorage remove failed: key={key} err={err:?}");
        }
    }
}
