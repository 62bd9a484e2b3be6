use crate::error::{NotesError, NotesResult};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub(crate) const NOTES_KEY: &str = "notes";
pub(crate) const DARK_MODE_KEY: &str = "isDarkMode";

/// Synchronous string key-value store the board persists into.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> NotesResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> NotesResult<()>;
}

/// `window.localStorage`.
///
/// Holds no handle: the storage object is looked up on every call so the
/// adapter stays `Send + Sync` and can live inside reactive signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> NotesResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| NotesError::Storage("localStorage is unavailable".to_string()))
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn remove(key: &str) {
        if let Ok(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> NotesResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| NotesError::Storage(format!("read {key}: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> NotesResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| NotesError::Storage(format!("write {key}: {e:?}")))
    }
}

/// In-memory store. Clones share the same map, so a test can hand one clone
/// to the board and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items().insert(key.to_string(), value.to_string());
        store
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.items().clone()
    }

    // A panic while holding the lock cannot leave a half-written entry.
    fn items(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> NotesResult<Option<String>> {
        Ok(self.items().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> NotesResult<()> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store behind the running board.
///
/// Normally `localStorage`; a board that could not be loaded is detached to
/// memory so it never overwrites the stored value it failed to read.
#[derive(Clone, Debug)]
pub enum BoardStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl KeyValueStore for BoardStore {
    fn get(&self, key: &str) -> NotesResult<Option<String>> {
        match self {
            BoardStore::Local(s) => s.get(key),
            BoardStore::Memory(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> NotesResult<()> {
        match self {
            BoardStore::Local(s) => s.set(key, value),
            BoardStore::Memory(s) => s.set(key, value),
        }
    }
}
