// Progress persistence: one JSON record under a fixed key in a string key-value store.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::PROGRESS_KEY;
use crate::model::ProgressRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("storage access failed: {0}")]
pub struct StoreError(pub String);

impl From<JsValue> for StoreError {
    fn from(value: JsValue) -> Self {
        StoreError(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("saved progress is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// String key-value storage with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// The browser's `window.localStorage`.
pub struct BrowserStorage(web_sys::Storage);

impl BrowserStorage {
    pub fn local() -> Option<Self> {
        web_sys::window()?.local_storage().ok().flatten().map(BrowserStorage)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.get_item(key)?)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(self.0.set_item(key, value)?)
    }
    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Ok(self.0.remove_item(key)?)
    }
}

/// Process-local store; used when `localStorage` is unavailable and in tests.
#[derive(Default)]
pub struct MemoryStore(RefCell<HashMap<String, String>>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.borrow().get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().remove(key);
        Ok(())
    }
}

/// `localStorage` when the browser grants it, otherwise an in-memory fallback
/// (progress then lasts only for the page lifetime).
pub fn browser_store() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("localStorage unavailable; progress will not survive a reload");
            Rc::new(MemoryStore::default())
        }
    }
}

pub struct ProgressStore<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, PROGRESS_KEY)
    }

    pub fn with_key(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn try_load(&self) -> Result<Option<ProgressRecord>, ProgressError> {
        match self.store.get(self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Saved progress, or `None` when nothing usable is stored.
    /// A corrupt payload is logged and treated as a fresh start.
    pub fn load(&self) -> Option<ProgressRecord> {
        self.try_load().unwrap_or_else(|err| {
            log::error!("ignoring saved progress: {err}");
            None
        })
    }

    /// Overwrite the slot with the full record.
    pub fn save(&self, level_id: usize, clues: &[String]) -> Result<(), ProgressError> {
        self.save_record(&ProgressRecord {
            current_level: level_id,
            unlocked_clues: clues.to_vec(),
        })
    }

    pub fn save_record(&self, record: &ProgressRecord) -> Result<(), ProgressError> {
        let raw = serde_json::to_string(record)?;
        self.store.set(self.key, &raw)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), ProgressError> {
        self.store.remove(self.key)?;
        Ok(())
    }
}
