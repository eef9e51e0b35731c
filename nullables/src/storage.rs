//! Nullable local storage.

use std::collections::HashMap;
use std::sync::Mutex;

use govtool_session::{KeyValueStore, SessionError};

/// In-memory local storage. Can be switched into a failing mode.
#[derive(Default)]
pub struct NullStorage {
    items: Mutex<HashMap<String, String>>,
    unavailable: Mutex<bool>,
}

impl NullStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated storage, like a saved browser storage state.
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        if let Ok(mut map) = storage.items.lock() {
            map.extend(items.into_iter().map(|(k, v)| (k.to_string(), v.to_string())));
        }
        storage
    }

    /// Make every operation fail, as when storage access is blocked.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut flag) = self.unavailable.lock() {
            *flag = unavailable;
        }
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.items.lock().map(|m| m.clone()).unwrap_or_default()
    }

    fn items(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, SessionError> {
        if self.unavailable.lock().map(|f| *f).unwrap_or(true) {
            return Err(SessionError::Storage("storage unavailable".into()));
        }
        self.items
            .lock()
            .map_err(|_| SessionError::Storage("storage lock poisoned".into()))
    }
}

impl KeyValueStore for NullStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        self.items()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let storage = NullStorage::new();
        storage.set_item("a", "1").unwrap();
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
        storage.remove_item("a").unwrap();
        assert_eq!(storage.get_item("a").unwrap(), None);
    }

    #[test]
    fn unavailable_storage_errors() {
        let storage = NullStorage::with_items([("k", "v")]);
        storage.set_unavailable(true);
        assert!(matches!(storage.get_item("k"), Err(SessionError::Storage(_))));
        storage.set_unavailable(false);
        assert_eq!(storage.snapshot().len(), 1);
    }
}
