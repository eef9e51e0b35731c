//! Persisted session identifiers.
//!
//! The portal keeps two keys in browser local storage, both under a common
//! prefix: `<prefix>_stake_key` and `<prefix>_name`. Their presence is what
//! lets authenticated pages open after a reload.

use govtool_types::StakeKey;

use crate::error::SessionError;

/// Default storage prefix.
pub const WALLET_LS_KEY: &str = "wallet_data";

/// Minimal key-value storage, the shape of browser local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove_item(&self, key: &str) -> Result<(), SessionError>;
}

/// Typed access to the session keys under one prefix.
pub struct SessionStore<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    pub fn stake_key_key(&self) -> String {
        format!("{}_stake_key", self.prefix)
    }

    pub fn name_key(&self) -> String {
        format!("{}_name", self.prefix)
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Persist the identifiers of a freshly connected wallet.
    pub fn save(&self, stake_key: &StakeKey, wallet_name: &str) -> Result<(), SessionError> {
        self.store
            .set_item(&self.stake_key_key(), &stake_key.to_hex())?;
        self.store.set_item(&self.name_key(), wallet_name)
    }

    /// Remove both identifiers (logout / disconnect).
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.remove_item(&self.stake_key_key())?;
        self.store.remove_item(&self.name_key())
    }

    pub fn stake_key(&self) -> Result<Option<String>, SessionError> {
        self.store.get_item(&self.stake_key_key())
    }

    pub fn wallet_name(&self) -> Result<Option<String>, SessionError> {
        self.store.get_item(&self.name_key())
    }

    /// Whether both identifiers are present and non-empty.
    pub fn has_session(&self) -> Result<bool, SessionError> {
        let key = self.stake_key()?.filter(|v| !v.is_empty());
        let name = self.wallet_name()?.filter(|v| !v.is_empty());
        Ok(key.is_some() && name.is_some())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
            Ok(self.0.borrow().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<(), SessionError> {
            self.0.borrow_mut().remove(key);
            Ok(())
        }
    }

    #[test]
    fn keys_use_prefix() {
        let store = SessionStore::new(MemoryStore::default(), "govtool");
        assert_eq!(store.stake_key_key(), "govtool_stake_key");
        assert_eq!(store.name_key(), "govtool_name");
    }

    #[test]
    fn session_needs_both_keys() {
        let store = SessionStore::new(MemoryStore::default(), WALLET_LS_KEY);
        assert!(!store.has_session().unwrap());
        store.inner().set_item("wallet_data_stake_key", "e0ab").unwrap();
        assert!(!store.has_session().unwrap());
        store.inner().set_item("wallet_data_name", "").unwrap();
        assert!(!store.has_session().unwrap());
        store.inner().set_item("wallet_data_name", "lace").unwrap();
        assert!(store.has_session().unwrap());
    }
}
