//! Key/value preference storage contracts and adapters.
//!
//! Values cross the boundary as raw JSON text, one string per key. The desktop shell persists
//! exactly one preference through this store (the wallpaper id), but the contract stays generic
//! so adapters do not need to know which keys exist.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values.
pub trait PrefsStore {
    /// Loads the raw JSON text stored under `key`, or `None` when the key is absent.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Replaces the raw JSON text stored under `key`.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Removes `key`. Removing an absent key succeeds.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store. Clones share the same backing map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-seeded with one raw JSON value.
    pub fn with_raw(key: &str, raw_json: &str) -> Self {
        let store = Self::default();
        store
            .inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        store
    }

    /// Returns the raw JSON text for `key` without going through the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store fails or the stored text is not valid JSON for `T`.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_store_saves_loads_and_deletes_raw_values() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("retroos_wallpaper", "\"blue\"")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("retroos_wallpaper")).expect("load"),
            Some("\"blue\"".to_string())
        );
        block_on(store_obj.delete_pref("retroos_wallpaper")).expect("delete");
        assert_eq!(
            block_on(store_obj.load_pref("retroos_wallpaper")).expect("load"),
            None
        );
    }

    #[test]
    fn typed_helpers_store_strings_as_json() {
        let store = MemoryPrefsStore::default();
        block_on(save_pref_with(&store, "retroos_wallpaper", "gray")).expect("save typed");

        assert_eq!(store.raw("retroos_wallpaper").as_deref(), Some("\"gray\""));
        let loaded: Option<String> =
            block_on(load_pref_with(&store, "retroos_wallpaper")).expect("load typed");
        assert_eq!(loaded.as_deref(), Some("gray"));
    }

    #[test]
    fn typed_load_reports_malformed_json() {
        let store = MemoryPrefsStore::with_raw("retroos_wallpaper", "not json");
        let loaded: Result<Option<String>, String> =
            block_on(load_pref_with(&store, "retroos_wallpaper"));
        assert!(loaded.is_err());
    }
}
