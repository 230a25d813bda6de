//! `localStorage`-backed preference store.
//!
//! The browser API is synchronous; the async [`PrefsStore`] contract wraps it in ready futures.
//! Off-wasm every read reports absence and every write succeeds, so the runtime falls back to its
//! defaults.

use platform_host::{PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Loads the raw text stored under `key`.
    pub fn load_json(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    /// Stores raw text under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails (quota, private mode).
    pub fn save_json(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()
                .ok_or_else(|| "localStorage unavailable".to_string())?
                .set_item(key, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    /// Removes `key` from localStorage.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the delete fails.
    pub fn delete_json(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()
                .ok_or_else(|| "localStorage unavailable".to_string())?
                .remove_item(key)
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { Ok(store.load_json(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_json(key, raw_json) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.delete_json(key) })
    }
}
