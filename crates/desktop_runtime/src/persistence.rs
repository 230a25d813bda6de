//! Wallpaper preference persistence through the injected [`PrefsStore`].
//!
//! The wallpaper id is the only state that survives a reload. It is written as a JSON string;
//! bare (unquoted) ids left by older builds are still accepted on load.

use platform_host::{save_pref_with, PrefsStore};
use thiserror::Error;

use crate::wallpaper::is_known_wallpaper;

/// Preference key holding the selected wallpaper id.
pub const WALLPAPER_PREF_KEY: &str = "retroos_wallpaper";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures talking to the preference store.
pub enum PersistenceError {
    /// The store could not read `key`.
    #[error("failed to load preference `{key}`: {message}")]
    Load {
        /// Preference key.
        key: &'static str,
        /// Store-reported reason.
        message: String,
    },
    /// The store could not write `key`.
    #[error("failed to save preference `{key}`: {message}")]
    Save {
        /// Preference key.
        key: &'static str,
        /// Store-reported reason.
        message: String,
    },
}

/// Loads the stored wallpaper id.
///
/// Returns `Ok(None)` when nothing is stored or the stored id is not a known preset.
///
/// # Errors
///
/// Returns [`PersistenceError::Load`] when the store itself fails.
pub async fn load_wallpaper<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Option<String>, PersistenceError> {
    let raw = store
        .load_pref(WALLPAPER_PREF_KEY)
        .await
        .map_err(|message| PersistenceError::Load {
            key: WALLPAPER_PREF_KEY,
            message,
        })?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let id = serde_json::from_str::<String>(&raw).unwrap_or(raw);
    Ok(is_known_wallpaper(&id).then_some(id))
}

/// Stores `wallpaper_id` under [`WALLPAPER_PREF_KEY`].
///
/// # Errors
///
/// Returns [`PersistenceError::Save`] when serialization or the store write fails.
pub async fn persist_wallpaper<S: PrefsStore + ?Sized>(
    store: &S,
    wallpaper_id: &str,
) -> Result<(), PersistenceError> {
    save_pref_with(store, WALLPAPER_PREF_KEY, wallpaper_id)
        .await
        .map_err(|message| PersistenceError::Save {
            key: WALLPAPER_PREF_KEY,
            message,
        })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, PrefsStoreFuture};
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingStore;

    impl PrefsStore for FailingStore {
        fn load_pref<'a>(
            &'a self,
            _key: &'a str,
        ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
            Box::pin(async { Err("storage disabled".to_string()) })
        }

        fn save_pref<'a>(
            &'a self,
            _key: &'a str,
            _raw_json: &'a str,
        ) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Err("quota exceeded".to_string()) })
        }

        fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Ok(()) })
        }
    }

    #[test]
    fn persisted_wallpaper_loads_back() {
        let store = MemoryPrefsStore::default();
        block_on(persist_wallpaper(&store, "blue")).expect("persist");
        assert_eq!(store.raw(WALLPAPER_PREF_KEY).as_deref(), Some("\"blue\""));
        assert_eq!(
            block_on(load_wallpaper(&store)).expect("load"),
            Some("blue".to_string())
        );
    }

    #[test]
    fn bare_ids_are_accepted() {
        let store = MemoryPrefsStore::with_raw(WALLPAPER_PREF_KEY, "gray");
        assert_eq!(
            block_on(load_wallpaper(&store)).expect("load"),
            Some("gray".to_string())
        );
    }

    #[test]
    fn unknown_or_missing_ids_load_as_none() {
        let store = MemoryPrefsStore::with_raw(WALLPAPER_PREF_KEY, "\"plaid\"");
        assert_eq!(block_on(load_wallpaper(&store)).expect("load"), None);
        assert_eq!(
            block_on(load_wallpaper(&MemoryPrefsStore::default())).expect("load"),
            None
        );
    }

    #[test]
    fn store_failures_surface_as_typed_errors() {
        assert_eq!(
            block_on(load_wallpaper(&FailingStore)),
            Err(PersistenceError::Load {
                key: WALLPAPER_PREF_KEY,
                message: "storage disabled".to_string(),
            })
        );
        let err = block_on(persist_wallpaper(&FailingStore, "blue")).expect_err("save fails");
        assert_eq!(
            err.to_string(),
            "failed to save preference `retroos_wallpaper`: quota exceeded"
        );
    }
}
