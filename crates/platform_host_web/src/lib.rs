//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Only preferences touch a browser API (`window.localStorage`). The session provider and the
//! notes backend are in-memory collaborators: the sign-in flow and the notes REST transport sit
//! outside this shell.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod storage;

pub use adapters::{build_host_services, prefs_store};
pub use storage::local_prefs::WebPrefsStore;
