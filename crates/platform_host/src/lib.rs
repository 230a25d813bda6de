//! Typed host-service contracts shared by the desktop runtime and its browser adapters.
//!
//! The desktop core never talks to `localStorage`, an auth provider, or a notes backend
//! directly. It receives a [`HostServices`] bundle assembled by the entry layer and only sees the
//! traits declared here. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod notes;
pub mod session;
pub mod storage;
pub mod time;

pub use host::{HostServices, HostStrategy};
pub use notes::{MemoryNotesService, NoteDraft, NoteRecord, NotesFuture, NotesService};
pub use session::{AuthSession, MemorySessionService, SessionService};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::unix_time_ms_now;
