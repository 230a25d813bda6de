//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    notes::{MemoryNotesService, NotesService},
    session::{MemorySessionService, SessionService},
    storage::prefs::{MemoryPrefsStore, PrefsStore},
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`localStorage` prefs).
    Browser,
    /// Fully in-memory composition used by tests and non-wasm builds.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
        }
    }
}

/// Runtime-selected host service bundle.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight typed preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Auth session provider.
    pub session: Rc<dyn SessionService>,
    /// Notes CRUD backend.
    pub notes: Rc<dyn NotesService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an in-memory bundle with a signed-in guest session.
    pub fn memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            session: Rc::new(MemorySessionService::signed_in("guest", "guest-token")),
            notes: Rc::new(MemoryNotesService::default()),
            host_strategy: HostStrategy::Memory,
        }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::memory()
    }
}
