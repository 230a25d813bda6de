//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The runtime never reaches for browser globals directly from the reducer; effect execution and
//! viewport/focus queries go through [`DesktopHostContext`] so tests can inject in-memory
//! services.

mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{HostServices, NotesService, PrefsStore, SessionService};

use crate::{
    components::DesktopRuntimeContext,
    model::{Size, WindowId},
    reducer::{DesktopAction, RuntimeEffect},
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::default())
    }
}

impl DesktopHostContext {
    /// Wraps an injected host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured auth session provider.
    pub fn session_service(&self) -> Rc<dyn SessionService> {
        self.services.session.clone()
    }

    /// Returns the configured notes backend.
    pub fn notes_service(&self) -> Rc<dyn NotesService> {
        self.services.notes.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Installs boot hydration: the stored wallpaper is loaded and applied once.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistWallpaper => {
                persistence_effects::persist_wallpaper(self.clone(), runtime)
            }
            RuntimeEffect::FocusWindowChrome(window_id) => self.focus_window_chrome(window_id),
        }
    }

    /// Moves keyboard focus to a window frame after it opens or is raised.
    pub fn focus_window_chrome(&self, window_id: WindowId) {
        host_ui::focus_window_chrome(window_id);
    }

    /// Returns the full browser viewport, used for icon clamping and the recycle hot zone.
    pub fn viewport_size(&self) -> Size {
        host_ui::viewport_size()
    }
}
