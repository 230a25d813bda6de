//! Retro desktop shell runtime: desktop icon space, window manager, reducer, and Leptos UI.

pub mod apps;
pub mod components;
pub mod config;
pub mod desktop;
mod effect_executor;
pub mod files;
pub mod gesture;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod selection;
pub mod sequence;
pub mod shortcuts;
pub mod wallpaper;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::ShellConfig;
pub use desktop::{DesktopSpace, IconReleaseOutcome};
pub use gesture::{GestureOutcome, GestureTracker};
pub use model::*;
pub use persistence::{load_wallpaper, persist_wallpaper, PersistenceError};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use window_manager::WindowManager;
