//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.
//!
//! The reducer never fails: every action either applies or is ignored. Side effects that touch
//! the host (preference writes, DOM focus) are returned as [`RuntimeEffect`] intents.

use crate::{
    desktop::IconReleaseOutcome,
    model::{AppKind, DesktopState, OpenWindowRequest, Point, Size, WindowId},
    shortcuts::{OpenAction, ShortcutId},
    wallpaper::{is_known_wallpaper, next_wallpaper_id},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a fresh window of `kind` with its default geometry.
    OpenApp {
        /// Kind of window to open.
        kind: AppKind,
    },
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Open a window listing a folder's contents.
    OpenFolder {
        /// Folder to show.
        folder: ShortcutId,
    },
    /// Run a shortcut's open action (desktop icon, pinned slot, or folder entry).
    ActivateShortcut {
        /// Shortcut to activate.
        id: ShortcutId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize or restore a window.
    ToggleMaximizeWindow {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Taskbar button press: minimize if active, otherwise focus.
    TaskbarClick {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Primary press on a window title bar.
    BeginTitleBarDrag {
        /// Window whose title bar was pressed.
        window_id: WindowId,
        /// Pointer position in desktop coordinates.
        pointer: Point,
        /// Browser click count for the press.
        click_count: u32,
    },
    /// Pointer moved during a title-bar drag.
    UpdateTitleBarDrag {
        /// Pointer position in desktop coordinates.
        pointer: Point,
    },
    /// Pointer released after a title-bar press.
    EndTitleBarDrag,
    /// The browser cancelled the pointer; every live gesture session ends without a release.
    CancelPointerGestures,
    /// Title bar double-click.
    TitleBarDoubleClick {
        /// Window whose title bar was double-clicked.
        window_id: WindowId,
    },
    /// Primary press on a desktop icon.
    BeginIconDrag {
        /// Pressed icon.
        id: ShortcutId,
        /// Pointer position in desktop coordinates.
        pointer: Point,
        /// Whether Ctrl/Meta was held.
        additive: bool,
        /// Browser click count for the press.
        click_count: u32,
    },
    /// Pointer moved during an icon drag.
    UpdateIconDrag {
        /// Pointer position in desktop coordinates.
        pointer: Point,
        /// Current desktop surface size.
        surface: Size,
    },
    /// Pointer released after an icon press.
    EndIconDrag {
        /// Pointer position in desktop coordinates.
        pointer: Point,
        /// Current desktop surface size.
        surface: Size,
    },
    /// Press on the empty desktop background.
    BeginMarquee {
        /// Pointer position in desktop coordinates.
        pointer: Point,
        /// Whether the primary button was used.
        primary_button: bool,
        /// Browser click count for the press.
        click_count: u32,
    },
    /// Pointer moved while drawing a marquee.
    UpdateMarquee {
        /// Pointer position in desktop coordinates.
        pointer: Point,
    },
    /// Pointer released after drawing a marquee.
    EndMarquee,
    /// Deselect every icon.
    ClearSelection,
    /// Create a folder on the desktop.
    NewFolder {
        /// Whether to open the new folder's window right away.
        open_window: bool,
    },
    /// Recycle the selected icons.
    DeleteSelection,
    /// File the selected icons into a folder.
    MoveSelectionToFolder {
        /// Destination folder.
        folder: ShortcutId,
    },
    /// Restore recycled icons.
    RestoreShortcuts {
        /// Icons to restore.
        ids: Vec<ShortcutId>,
    },
    /// Restore every recycled icon.
    RestoreAllShortcuts,
    /// Move a file from "My Files" to the recycle bin.
    DeleteFile {
        /// File to delete.
        id: String,
    },
    /// Restore a deleted file.
    RestoreFile {
        /// File to restore.
        id: String,
    },
    /// Permanently drop recycled files and icons.
    EmptyRecycleBin,
    /// Select a wallpaper preset and persist it.
    SetWallpaper {
        /// Preset id; unknown ids are ignored.
        wallpaper_id: String,
    },
    /// Switch to the next wallpaper preset and persist it.
    CycleWallpaper,
    /// Apply a stored wallpaper without persisting it again.
    HydrateWallpaper {
        /// Preset id; unknown ids are ignored.
        wallpaper_id: String,
    },
    /// The auth session ended: close every window and the start menu, and open nothing more.
    SessionEnded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host/runtime layer to execute.
pub enum RuntimeEffect {
    /// Persist the current wallpaper id.
    PersistWallpaper,
    /// Move keyboard focus to a window's frame.
    FocusWindowChrome(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and returns resulting side-effect intents.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { kind } => {
            if let Some(window_id) = open_window(state, OpenWindowRequest::new(kind)) {
                effects.push(RuntimeEffect::FocusWindowChrome(window_id));
            }
        }
        DesktopAction::OpenWindow(request) => {
            if let Some(window_id) = open_window(state, request) {
                effects.push(RuntimeEffect::FocusWindowChrome(window_id));
            }
        }
        DesktopAction::OpenFolder { folder } => {
            if let Some(window_id) = open_folder(state, folder) {
                effects.push(RuntimeEffect::FocusWindowChrome(window_id));
            }
        }
        DesktopAction::ActivateShortcut { id } => {
            let action = state
                .desktop
                .find_activatable(&id)
                .map(|shortcut| shortcut.action.clone());
            let window_id = match action {
                Some(OpenAction::Launch(kind)) => open_window(state, OpenWindowRequest::new(kind)),
                Some(OpenAction::OpenFolder(folder)) => open_folder(state, folder),
                None => None,
            };
            if let Some(window_id) = window_id {
                effects.push(RuntimeEffect::FocusWindowChrome(window_id));
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            let already_on_top = state.windows.is_active(window_id)
                && state
                    .windows
                    .windows()
                    .iter()
                    .map(|window| window.z_order)
                    .max()
                    == state.windows.window(window_id).map(|window| window.z_order);
            if already_on_top {
                state.windows.close_start_menu();
            } else if state.windows.focus(window_id) {
                effects.push(RuntimeEffect::FocusWindowChrome(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => state.windows.minimize(window_id),
        DesktopAction::ToggleMaximizeWindow { window_id }
        | DesktopAction::TitleBarDoubleClick { window_id } => {
            state.windows.toggle_maximize(window_id);
        }
        DesktopAction::CloseWindow { window_id } => state.windows.close(window_id),
        DesktopAction::TaskbarClick { window_id } => {
            state.windows.handle_taskbar_click(window_id);
            if state.windows.is_active(window_id) {
                effects.push(RuntimeEffect::FocusWindowChrome(window_id));
            }
        }
        DesktopAction::ToggleStartMenu => state.windows.toggle_start_menu(),
        DesktopAction::CloseStartMenu => state.windows.close_start_menu(),
        DesktopAction::BeginTitleBarDrag {
            window_id,
            pointer,
            click_count,
        } => {
            state
                .windows
                .begin_title_drag(window_id, pointer, click_count);
        }
        DesktopAction::UpdateTitleBarDrag { pointer } => {
            state.windows.update_title_drag(pointer);
        }
        DesktopAction::EndTitleBarDrag => {
            state.windows.end_title_drag();
        }
        DesktopAction::CancelPointerGestures => {
            state.windows.cancel_title_drag();
            state.desktop.cancel_icon_drag();
            state.desktop.cancel_marquee();
        }
        DesktopAction::BeginIconDrag {
            id,
            pointer,
            additive,
            click_count,
        } => {
            state.windows.close_start_menu();
            state
                .desktop
                .begin_icon_drag(&id, pointer, additive, click_count);
        }
        DesktopAction::UpdateIconDrag { pointer, surface } => {
            let moves = state.desktop.drag_move(pointer);
            if !moves.is_empty() {
                state.desktop.move_shortcuts(&moves, surface);
            }
        }
        DesktopAction::EndIconDrag { pointer, surface } => {
            if let IconReleaseOutcome::Recycled(ids) = state.desktop.end_icon_drag(pointer, surface)
            {
                close_folder_windows(state, &ids);
            }
        }
        DesktopAction::BeginMarquee {
            pointer,
            primary_button,
            click_count,
        } => {
            state.windows.close_start_menu();
            state
                .desktop
                .begin_marquee(pointer, primary_button, click_count);
        }
        DesktopAction::UpdateMarquee { pointer } => state.desktop.update_marquee(pointer),
        DesktopAction::EndMarquee => {
            state.desktop.end_marquee();
        }
        DesktopAction::ClearSelection => state.desktop.clear_selection(),
        DesktopAction::NewFolder { open_window } => {
            let folder = state.desktop.new_folder();
            if open_window {
                if let Some(window_id) = open_folder(state, folder) {
                    effects.push(RuntimeEffect::FocusWindowChrome(window_id));
                }
            }
        }
        DesktopAction::DeleteSelection => {
            let ids = state.desktop.delete_selection();
            close_folder_windows(state, &ids);
        }
        DesktopAction::MoveSelectionToFolder { folder } => {
            state.desktop.move_selection_to_folder(&folder);
        }
        DesktopAction::RestoreShortcuts { ids } => {
            state.desktop.restore_shortcuts(&ids);
        }
        DesktopAction::RestoreAllShortcuts => {
            state.desktop.restore_all();
        }
        DesktopAction::DeleteFile { id } => {
            state.files.delete(&id);
        }
        DesktopAction::RestoreFile { id } => {
            state.files.restore(&id);
        }
        DesktopAction::EmptyRecycleBin => {
            state.files.empty_deleted();
            state.desktop.empty_recycle_bin();
        }
        DesktopAction::SetWallpaper { wallpaper_id } => {
            if is_known_wallpaper(&wallpaper_id) && wallpaper_id != state.wallpaper_id {
                state.wallpaper_id = wallpaper_id;
                effects.push(RuntimeEffect::PersistWallpaper);
            }
        }
        DesktopAction::CycleWallpaper => {
            state.wallpaper_id = next_wallpaper_id(&state.wallpaper_id).to_string();
            effects.push(RuntimeEffect::PersistWallpaper);
        }
        DesktopAction::HydrateWallpaper { wallpaper_id } => {
            if is_known_wallpaper(&wallpaper_id) {
                state.wallpaper_id = wallpaper_id;
            }
        }
        DesktopAction::SessionEnded => {
            state.session_active = false;
            state.windows.close_all();
            state.desktop.cancel_icon_drag();
            state.desktop.cancel_marquee();
        }
    }
    effects
}

/// Opens a window unless the session has ended.
fn open_window(state: &mut DesktopState, request: OpenWindowRequest) -> Option<WindowId> {
    state.session_active.then(|| state.windows.open(request))
}

fn open_folder(state: &mut DesktopState, folder: ShortcutId) -> Option<WindowId> {
    let label = state.desktop.folder_label(&folder)?.to_string();
    open_window(state, OpenWindowRequest::folder(folder, label))
}

/// Closes windows showing folders that just left the desktop.
fn close_folder_windows(state: &mut DesktopState, recycled: &[ShortcutId]) {
    let stale: Vec<WindowId> = state
        .windows
        .windows()
        .iter()
        .filter(|window| {
            window
                .folder
                .as_ref()
                .is_some_and(|folder| recycled.contains(folder))
        })
        .map(|window| window.id)
        .collect();
    for window_id in stale {
        state.windows.close(window_id);
    }
}
