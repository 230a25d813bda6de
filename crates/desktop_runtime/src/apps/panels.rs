//! Static and state-backed window bodies: files, recycle bin, settings, folders, and the small
//! informational panels.

use leptos::*;

use crate::{
    components::use_desktop_runtime,
    desktop::RecycledShortcut,
    files::FileItem,
    model::WindowId,
    reducer::DesktopAction,
    shortcuts::{Shortcut, ShortcutId},
    wallpaper::WALLPAPERS,
};

#[component]
pub(super) fn FileManager() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let files = move || runtime.state.with(|state| state.files.files().to_vec());

    view! {
        <div class="app-panel">
            <h4>"My Files"</h4>
            <div class="file-list">
                {move || {
                    let files = files();
                    if files.is_empty() {
                        return view! {
                            <div class="file-card">"No files here. Try restoring from Recycle."</div>
                        }
                        .into_view();
                    }
                    files
                        .into_iter()
                        .map(|file: FileItem| {
                            let id = file.id.clone();
                            view! {
                                <div class="file-card">
                                    <strong>{file.name}</strong>
                                    <div>{file.kind.label()}</div>
                                    <button
                                        type="button"
                                        class="menu-button"
                                        on:click=move |_| {
                                            runtime
                                                .dispatch_action(DesktopAction::DeleteFile {
                                                    id: id.clone(),
                                                })
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub(super) fn RecycleBin() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icons = move || runtime.state.with(|state| state.desktop.recycled().to_vec());
    let files = move || runtime.state.with(|state| state.files.deleted().to_vec());

    view! {
        <div class="app-panel">
            <h4>"Recycle Bin"</h4>
            <h5>"Desktop Items"</h5>
            <div class="file-list">
                {move || {
                    let icons = icons();
                    if icons.is_empty() {
                        return view! { <div class="file-card">"No desktop items here."</div> }
                            .into_view();
                    }
                    icons
                        .into_iter()
                        .map(|entry: RecycledShortcut| {
                            let id = entry.shortcut.id.clone();
                            view! {
                                <div class="file-card">
                                    <strong>{entry.shortcut.label}</strong>
                                    <div>{entry.shortcut.variant.token()}</div>
                                    <button
                                        type="button"
                                        class="menu-button"
                                        on:click=move |_| {
                                            runtime
                                                .dispatch_action(DesktopAction::RestoreShortcuts {
                                                    ids: vec![id.clone()],
                                                })
                                        }
                                    >
                                        "Restore"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <h5>"Files"</h5>
            <div class="file-list">
                {move || {
                    let files = files();
                    if files.is_empty() {
                        return view! { <div class="file-card">"Recycle Bin is empty."</div> }
                            .into_view();
                    }
                    files
                        .into_iter()
                        .map(|file: FileItem| {
                            let id = file.id.clone();
                            view! {
                                <div class="file-card">
                                    <strong>{file.name}</strong>
                                    <div>{file.kind.label()}</div>
                                    <button
                                        type="button"
                                        class="menu-button"
                                        on:click=move |_| {
                                            runtime
                                                .dispatch_action(DesktopAction::RestoreFile {
                                                    id: id.clone(),
                                                })
                                        }
                                    >
                                        "Restore"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="panel-actions">
                <button
                    type="button"
                    class="menu-button"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::EmptyRecycleBin)
                >
                    "Empty Recycle Bin"
                </button>
                <Show when=move || !icons().is_empty()>
                    <button
                        type="button"
                        class="menu-button"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::RestoreAllShortcuts)
                    >
                        "Restore All Desktop Items"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub(super) fn Settings() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected = move || runtime.state.with(|state| state.wallpaper_id.clone());

    view! {
        <div class="app-panel">
            <h4>"Display Settings"</h4>
            <p>"Select wallpaper:"</p>
            <div class="wallpaper-picker">
                {WALLPAPERS
                    .iter()
                    .map(|preset| {
                        let id = preset.id;
                        view! {
                            <button
                                type="button"
                                class="wallpaper-option"
                                class:selected=move || selected() == id
                                aria-label=format!("Select {}", preset.label)
                                style=format!("background: {};", preset.css)
                                on:click=move |_| {
                                    runtime
                                        .dispatch_action(DesktopAction::SetWallpaper {
                                            wallpaper_id: id.to_string(),
                                        })
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="panel-hint">"Tip: Use Start > Help > Change wallpaper to cycle wallpapers."</p>
            <p class="panel-hint">
                "Drag desktop icons to the bottom-right recycle zone to remove them; drag anywhere to rearrange."
            </p>
        </div>
    }
}

#[component]
pub(super) fn FolderView(folder: Option<ShortcutId>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let name = {
        let folder = folder.clone();
        move || {
            runtime.state.with(|state| {
                folder
                    .as_ref()
                    .and_then(|id| state.desktop.folder_label(id))
                    .unwrap_or("Folder")
                    .to_string()
            })
        }
    };
    let entries = move || {
        runtime.state.with(|state| {
            folder
                .as_ref()
                .map(|id| state.desktop.folder_contents(id).to_vec())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="app-panel">
            <h4>{name}</h4>
            <div class="file-list">
                {move || {
                    let entries = entries();
                    if entries.is_empty() {
                        return view! {
                            <div class="file-card">"Folder is empty. Move shortcuts here from desktop."</div>
                        }
                        .into_view();
                    }
                    entries
                        .into_iter()
                        .map(|entry: Shortcut| {
                            let id = entry.id.clone();
                            view! {
                                <div class="file-card">
                                    <strong>{entry.label}</strong>
                                    <div>{entry.variant.token()}</div>
                                    <button
                                        type="button"
                                        class="menu-button"
                                        on:click=move |_| {
                                            runtime
                                                .dispatch_action(DesktopAction::ActivateShortcut {
                                                    id: id.clone(),
                                                })
                                        }
                                    >
                                        "Open"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub(super) fn AboutPanel(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="app-panel about-content">
            <div class="about-header">
                <div class="about-icon" aria-hidden="true"></div>
                <div>
                    <div>"RetroOS 98"</div>
                    <div>"A web desktop in the spirit of the late nineties."</div>
                </div>
            </div>
            <p>"Windows, icons, folders, and a game of Minesweeper, all running in your browser."</p>
            <button
                type="button"
                class="menu-button"
                on:click=move |_| runtime.dispatch_action(DesktopAction::CloseWindow { window_id })
            >
                "OK"
            </button>
        </div>
    }
}

struct Drive {
    name: &'static str,
    kind: &'static str,
    free: &'static str,
}

const DRIVES: [Drive; 2] = [
    Drive {
        name: "Local Disk (C:)",
        kind: "Fixed",
        free: "2.3 GB free of 8 GB",
    },
    Drive {
        name: "Retro Data (D:)",
        kind: "Fixed",
        free: "1.1 GB free of 4 GB",
    },
];

#[component]
pub(super) fn ComputerPanel() -> impl IntoView {
    view! {
        <div class="app-panel">
            <h4>"My Computer"</h4>
            <div class="file-list">
                {DRIVES
                    .iter()
                    .map(|drive| {
                        view! {
                            <div class="file-card">
                                <strong>{drive.name}</strong>
                                <div>{format!("{} drive", drive.kind)}</div>
                                <div>{drive.free}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="panel-hint">"RetroOS 98, a simulated environment."</p>
        </div>
    }
}

#[component]
pub(super) fn PaintPanel() -> impl IntoView {
    view! {
        <div class="app-panel app-paint">
            <div class="app-toolbar" role="group" aria-label="Paint tools">
                <button type="button" class="menu-button">"Brush"</button>
                <button type="button" class="menu-button">"Eraser"</button>
                <button type="button" class="menu-button">"Clear"</button>
            </div>
            <div class="paint-canvas" aria-label="Drawing canvas"></div>
        </div>
    }
}
