use super::{
    a11y::{focus_element_by_id, handle_menu_roving_keydown},
    stop_mouse_event, use_desktop_runtime, DesktopContextMenuState,
};
use crate::{
    apps::{start_menu_sections, StartMenuItem},
    reducer::DesktopAction,
};
use leptos::*;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = move || runtime.state.with(|state| state.windows.start_menu_open());

    let choose = move |item: StartMenuItem| {
        runtime.dispatch_action(item.command.action());
        runtime.dispatch_action(DesktopAction::CloseStartMenu);
    };

    view! {
        <Show when=open fallback=|| ()>
            <div
                id="desktop-start-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if handle_menu_roving_keydown(&ev, "desktop-start-menu") {
                        return;
                    }
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                        let _ = focus_element_by_id("taskbar-start-button");
                    }
                }
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-banner" aria-hidden="true">"RetroOS 98"</div>
                {start_menu_sections()
                    .iter()
                    .map(|section| {
                        view! {
                            <div class="start-menu-section" role="group" aria-label=section.label>
                                <div class="start-menu-heading">{section.label}</div>
                                {section
                                    .items
                                    .iter()
                                    .map(|item| {
                                        let item = *item;
                                        view! {
                                            <button
                                                id=format!("start-menu-item-{}", item.id)
                                                type="button"
                                                role="menuitem"
                                                class="start-menu-item"
                                                on:click=move |_| choose(item)
                                            >
                                                {item.label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}

#[component]
pub(super) fn DesktopContextMenu(
    context_menu: RwSignal<Option<DesktopContextMenuState>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let run = move |action: DesktopAction| {
        context_menu.set(None);
        runtime.dispatch_action(action);
    };

    view! {
        {move || {
            let menu = context_menu.get()?;
            let (has_selection, folders) = state.with(|state| {
                (
                    !state.desktop.selection().is_empty(),
                    state.desktop.folder_options(),
                )
            });

            Some(view! {
                <div
                    id="desktop-context-menu"
                    class="context-menu"
                    role="menu"
                    aria-label="Desktop context menu"
                    style=format!("left:{}px;top:{}px;", menu.x, menu.y)
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if handle_menu_roving_keydown(&ev, "desktop-context-menu") {
                            return;
                        }
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            ev.stop_propagation();
                            context_menu.set(None);
                            let _ = focus_element_by_id("desktop-shell-root");
                        }
                    }
                    on:mousedown=move |ev| ev.stop_propagation()
                    on:contextmenu=move |ev| stop_mouse_event(&ev)
                >
                    <button
                        id="desktop-context-menu-refresh"
                        type="button"
                        role="menuitem"
                        class="context-menu-item"
                        on:click=move |_| run(DesktopAction::ClearSelection)
                    >
                        "Refresh"
                    </button>
                    <button
                        id="desktop-context-menu-new-folder"
                        type="button"
                        role="menuitem"
                        class="context-menu-item"
                        on:click=move |_| run(DesktopAction::NewFolder { open_window: false })
                    >
                        "New Folder"
                    </button>
                    {has_selection.then(|| view! {
                        <button
                            id="desktop-context-menu-delete"
                            type="button"
                            role="menuitem"
                            class="context-menu-item"
                            on:click=move |_| run(DesktopAction::DeleteSelection)
                        >
                            "Delete"
                        </button>
                    })}
                    {(has_selection && !folders.is_empty()).then(|| view! {
                        <div class="context-menu-separator" role="separator"></div>
                        <div class="context-menu-heading">"Move to Folder"</div>
                        {folders
                            .into_iter()
                            .map(|(folder, label)| {
                                let item_id = format!("desktop-context-menu-move-{folder}");
                                view! {
                                    <button
                                        id=item_id
                                        type="button"
                                        role="menuitem"
                                        class="context-menu-item"
                                        on:click=move |_| {
                                            run(DesktopAction::MoveSelectionToFolder {
                                                folder: folder.clone(),
                                            })
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    })}
                </div>
            })
        }}
    }
}
