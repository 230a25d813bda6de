use super::{
    a11y::is_activation_key, pointer_from_mouse_event, stop_mouse_event, try_set_pointer_capture,
    use_desktop_runtime,
};
use crate::{
    reducer::DesktopAction,
    shortcuts::{Shortcut, ShortcutId},
};
use leptos::*;

fn icon_dom_id(id: &ShortcutId) -> String {
    format!("desktop-icon-{id}")
}

#[component]
fn IconGlyph(shortcut: Shortcut) -> impl IntoView {
    view! {
        <span
            class=format!("icon-glyph icon-{}", shortcut.variant.token())
            style=format!("background-color:{};", shortcut.color)
            aria-hidden="true"
        ></span>
        <span class="icon-label">{shortcut.label}</span>
    }
}

#[component]
fn DesktopIcon(id: ShortcutId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let Some(shortcut) = state.with_untracked(|state| state.desktop.shortcut(&id).cloned()) else {
        return ().into_view();
    };
    let position = {
        let id = id.clone();
        create_memo(move |_| {
            state.with(|state| state.desktop.shortcut(&id).and_then(Shortcut::position))
        })
    };
    let selected = {
        let id = id.clone();
        move || state.with(|state| state.desktop.selection().contains(&id))
    };

    let begin_drag = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if ev.button() != 0 {
                return;
            }
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginIconDrag {
                id: id.clone(),
                pointer: pointer_from_mouse_event(&ev),
                additive: ev.ctrl_key() || ev.meta_key(),
                click_count: u32::try_from(ev.detail()).unwrap_or(0),
            });
        }
    };
    let activate = {
        let id = id.clone();
        move || runtime.dispatch_action(DesktopAction::ActivateShortcut { id: id.clone() })
    };
    let activate_on_key = activate.clone();

    view! {
        <div
            id=icon_dom_id(&id)
            class="desktop-icon"
            class:selected=selected
            role="button"
            tabindex="0"
            aria-label=shortcut.label.clone()
            style=move || {
                position
                    .get()
                    .map(|position| format!("left:{}px;top:{}px;", position.x, position.y))
                    .unwrap_or_default()
            }
            on:pointerdown=move |ev| try_set_pointer_capture(&ev)
            on:mousedown=begin_drag
            on:dblclick=move |ev| {
                stop_mouse_event(&ev);
                activate();
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    activate_on_key();
                }
            }
        >
            <IconGlyph shortcut />
        </div>
    }
    .into_view()
}

#[component]
/// Free-form desktop icons, keyed by shortcut id.
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let ids = move || {
        runtime.state.with(|state| {
            state
                .desktop
                .shortcuts()
                .iter()
                .filter(|shortcut| shortcut.position().is_some())
                .map(|shortcut| shortcut.id.clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <For each=ids key=|id| id.clone() let:id>
            <DesktopIcon id />
        </For>
    }
}

#[component]
/// Recycle Bin pinned to the bottom-right corner, outside the free-form layout.
pub(super) fn RecycleBinSlot() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let shortcut = state.with_untracked(|state| state.desktop.recycle_bin().clone());
    let id = shortcut.id.clone();
    let key_id = id.clone();
    let has_items = move || state.with(|state| !state.desktop.recycled().is_empty());
    let drop_armed = move || state.with(|state| state.desktop.is_dragging_icons());

    view! {
        <div
            id=icon_dom_id(&shortcut.id)
            class="desktop-icon recycle-slot"
            class:has-items=has_items
            class:drop-armed=drop_armed
            role="button"
            tabindex="0"
            aria-label=shortcut.label.clone()
            on:mousedown=move |ev| ev.stop_propagation()
            on:dblclick=move |ev| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::ActivateShortcut { id: id.clone() });
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    runtime.dispatch_action(DesktopAction::ActivateShortcut { id: key_id.clone() });
                }
            }
        >
            <IconGlyph shortcut />
        </div>
    }
}
