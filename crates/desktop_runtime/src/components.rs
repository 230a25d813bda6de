//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod desktop_icons;
mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{
    a11y::{focus_element_by_id, focus_first_menu_item},
    desktop_icons::{DesktopIcons, RecycleBinSlot},
    menus::{DesktopContextMenu, StartMenu},
    taskbar::Taskbar,
    window::DesktopWindow,
};
use crate::{
    host::DesktopHostContext,
    model::{Point, WindowId},
    reducer::DesktopAction,
    wallpaper::wallpaper_preset,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const CONTEXT_MENU_SIZE: (i32, i32) = (200, 180);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DesktopContextMenuState {
    x: i32,
    y: i32,
}

/// DOM id of a window frame; focus effects look windows up by it.
pub(crate) fn window_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_mouse_event(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

fn clamp_popup_position(host: DesktopHostContext, x: i32, y: i32) -> (i32, i32) {
    let viewport = host.viewport_size();
    let (popup_w, popup_h) = CONTEXT_MENU_SIZE;
    let max_x = (viewport.w - popup_w - 6).max(6);
    let max_y = (viewport.h - popup_h - 6).max(6);
    (x.clamp(6, max_x), y.clamp(6, max_y))
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if ev.button() != 0 {
        return;
    }
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// `MouseEvent.buttons` bit for the primary button.
fn primary_button_held(buttons: u16) -> bool {
    buttons & 1 == 1
}

#[derive(Debug, Clone, Copy, Default)]
struct LiveGestures {
    title_drag: bool,
    icon_drag: bool,
    marquee: bool,
}

impl LiveGestures {
    fn read(runtime: DesktopRuntimeContext) -> Self {
        runtime.state.with_untracked(|state| Self {
            title_drag: state.windows.dragging_window().is_some(),
            icon_drag: state.desktop.is_dragging_icons(),
            marquee: state.desktop.marquee_rect().is_some(),
        })
    }

    fn any(self) -> bool {
        self.title_drag || self.icon_drag || self.marquee
    }
}

/// Forwards pointer motion to whichever gesture session is live.
///
/// Motion without the primary button held means the release was never delivered (focus loss,
/// capture lost); the live sessions are cancelled instead of dragged further.
fn update_active_gesture(runtime: DesktopRuntimeContext, pointer: Point, buttons: u16) {
    let live = LiveGestures::read(runtime);
    if !live.any() {
        return;
    }
    if !primary_button_held(buttons) {
        runtime.dispatch_action(DesktopAction::CancelPointerGestures);
        return;
    }
    if live.title_drag {
        runtime.dispatch_action(DesktopAction::UpdateTitleBarDrag { pointer });
    }
    if live.icon_drag {
        let surface = runtime.host.get_value().viewport_size();
        runtime.dispatch_action(DesktopAction::UpdateIconDrag { pointer, surface });
    }
    if live.marquee {
        runtime.dispatch_action(DesktopAction::UpdateMarquee { pointer });
    }
}

fn end_active_gesture(runtime: DesktopRuntimeContext, pointer: Point) {
    let live = LiveGestures::read(runtime);
    if live.title_drag {
        runtime.dispatch_action(DesktopAction::EndTitleBarDrag);
    }
    if live.icon_drag {
        let surface = runtime.host.get_value().viewport_size();
        runtime.dispatch_action(DesktopAction::EndIconDrag { pointer, surface });
    }
    if live.marquee {
        runtime.dispatch_action(DesktopAction::EndMarquee);
    }
}

fn cancel_active_gesture(runtime: DesktopRuntimeContext) {
    if LiveGestures::read(runtime).any() {
        runtime.dispatch_action(DesktopAction::CancelPointerGestures);
    }
}

#[component]
/// Renders the full desktop shell: wallpaper, icons, windows, menus, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let context_menu = create_rw_signal(None::<DesktopContextMenuState>);
    let context_menu_was_open = create_rw_signal(false);

    create_effect(move |_| {
        let is_open = context_menu.get().is_some();
        let was_open = context_menu_was_open.get_untracked();
        if is_open && !was_open {
            context_menu_was_open.set(true);
            let _ = focus_first_menu_item("desktop-context-menu");
        } else if !is_open && was_open {
            context_menu_was_open.set(false);
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if context_menu.get_untracked().is_some() {
            ev.prevent_default();
            context_menu.set(None);
            let _ = focus_element_by_id("desktop-shell-root");
        }
        if runtime.state.with_untracked(|state| state.windows.start_menu_open()) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    let blur_listener = window_event_listener(ev::blur, move |_| cancel_active_gesture(runtime));
    on_cleanup(move || {
        escape_listener.remove();
        blur_listener.remove();
    });

    let on_surface_mousedown = move |ev: web_sys::MouseEvent| {
        context_menu.set(None);
        runtime.dispatch_action(DesktopAction::BeginMarquee {
            pointer: pointer_from_mouse_event(&ev),
            primary_button: ev.button() == 0,
            click_count: u32::try_from(ev.detail()).unwrap_or(0),
        });
    };
    let on_surface_contextmenu = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseStartMenu);
        let (x, y) = clamp_popup_position(runtime.host.get_value(), ev.client_x(), ev.client_y());
        context_menu.set(Some(DesktopContextMenuState { x, y }));
    };

    let background = move || {
        let preset = state.with(|state| wallpaper_preset(&state.wallpaper_id));
        format!("background: {};", preset.css)
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            style=background
            on:pointermove=move |ev: web_sys::PointerEvent| {
                update_active_gesture(runtime, pointer_from_mouse_event(&ev), ev.buttons())
            }
            on:pointerup=move |ev: web_sys::PointerEvent| {
                end_active_gesture(runtime, pointer_from_mouse_event(&ev))
            }
            on:pointercancel=move |_| cancel_active_gesture(runtime)
            on:click=move |_| {
                if context_menu.get_untracked().is_some() {
                    context_menu.set(None);
                }
            }
        >
            <div
                class="desktop-surface"
                on:mousedown=on_surface_mousedown
                on:contextmenu=on_surface_contextmenu
            >
                <DesktopIcons />
                <RecycleBinSlot />
                {move || {
                    state
                        .with(|state| state.desktop.marquee_rect())
                        .filter(|rect| !rect.is_empty())
                        .map(|rect| {
                            view! {
                                <div
                                    class="selection-rect"
                                    aria-hidden="true"
                                    style=format!(
                                        "left:{}px;top:{}px;width:{}px;height:{}px;",
                                        rect.x,
                                        rect.y,
                                        rect.w,
                                        rect.h,
                                    )
                                ></div>
                            }
                        })
                }}
            </div>

            <div class="window-layer">
                <For
                    each=move || state.with(|state| state.windows.windows().to_vec())
                    key=|win| win.id.0
                    let:win
                >
                    <DesktopWindow window_id=win.id />
                </For>
            </div>

            <Show when=move || !state.with(|state| state.session_active) fallback=|| ()>
                <div class="signed-out-notice" role="status">
                    "You are signed out. Reload the page to start a new guest session."
                </div>
            </Show>

            <DesktopContextMenu context_menu />
            <StartMenu />
            <Taskbar />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_dom_ids_are_stable_per_window() {
        assert_eq!(window_dom_id(WindowId(7)), "desktop-window-7");
        assert_ne!(window_dom_id(WindowId(7)), window_dom_id(WindowId(8)));
    }

    #[test]
    fn only_the_primary_button_bit_keeps_a_gesture_alive() {
        assert!(primary_button_held(1));
        assert!(primary_button_held(1 | 2));
        assert!(!primary_button_held(0));
        assert!(!primary_button_held(2));
    }

    #[test]
    fn context_menu_position_stays_on_screen() {
        let host = DesktopHostContext::default();
        let viewport = host.viewport_size();
        let (x, y) = clamp_popup_position(host.clone(), viewport.w, viewport.h);
        assert_eq!(x, viewport.w - CONTEXT_MENU_SIZE.0 - 6);
        assert_eq!(y, viewport.h - CONTEXT_MENU_SIZE.1 - 6);
        assert_eq!(clamp_popup_position(host, -20, 3), (6, 6));
    }
}
