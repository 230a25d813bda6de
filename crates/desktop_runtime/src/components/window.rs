use super::{
    pointer_from_mouse_event, stop_mouse_event, try_set_pointer_capture, use_desktop_runtime,
    window_dom_id,
};
use crate::{
    apps::AppBody,
    config::TASKBAR_HEIGHT_PX,
    model::{WindowId, WindowRecord},
    reducer::DesktopAction,
};
use leptos::*;

fn window_style(win: &WindowRecord) -> String {
    if win.maximized {
        format!(
            "left:0px;top:0px;width:100%;height:calc(100% - {TASKBAR_HEIGHT_PX}px);z-index:{};",
            win.z_order
        )
    } else {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            win.position.x, win.position.y, win.size.w, win.size.h, win.z_order
        )
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .with(|state| state.windows.window(window_id).cloned())
    });
    let active = move || runtime.state.with(|state| state.windows.is_active(window_id));

    let focus = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    };
    let begin_move = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginTitleBarDrag {
            window_id,
            pointer: pointer_from_mouse_event(&ev),
            click_count: u32::try_from(ev.detail()).unwrap_or(0),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::TitleBarDoubleClick { window_id });
    };

    let Some(initial) = runtime
        .state
        .with_untracked(|state| state.windows.window(window_id).cloned())
    else {
        return ().into_view();
    };
    let is_maximized = move || window.with(|win| win.as_ref().is_some_and(|win| win.maximized));
    let title = move || window.with(|win| win.as_ref().map(|win| win.title.clone()).unwrap_or_default());

    view! {
        <section
            id=window_dom_id(window_id)
            class="desktop-window"
            class:focused=active
            class:minimized=move || window.with(|win| win.as_ref().is_some_and(|win| win.minimized))
            class:maximized=is_maximized
            style=move || window.with(|win| win.as_ref().map(window_style).unwrap_or_default())
            tabindex="-1"
            role="dialog"
            aria-label=title
            on:mousedown=focus
        >
            <header
                class="titlebar"
                on:pointerdown=move |ev| try_set_pointer_capture(&ev)
                on:mousedown=begin_move
                on:dblclick=titlebar_double_click
            >
                <span class="titlebar-title">{title}</span>
                <div
                    class="titlebar-controls"
                    on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                >
                    <button
                        type="button"
                        aria-label="Minimize window"
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        }
                    >
                        "_"
                    </button>
                    <button
                        type="button"
                        aria-label=move || {
                            if is_maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::ToggleMaximizeWindow { window_id });
                        }
                    >
                        {move || if is_maximized() { "\u{2750}" } else { "\u{25a1}" }}
                    </button>
                    <button
                        type="button"
                        aria-label="Close window"
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        }
                    >
                        "X"
                    </button>
                </div>
            </header>
            <div class="window-body">
                <AppBody window_id kind=initial.kind folder=initial.folder />
            </div>
        </section>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppKind, Point, Size};

    fn record(maximized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId(3),
            kind: AppKind::Notepad,
            title: "Notepad".to_string(),
            position: Point::new(40, 30),
            size: Size::new(400, 300),
            minimized: false,
            maximized,
            z_order: 5,
            restore: None,
            folder: None,
        }
    }

    #[test]
    fn restored_windows_use_their_geometry() {
        assert_eq!(
            window_style(&record(false)),
            "left:40px;top:30px;width:400px;height:300px;z-index:5;"
        );
    }

    #[test]
    fn maximized_windows_fill_the_desktop_above_the_taskbar() {
        assert_eq!(
            window_style(&record(true)),
            "left:0px;top:0px;width:100%;height:calc(100% - 38px);z-index:5;"
        );
    }
}
