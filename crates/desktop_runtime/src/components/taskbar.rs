use std::time::Duration;

use super::{a11y::focus_first_menu_item, use_desktop_runtime};
use crate::{model::WindowRecord, reducer::DesktopAction};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockReading {
    hour: u32,
    minute: u32,
}

impl ClockReading {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    fn label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

fn task_button_label(win: &WindowRecord) -> String {
    if win.minimized {
        format!("{} (minimized)", win.title)
    } else {
        win.title.clone()
    }
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = create_rw_signal(ClockReading::now());
    let user_menu_open = create_rw_signal(false);
    let start_menu_was_open = create_rw_signal(false);

    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(ClockReading::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    create_effect(move |_| {
        let is_open = state.with(|state| state.windows.start_menu_open());
        let was_open = start_menu_was_open.get_untracked();
        if is_open && !was_open {
            start_menu_was_open.set(true);
            let _ = focus_first_menu_item("desktop-start-menu");
        } else if !is_open && was_open {
            start_menu_was_open.set(false);
        }
    });

    let session_user = create_rw_signal(
        runtime
            .host
            .get_value()
            .session_service()
            .current_session()
            .map(|session| session.user_id),
    );
    let user_label = move || session_user.get().unwrap_or_else(|| "Signed out".to_string());
    let sign_out = move |_| {
        user_menu_open.set(false);
        runtime.host.get_value().session_service().sign_out();
        session_user.set(None);
        logging::log!("session ended; closing all windows");
        runtime.dispatch_action(DesktopAction::SessionEnded);
    };

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <button
                id="taskbar-start-button"
                type="button"
                class="start-button"
                aria-haspopup="menu"
                aria-controls="desktop-start-menu"
                aria-expanded=move || state.with(|state| state.windows.start_menu_open())
                on:click=move |_| {
                    user_menu_open.set(false);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                "Start 98"
            </button>
            <div class="taskbar-tasks" role="group" aria-label="Open windows">
                <For
                    each=move || {
                        state.with(|state| {
                            state.windows.ordered_for_taskbar().cloned().collect::<Vec<_>>()
                        })
                    }
                    key=|win| (win.id.0, win.minimized, win.title.clone())
                    let:win
                >
                    {{
                        let window_id = win.id;
                        let active = move || {
                            state.with(|state| {
                                state.windows.is_active(window_id)
                                    && state.windows.window(window_id).is_some_and(|win| !win.minimized)
                            })
                        };
                        view! {
                            <button
                                type="button"
                                class="task-button"
                                class:active=active
                                aria-pressed=active
                                title=task_button_label(&win)
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::TaskbarClick { window_id })
                                }
                            >
                                {win.title.clone()}
                            </button>
                        }
                    }}
                </For>
            </div>
            <div class="taskbar-tray">
                <button
                    id="taskbar-user-button"
                    type="button"
                    class="tray-user"
                    aria-haspopup="menu"
                    aria-expanded=move || user_menu_open.get()
                    on:click=move |_| user_menu_open.update(|open| *open = !*open)
                >
                    {user_label}
                </button>
                <Show when=move || user_menu_open.get() fallback=|| ()>
                    <div id="taskbar-user-menu" class="context-menu tray-menu" role="menu">
                        <button
                            type="button"
                            role="menuitem"
                            class="context-menu-item"
                            on:click=sign_out
                        >
                            "Sign out"
                        </button>
                    </div>
                </Show>
                <span class="tray-clock" role="timer" aria-live="off">
                    {move || clock.get().label()}
                </span>
            </div>
        </footer>
    }
}
