use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            match persistence::load_wallpaper(host.prefs_store().as_ref()).await {
                Ok(Some(wallpaper_id)) => {
                    dispatch.call(DesktopAction::HydrateWallpaper { wallpaper_id });
                }
                Ok(None) => {}
                Err(err) => logging::warn!("wallpaper hydration failed: {err}"),
            }
        });
    });
}
