use leptos::{logging, spawn_local, SignalGetUntracked};

use crate::{components::DesktopRuntimeContext, host::DesktopHostContext, persistence};

pub(super) fn persist_wallpaper(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let wallpaper_id = runtime.state.get_untracked().wallpaper_id;
    spawn_local(async move {
        if let Err(err) =
            persistence::persist_wallpaper(host.prefs_store().as_ref(), &wallpaper_id).await
        {
            logging::warn!("persist wallpaper failed: {err}");
        }
    });
}
