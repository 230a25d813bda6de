//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and host
//! bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::HostServices;

use crate::{
    config::ShellConfig,
    effect_executor,
    host::DesktopHostContext,
    model::DesktopState,
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Shell geometry overrides; defaults apply when omitted.
    #[prop(optional)]
    config: Option<ShellConfig>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::new(config.unwrap_or_default()));
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        let new_effects = reduce_desktop(&mut desktop, action);
        if desktop != previous {
            state.set(desktop);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);
    logging::log!(
        "desktop runtime started (host strategy: {})",
        host.get_value().host_strategy_name()
    );

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
