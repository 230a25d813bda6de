use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, MemoryNotesService, MemorySessionService};

use crate::WebPrefsStore;

/// Returns the browser preference store.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Builds the service bundle used by the browser entry point.
///
/// The session starts signed in as a local guest; there is no remote auth provider in this host.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(prefs_store()),
        session: Rc::new(MemorySessionService::signed_in("guest", "local-guest")),
        notes: Rc::new(MemoryNotesService::default()),
        host_strategy: HostStrategy::Browser,
    }
}

#[cfg(test)]
mod tests {
    use platform_host::SessionService;

    use super::*;

    #[test]
    fn browser_bundle_reports_browser_strategy_and_guest_session() {
        let services = build_host_services();
        assert_eq!(services.host_strategy.as_str(), "browser");
        assert!(services.session.is_signed_in());
    }
}
