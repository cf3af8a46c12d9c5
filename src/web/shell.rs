//! Browser shell: router navigation and `window.alert`.

use crate::navigation::{Route, Shell};
use leptos_router::{NavigateOptions, hooks::use_navigate};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct BrowserShell {
    navigate: Arc<dyn Fn(&str) + Send + Sync>,
}

impl BrowserShell {
    /// Must be called inside the router, where `use_navigate` is available.
    #[must_use]
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Arc::new(move |path| navigate(path, NavigateOptions::default())),
        }
    }
}

impl Shell for BrowserShell {
    fn navigate(&self, route: &Route) {
        info!(%route, "navigating");
        (self.navigate)(&route.path());
    }

    fn alert(&self, message: &str) {
        let shown = web_sys::window().is_some_and(|window| window.alert_with_message(message).is_ok());
        if !shown {
            warn!("unable to show alert");
        }
    }
}
