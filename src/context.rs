//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::routes::Route;
use crate::store::{notify, ToastKind, ToastStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    config: StoredValue<AppConfig>,
    toasts: ToastStore,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), config: AppConfig, toasts: ToastStore) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            config: StoredValue::new(config),
            toasts,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Go to another page; the hash is updated so back/forward keep working
    pub fn navigate(&self, route: Route) {
        tracing::debug!(?route, "navigate");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.to_hash());
        }
        self.set_route.set(route);
    }

    /// Called from the hashchange listener
    pub fn sync_route(&self) {
        let route = Route::current();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        notify(self.toasts, ToastKind::Success, message, self.config.with_value(|c| c.toast_millis));
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        notify(self.toasts, ToastKind::Error, message, self.config.with_value(|c| c.toast_millis));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
