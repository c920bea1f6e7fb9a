//! Dashboard Context
//!
//! The controller, store and configuration handed to every component via
//! the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::host::BrowserHost;
use crate::state::AppStore;

pub type BrowserController = DashboardController<HttpApi, BrowserHost, AppStore>;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// The controller holds `Rc`s, so it lives in local storage
    controller: StoredValue<BrowserController, LocalStorage>,
    config: StoredValue<DashboardConfig>,
    pub store: AppStore,
}

impl DashboardContext {
    pub fn new(controller: BrowserController, store: AppStore, config: DashboardConfig) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            config: StoredValue::new(config),
            store,
        }
    }

    pub fn controller(&self) -> BrowserController {
        self.controller.get_value()
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&DashboardConfig) -> R) -> R {
        self.config.with_value(f)
    }

    /// Dismiss a toast; a no-op once the dashboard has been torn down
    pub fn dismiss_toast(&self, id: u64) {
        if let Some(controller) = self.controller.try_get_value() {
            controller.dismiss_toast(id);
        }
    }
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext should be provided")
}
