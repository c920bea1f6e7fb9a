//! Canteen Dashboard App
//!
//! Root component: wires configuration, store and controller together,
//! starts background polling and lays out the widgets.

use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::components::{
    CartBadge, CartPanel, MenuGrid, MenuSearch, NotificationBell, OrderTable, SalesChartPanel, StatsPanel, ToastStack,
};
use crate::config::DashboardConfig;
use crate::context::DashboardContext;
use crate::controller::{ControllerSettings, DashboardController};
use crate::host::BrowserHost;
use crate::poller::spawn_poller;
use crate::state::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_document();
    log!(
        "[APP] Starting dashboard: {} cart lines, {} menu items, {} orders",
        config.cart.lines.len(),
        config.menu_items.len(),
        config.orders.len()
    );

    // State
    let store = Store::new(DashboardState::from_config(&config));
    let api = HttpApi::new(config.base_url.clone(), config.csrf_token.clone());
    let controller = DashboardController::new(api, BrowserHost, store, ControllerSettings::from(&config));
    let poll_interval = config.poll_interval();
    let show_cart_panel = config.show_cart_panel;

    // Provide context to all children
    let ctx = DashboardContext::new(controller, store, config);
    provide_context(ctx);

    // The rendered count may predate other tabs' changes
    spawn_local(async move {
        ctx.controller().refresh_cart_count().await;
    });

    // Notifications and stats: now, then every interval, until unmount
    let poller = spawn_poller(poll_interval, move || {
        let ctrl = ctx.controller();
        async move { ctrl.poll_all().await }
    });
    on_cleanup(move || poller.cancel());

    view! {
        <div class="dashboard-layout">
            <header class="dashboard-header">
                <h1>"Canteen"</h1>
                <MenuSearch />
                <div class="header-actions">
                    <NotificationBell />
                    <CartBadge />
                </div>
            </header>

            <main class="dashboard-main">
                <StatsPanel />
                <SalesChartPanel />
                <MenuGrid />
                <OrderTable />
            </main>

            <Show when=move || show_cart_panel>
                <aside class="dashboard-sidebar">
                    <CartPanel />
                </aside>
            </Show>

            <ToastStack />
        </div>
    }
}
