//! Dashboard View Model
//!
//! Typed mirror of what the server last reported, wrapped in a
//! `reactive_stores::Store` for fine-grained rendering. The reconciliation
//! methods are plain `&mut self` functions so they can be tested without a
//! DOM or reactive runtime.

use std::collections::{BTreeMap, BTreeSet};

use reactive_stores::Store;

use crate::api::OrderStats;
use crate::config::DashboardConfig;
use crate::models::{Amount, CartLine, CartResponse, MenuItem, Notification, OrderSummary, SalesChart};

/// Cart as last reported by the server. Never computed locally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    pub count: u32,
    pub total: Amount,
    /// An add response changed the cart without reporting its lines, so
    /// `lines` no longer match `count`
    pub lines_stale: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub results: Vec<MenuItem>,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Global dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    pub cart: CartState,
    /// Menu items with an add-to-cart request in flight
    pub adding: BTreeSet<u32>,
    pub notifications: Vec<Notification>,
    pub notification_count: usize,
    /// Keys that have a stat tile on this page
    pub stat_keys: Vec<String>,
    /// Display text per stat key
    pub stats: BTreeMap<String, String>,
    pub sales_chart: Option<SalesChart>,
    pub search: SearchState,
    pub menu_items: Vec<MenuItem>,
    pub orders: Vec<OrderSummary>,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
    /// Poll sources whose previous tick failed, so a dead connection
    /// produces one toast rather than one per tick
    failing_polls: BTreeSet<String>,
}

/// Type alias for the store
pub type AppStore = Store<DashboardState>;

impl DashboardState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            cart: CartState {
                lines: config.cart.lines.clone(),
                count: config.cart.count,
                total: config.cart.total,
                lines_stale: false,
            },
            stat_keys: config.stat_keys.clone(),
            menu_items: config.menu_items.clone(),
            orders: config.orders.clone(),
            ..Default::default()
        }
    }

    // ========================
    // Cart
    // ========================

    /// The add endpoint reports only totals. Lines already on display are
    /// marked stale rather than patched locally.
    pub fn apply_cart_added(&mut self, resp: &CartResponse) {
        self.apply_cart_totals(resp);
        if !self.cart.lines.is_empty() {
            self.cart.lines_stale = true;
        }
    }

    fn apply_cart_totals(&mut self, resp: &CartResponse) {
        if let Some(count) = resp.cart_count {
            self.cart.count = count;
        }
        if let Some(total) = resp.cart_total {
            self.cart.total = total;
        }
    }

    /// Apply an update response; a `new_quantity` of 0 means the server
    /// dropped the line.
    pub fn apply_cart_updated(&mut self, menu_item_id: u32, resp: &CartResponse) {
        match resp.new_quantity {
            Some(0) => self.cart.lines.retain(|line| line.menu_item_id != menu_item_id),
            Some(quantity) => {
                if let Some(line) = self.cart.lines.iter_mut().find(|l| l.menu_item_id == menu_item_id) {
                    line.quantity = quantity;
                }
            }
            None => {}
        }
        self.apply_cart_totals(resp);
    }

    pub fn apply_cart_removed(&mut self, menu_item_id: u32, resp: &CartResponse) {
        self.cart.lines.retain(|line| line.menu_item_id != menu_item_id);
        self.apply_cart_totals(resp);
    }

    pub fn apply_cart_cleared(&mut self, resp: &CartResponse) {
        self.cart.lines.clear();
        self.cart.lines_stale = false;
        self.cart.count = resp.cart_count.unwrap_or(0);
        self.cart.total = resp.cart_total.unwrap_or_default();
    }

    pub fn set_cart_count(&mut self, count: u32) {
        self.cart.count = count;
    }

    pub fn begin_adding(&mut self, menu_item_id: u32) {
        self.adding.insert(menu_item_id);
    }

    pub fn finish_adding(&mut self, menu_item_id: u32) {
        self.adding.remove(&menu_item_id);
    }

    // ========================
    // Polled widgets
    // ========================

    /// Wholesale replacement; server order is kept.
    pub fn replace_notifications(&mut self, notifications: Vec<Notification>) {
        self.notification_count = notifications.len();
        self.notifications = notifications;
    }

    /// Update tiles for keys present in `stats`. Keys without a tile are
    /// ignored and tiles missing from the response keep their value.
    /// Returns how many tiles changed.
    pub fn apply_stats(&mut self, stats: &OrderStats) -> usize {
        let mut updated = 0;
        for (key, value) in stats {
            if self.stat_keys.iter().any(|k| k == key) {
                self.stats.insert(key.clone(), stat_text(value));
                updated += 1;
            }
        }
        updated
    }

    pub fn replace_sales_chart(&mut self, chart: SalesChart) {
        self.sales_chart = Some(chart);
    }

    /// Record a poll failure. Returns true when this is the first failure
    /// since the source last succeeded.
    pub fn poll_failed(&mut self, source: &str) -> bool {
        self.failing_polls.insert(source.to_string())
    }

    pub fn poll_recovered(&mut self, source: &str) {
        self.failing_polls.remove(source);
    }

    // ========================
    // Search
    // ========================

    pub fn show_search_results(&mut self, mut results: Vec<MenuItem>, limit: usize) {
        results.truncate(limit);
        self.search.results = results;
        self.search.visible = true;
    }

    pub fn hide_search(&mut self) {
        self.search.results.clear();
        self.search.visible = false;
    }

    // ========================
    // Toasts
    // ========================

    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Text for a stat tile: strings verbatim, numbers as printed by JSON
pub fn stat_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
