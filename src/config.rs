//! Dashboard Configuration
//!
//! Read once at startup from the server-rendered page: the CSRF token from
//! a meta tag or the hidden form field, tunables and bootstrap data from an
//! optional `<script id="dashboard-config" type="application/json">` block.

use std::time::Duration;

use leptos::logging::warn;
use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::error::DashboardError;
use crate::models::{CartSnapshot, MenuItem, OrderSummary, StatusOption};

/// Element id of the JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Order status options (matches backend)
const ORDER_STATUSES: &[(&str, &str)] = &[
    ("PENDING", "Pending"),
    ("CONFIRMED", "Confirmed"),
    ("PREPARING", "Preparing"),
    ("READY", "Ready"),
    ("COMPLETED", "Completed"),
    ("CANCELLED", "Cancelled"),
];

/// Stat tiles rendered when the page does not list its own
const DEFAULT_STAT_KEYS: &[&str] = &["total", "today", "pending", "completed"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix for every endpoint path; empty means same origin
    pub base_url: String,
    pub csrf_token: Option<String>,
    pub poll_interval_ms: u32,
    pub search_debounce_ms: u32,
    /// Shorter (trimmed) queries hide results instead of searching
    pub min_query_len: usize,
    pub search_result_limit: usize,
    pub reload_delay_ms: u32,
    pub toast_millis: u32,
    pub currency: String,
    pub stat_keys: Vec<String>,
    pub show_sales_chart: bool,
    /// Set on the cart page, which is the only page that lists cart lines
    pub show_cart_panel: bool,
    pub order_statuses: Vec<StatusOption>,

    // Bootstrap data
    pub cart: CartSnapshot,
    pub menu_items: Vec<MenuItem>,
    pub orders: Vec<OrderSummary>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            csrf_token: None,
            poll_interval_ms: 30_000,
            search_debounce_ms: 300,
            min_query_len: 2,
            search_result_limit: 5,
            reload_delay_ms: 1_000,
            toast_millis: 3_000,
            currency: "XAF".to_string(),
            stat_keys: DEFAULT_STAT_KEYS.iter().map(|k| k.to_string()).collect(),
            show_sales_chart: false,
            show_cart_panel: false,
            order_statuses: ORDER_STATUSES
                .iter()
                .map(|(value, label)| StatusOption {
                    value: value.to_string(),
                    label: label.to_string(),
                })
                .collect(),
            cart: CartSnapshot::default(),
            menu_items: Vec::new(),
            orders: Vec::new(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(text: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the configuration from the current document.
    ///
    /// A missing or malformed config block falls back to defaults. A token
    /// found in the DOM wins over one in the JSON block.
    pub fn from_document() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            warn!("[CONFIG] No document available, using defaults");
            return Self::default();
        };

        let mut config = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
            .map(|text| {
                Self::from_json(&text).unwrap_or_else(|e| {
                    warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                })
            })
            .unwrap_or_default();

        if let Some(token) = find_csrf_token(&document) {
            config.csrf_token = Some(token);
        }
        if config.csrf_token.is_none() {
            warn!("[CONFIG] No CSRF token on page; mutating requests will be refused");
        }
        config
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms as u64)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms as u64)
    }

    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(self.reload_delay_ms as u64)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_millis as u64)
    }

    pub fn status_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.order_statuses
            .iter()
            .find(|opt| opt.value == value)
            .map(|opt| opt.label.as_str())
            .unwrap_or(value)
    }
}

/// CSRF token from `<meta name="csrf-token">` or the hidden form field
fn find_csrf_token(document: &web_sys::Document) -> Option<String> {
    let from_meta = document
        .query_selector("meta[name='csrf-token']")
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"));

    let from_input = || {
        document
            .query_selector("input[name='csrfmiddlewaretoken']")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
    };

    from_meta
        .filter(|t| !t.is_empty())
        .or_else(from_input)
        .filter(|t| !t.is_empty())
}
