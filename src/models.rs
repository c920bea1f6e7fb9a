//! Dashboard Models
//!
//! Data structures matching the canteen backend's JSON payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Money amount as reported by the server.
///
/// The backend sends decimals either as JSON numbers or as strings
/// (`"12500.00"`), so both are accepted. The client only ever displays
/// these values; it never sums them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAmount")]
pub struct Amount(pub f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl TryFrom<RawAmount> for Amount {
    type Error = String;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        match raw {
            RawAmount::Number(n) => Ok(Amount(n)),
            RawAmount::Text(s) => s
                .trim()
                .replace(',', "")
                .parse::<f64>()
                .map(Amount)
                .map_err(|e| format!("invalid amount {:?}: {}", s, e)),
        }
    }
}

impl Amount {
    /// Format with thousands separators and no decimals, e.g. `12,500 XAF`.
    pub fn display_with(&self, currency: &str) -> String {
        let rounded = format!("{:.0}", self.0.abs());
        let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
        for (i, ch) in rounded.chars().enumerate() {
            if i > 0 && (rounded.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0.0 && rounded != "0" { "-" } else { "" };
        if currency.is_empty() {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{} {}", sign, grouped, currency)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(""))
    }
}

/// One row of the cart as mirrored from the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: u32,
    pub name: String,
    #[serde(default)]
    pub unit_price: Option<Amount>,
    pub quantity: u32,
}

/// Cart contents rendered into the page at load time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    #[serde(default)]
    pub lines: Vec<CartLine>,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total: Amount,
}

/// Notification entry from `/dashboard/api/notifications/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub time: String,
}

/// Menu item, used both for search results and the menu grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: Amount,
    #[serde(default, alias = "image_url")]
    pub image: Option<String>,
}

/// Order row shown on staff and customer order tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: u32,
    pub order_number: String,
    /// Opaque status value chosen from the server's option set
    pub status: String,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub total: Amount,
}

impl OrderSummary {
    /// The server only accepts cancellation before preparation starts.
    pub fn is_cancellable(&self) -> bool {
        matches!(self.status.as_str(), "PENDING" | "CONFIRMED")
    }
}

/// Value/label pair for the order status selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusOption {
    pub value: String,
    pub label: String,
}

/// Daily revenue series from `/dashboard/api/sales-chart/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesChart {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
}

impl SalesChart {
    /// (label, value, percent of the largest value) rows for bar rendering
    pub fn bars(&self) -> Vec<(String, f64, f64)> {
        let max = self.data.iter().cloned().fold(0.0_f64, f64::max);
        self.labels
            .iter()
            .zip(self.data.iter())
            .map(|(label, value)| {
                let pct = if max > 0.0 { value / max * 100.0 } else { 0.0 };
                (label.clone(), *value, pct)
            })
            .collect()
    }
}

// ========================
// Response Envelopes
// ========================

/// Response of every cart mutation endpoint.
///
/// Fields beyond `success`/`message` are optional because each endpoint
/// returns a different subset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cart_count: Option<u32>,
    #[serde(default)]
    pub cart_total: Option<Amount>,
    #[serde(default)]
    pub new_quantity: Option<u32>,
}

/// Response of order status and cancel actions
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}
