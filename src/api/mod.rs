//! Backend API
//!
//! Bindings to the canteen JSON endpoints, organized by domain.
//! `DashboardApi` is the seam the controller talks through; `HttpApi`
//! is the browser implementation on top of `fetch`.

mod http;
mod cart;
mod orders;
mod menu;
mod dashboard;

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::DashboardError;
use crate::models::{CartResponse, MenuItem, Notification, SalesChart, StatusResponse};

pub use cart::CartAction;
pub use http::HttpApi;

/// Raw key -> value map returned by `/dashboard/api/order-stats/`
pub type OrderStats = BTreeMap<String, serde_json::Value>;

/// Every endpoint the dashboard consumes.
///
/// Implementations only report transport and decode failures as `Err`;
/// a `success: false` body comes back as `Ok` and is checked with [`accept`].
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn add_to_cart(&self, menu_item_id: u32, quantity: u32) -> Result<CartResponse, DashboardError>;
    async fn update_cart(&self, menu_item_id: u32, action: CartAction) -> Result<CartResponse, DashboardError>;
    async fn remove_from_cart(&self, menu_item_id: u32) -> Result<CartResponse, DashboardError>;
    async fn clear_cart(&self) -> Result<CartResponse, DashboardError>;
    async fn cart_count(&self) -> Result<u32, DashboardError>;
    async fn update_order_status(&self, order_id: u32, status: &str) -> Result<StatusResponse, DashboardError>;
    async fn cancel_order(&self, order_number: &str) -> Result<StatusResponse, DashboardError>;
    async fn search_menu(&self, query: &str) -> Result<Vec<MenuItem>, DashboardError>;
    async fn notifications(&self) -> Result<Vec<Notification>, DashboardError>;
    async fn order_stats(&self) -> Result<OrderStats, DashboardError>;
    async fn sales_chart(&self) -> Result<SalesChart, DashboardError>;
}

/// Responses carrying the `{success, message}` envelope
pub trait Envelope {
    fn succeeded(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

impl Envelope for CartResponse {
    fn succeeded(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Envelope for StatusResponse {
    fn succeeded(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Turn a `success: false` body into [`DashboardError::Rejected`]
pub fn accept<T: Envelope>(response: T) -> Result<T, DashboardError> {
    if response.succeeded() {
        Ok(response)
    } else {
        Err(DashboardError::Rejected(response.message().unwrap_or_default().to_string()))
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpApi {
    async fn add_to_cart(&self, menu_item_id: u32, quantity: u32) -> Result<CartResponse, DashboardError> {
        cart::add(self, menu_item_id, quantity).await
    }

    async fn update_cart(&self, menu_item_id: u32, action: CartAction) -> Result<CartResponse, DashboardError> {
        cart::update(self, menu_item_id, action).await
    }

    async fn remove_from_cart(&self, menu_item_id: u32) -> Result<CartResponse, DashboardError> {
        cart::remove(self, menu_item_id).await
    }

    async fn clear_cart(&self) -> Result<CartResponse, DashboardError> {
        cart::clear(self).await
    }

    async fn cart_count(&self) -> Result<u32, DashboardError> {
        cart::count(self).await
    }

    async fn update_order_status(&self, order_id: u32, status: &str) -> Result<StatusResponse, DashboardError> {
        orders::update_status(self, order_id, status).await
    }

    async fn cancel_order(&self, order_number: &str) -> Result<StatusResponse, DashboardError> {
        orders::cancel(self, order_number).await
    }

    async fn search_menu(&self, query: &str) -> Result<Vec<MenuItem>, DashboardError> {
        menu::search(self, query).await
    }

    async fn notifications(&self) -> Result<Vec<Notification>, DashboardError> {
        dashboard::notifications(self).await
    }

    async fn order_stats(&self) -> Result<OrderStats, DashboardError> {
        dashboard::order_stats(self).await
    }

    async fn sales_chart(&self) -> Result<SalesChart, DashboardError> {
        dashboard::sales_chart(self).await
    }
}
