//! Dashboard Widget Endpoints

use super::{HttpApi, OrderStats};
use crate::error::DashboardError;
use crate::models::{Notification, NotificationsResponse, SalesChart};

pub const NOTIFICATIONS_PATH: &str = "/dashboard/api/notifications/";
pub const ORDER_STATS_PATH: &str = "/dashboard/api/order-stats/";
pub const SALES_CHART_PATH: &str = "/dashboard/api/sales-chart/";

pub async fn notifications(api: &HttpApi) -> Result<Vec<Notification>, DashboardError> {
    let body: NotificationsResponse = api.get_json(NOTIFICATIONS_PATH).await?;
    Ok(body.notifications)
}

pub async fn order_stats(api: &HttpApi) -> Result<OrderStats, DashboardError> {
    api.get_json(ORDER_STATS_PATH).await
}

pub async fn sales_chart(api: &HttpApi) -> Result<SalesChart, DashboardError> {
    api.get_json(SALES_CHART_PATH).await
}
