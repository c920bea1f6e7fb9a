//! Order Endpoints

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use super::HttpApi;
use crate::error::DashboardError;
use crate::models::StatusResponse;

pub const UPDATE_STATUS_PATH: &str = "/orders/update-status/";

/// Characters escaped inside a single path segment (RFC 3986 unreserved kept)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Serialize)]
struct UpdateStatusArgs<'a> {
    order_id: u32,
    status: &'a str,
}

pub fn cancel_path(order_number: &str) -> String {
    format!("/orders/cancel/{}/", utf8_percent_encode(order_number, PATH_SEGMENT))
}

pub async fn update_status(api: &HttpApi, order_id: u32, status: &str) -> Result<StatusResponse, DashboardError> {
    api.post_json(UPDATE_STATUS_PATH, &UpdateStatusArgs { order_id, status }).await
}

pub async fn cancel(api: &HttpApi, order_number: &str) -> Result<StatusResponse, DashboardError> {
    api.post_empty(&cancel_path(order_number)).await
}
