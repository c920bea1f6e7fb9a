//! Cart Endpoints

use serde::Serialize;

use super::HttpApi;
use crate::error::DashboardError;
use crate::models::{CartResponse, CountResponse};

pub const ADD_PATH: &str = "/orders/api/cart/add/";
pub const UPDATE_PATH: &str = "/orders/api/cart/update/";
pub const REMOVE_PATH: &str = "/orders/api/cart/remove/";
pub const CLEAR_PATH: &str = "/orders/api/cart/clear/";
pub const COUNT_PATH: &str = "/orders/api/cart/count/";

/// Quantity step sent to the update endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    Increase,
    Decrease,
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddArgs {
    menu_item_id: u32,
    quantity: u32,
}

#[derive(Serialize)]
struct UpdateArgs {
    menu_item_id: u32,
    action: CartAction,
}

#[derive(Serialize)]
struct ItemArgs {
    menu_item_id: u32,
}

// ========================
// Requests
// ========================

pub async fn add(api: &HttpApi, menu_item_id: u32, quantity: u32) -> Result<CartResponse, DashboardError> {
    api.post_json(ADD_PATH, &AddArgs { menu_item_id, quantity }).await
}

pub async fn update(api: &HttpApi, menu_item_id: u32, action: CartAction) -> Result<CartResponse, DashboardError> {
    api.post_json(UPDATE_PATH, &UpdateArgs { menu_item_id, action }).await
}

pub async fn remove(api: &HttpApi, menu_item_id: u32) -> Result<CartResponse, DashboardError> {
    api.post_json(REMOVE_PATH, &ItemArgs { menu_item_id }).await
}

pub async fn clear(api: &HttpApi) -> Result<CartResponse, DashboardError> {
    api.post_empty(CLEAR_PATH).await
}

pub async fn count(api: &HttpApi) -> Result<u32, DashboardError> {
    let body: CountResponse = api.get_json(COUNT_PATH).await?;
    Ok(body.count)
}
