//! Menu Search Endpoint

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::HttpApi;
use crate::error::DashboardError;
use crate::models::{ItemsResponse, MenuItem};

pub const ITEMS_PATH: &str = "/menu/api/items/";

/// Path with the query percent-encoded into `?search=`
pub fn search_path(query: &str) -> String {
    format!("{}?search={}", ITEMS_PATH, utf8_percent_encode(query, NON_ALPHANUMERIC))
}

pub async fn search(api: &HttpApi, query: &str) -> Result<Vec<MenuItem>, DashboardError> {
    let body: ItemsResponse = api.get_json(&search_path(query)).await?;
    Ok(body.items)
}
