//! Fetch Transport
//!
//! JSON over `fetch` via gloo-net. Mutating requests carry the CSRF token.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DashboardError;
use crate::models::StatusResponse;

const CSRF_HEADER: &str = "X-CSRFToken";

/// Browser implementation of [`super::DashboardApi`]
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    csrf_token: Option<String>,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            csrf_token,
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let response = Request::get(&self.url(path))
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?;
        read_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, DashboardError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post(path).json(body)?.send().await?;
        read_json(response).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let response = self.post(path).send().await?;
        read_json(response).await
    }

    fn post(&self, path: &str) -> RequestBuilder {
        let builder = Request::post(&self.url(path))
            .header("Accept", "application/json")
            .header("X-Requested-With", "XMLHttpRequest");
        match &self.csrf_token {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        }
    }
}

/// Decode a JSON body, mapping non-2xx statuses to errors.
///
/// Error statuses still often carry `{success: false, message}`; that
/// message is preferred over the bare status code.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, DashboardError> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<StatusResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.trim().is_empty());
        return Err(match message {
            Some(m) => DashboardError::Rejected(m),
            None => DashboardError::Network(format!("HTTP {}", status)),
        });
    }
    Ok(response.json::<T>().await?)
}
