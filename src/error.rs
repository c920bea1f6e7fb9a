//! Dashboard Errors
//!
//! Every failure ends up as a toast; none is fatal to the page.

/// Toast text used when the server gives no usable message
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// Transport failure or a non-2xx status without a readable message
    #[error("network error: {0}")]
    Network(String),

    /// The server answered `success: false`
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The payload did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl DashboardError {
    /// Text shown to the user in an error toast
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<gloo_net::Error> for DashboardError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => DashboardError::Decode(e.to_string()),
            other => DashboardError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Decode(err.to_string())
    }
}
