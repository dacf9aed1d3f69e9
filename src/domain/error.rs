//! Geocoding errors
//!
//! Everything that can go wrong between the resolver and a provider.
//! The resolver absorbs these; they exist so failures can be logged precisely.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    #[error("provider returned HTTP {0}")]
    HttpStatus(u16),

    #[error("provider status {status}{}", detail(.message))]
    ProviderStatus {
        status: String,
        message: Option<String>,
    },

    #[error("provider returned no results")]
    NoResults,

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            GeocodeError::HttpStatus(status.as_u16())
        } else if e.is_decode() {
            GeocodeError::MalformedResponse(e.to_string())
        } else {
            GeocodeError::Unreachable(e.to_string())
        }
    }
}
