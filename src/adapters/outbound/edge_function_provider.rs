//! Edge Function Geocoding Provider
//!
//! Implements GeocodingProvider by invoking a hosted `geocode` function that
//! already speaks the normalized place shape.

use crate::domain::entities::ResolvedPlace;
use crate::domain::error::GeocodeError;
use crate::domain::ports::GeocodingProvider;
use crate::domain::value_objects::LocationCoordinates;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum FunctionRequest<'a> {
    Forward { address: &'a str },
    Reverse { latitude: f64, longitude: f64 },
}

#[derive(Debug, Deserialize)]
struct FunctionResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    place: ResolvedPlace,
}

/// Client for a hosted geocoding function.
///
/// Requests are `POST`ed as JSON. When a key is configured it is sent both
/// as a bearer token and as the `apikey` header.
pub struct EdgeFunctionProvider {
    client: reqwest::Client,
    function_url: String,
    api_key: Option<String>,
}

impl EdgeFunctionProvider {
    pub fn new(
        function_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            function_url: function_url.into(),
            api_key,
        })
    }

    async fn invoke(&self, body: &FunctionRequest<'_>) -> Result<ResolvedPlace, GeocodeError> {
        let mut request = self.client.post(&self.function_url).json(body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key).header("apikey", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            if let Ok(body) = response.text().await {
                tracing::debug!("geocode function error body: {}", body);
            }
            return Err(GeocodeError::HttpStatus(status.as_u16()));
        }

        let body: FunctionResponse = response.json().await?;
        match body.error {
            Some(message) => Err(GeocodeError::ProviderStatus {
                status: "ERROR".to_string(),
                message: Some(message),
            }),
            None => Ok(body.place),
        }
    }
}

#[async_trait]
impl GeocodingProvider for EdgeFunctionProvider {
    async fn geocode(&self, address: &str) -> Result<ResolvedPlace, GeocodeError> {
        self.invoke(&FunctionRequest::Forward { address }).await
    }

    async fn reverse(
        &self,
        coordinates: LocationCoordinates,
    ) -> Result<ResolvedPlace, GeocodeError> {
        self.invoke(&FunctionRequest::Reverse {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_forward_request_shape() {
        let body = serde_json::to_value(FunctionRequest::Forward { address: "Lagos" }).unwrap();
        assert_eq!(body, json!({ "address": "Lagos" }));
    }

    #[test]
    fn test_reverse_request_shape() {
        let body = serde_json::to_value(FunctionRequest::Reverse {
            latitude: 6.5,
            longitude: 3.4,
        })
        .unwrap();
        assert_eq!(body, json!({ "latitude": 6.5, "longitude": 3.4 }));
    }

    #[test]
    fn test_response_with_place() {
        let body: FunctionResponse = serde_json::from_value(json!({
            "coordinates": { "latitude": 6.5, "longitude": 3.4 },
            "formatted_address": "Lagos, Nigeria",
            "place_id": "abc123",
            "city": "Lagos"
        }))
        .unwrap();

        assert!(body.error.is_none());
        assert_eq!(body.place.city.as_deref(), Some("Lagos"));
        assert!(body.place.state.is_none());
        assert_eq!(
            body.place.coordinates,
            Some(LocationCoordinates::new(6.5, 3.4))
        );
    }

    #[test]
    fn test_response_with_error() {
        let body: FunctionResponse =
            serde_json::from_value(json!({ "error": "Geocoding failed: ZERO_RESULTS" })).unwrap();

        assert_eq!(body.error.as_deref(), Some("Geocoding failed: ZERO_RESULTS"));
        assert_eq!(body.place, ResolvedPlace::default());
    }
}
