//! Google Geocoding Provider
//!
//! Implements GeocodingProvider against a Google-style Geocoding HTTP API.

use crate::domain::entities::ResolvedPlace;
use crate::domain::error::GeocodeError;
use crate::domain::ports::GeocodingProvider;
use crate::domain::value_objects::LocationCoordinates;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Turn a Google-style response body into a place.
///
/// Uses the first result. City comes from the `locality` component and
/// state from `administrative_area_level_1`.
pub fn parse_geocode_response(response: GeocodeResponse) -> Result<ResolvedPlace, GeocodeError> {
    if response.status != "OK" {
        return Err(GeocodeError::ProviderStatus {
            status: response.status,
            message: response.error_message,
        });
    }

    let result = response
        .results
        .into_iter()
        .next()
        .ok_or(GeocodeError::NoResults)?;

    let component = |kind: &str| {
        result
            .address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == kind))
            .map(|c| c.long_name.clone())
    };
    let city = component("locality");
    let state = component("administrative_area_level_1");

    Ok(ResolvedPlace {
        coordinates: result
            .geometry
            .map(|g| LocationCoordinates::new(g.location.lat, g.location.lng)),
        city,
        state,
        formatted_address: result.formatted_address,
        place_id: result.place_id,
    })
}

/// HTTP client for a Google-style Geocoding API.
pub struct GoogleGeocodingProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleGeocodingProvider {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    async fn fetch(&self, params: &[(&str, String)]) -> Result<ResolvedPlace, GeocodeError> {
        let mut request = self.client.get(&self.base_url).query(params);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await?.error_for_status()?;
        let body: GeocodeResponse = response.json().await?;

        parse_geocode_response(body)
    }
}

#[async_trait]
impl GeocodingProvider for GoogleGeocodingProvider {
    async fn geocode(&self, address: &str) -> Result<ResolvedPlace, GeocodeError> {
        tracing::debug!("google geocode request for {:?}", address);
        self.fetch(&[("address", address.to_string())]).await
    }

    async fn reverse(
        &self,
        coordinates: LocationCoordinates,
    ) -> Result<ResolvedPlace, GeocodeError> {
        tracing::debug!("google reverse geocode request for {}", coordinates);
        self.fetch(&[("latlng", coordinates.to_string())]).await
    }
}
