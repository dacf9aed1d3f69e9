//! Location Resolver - Geocoding use case
//!
//! Resolves addresses to coordinates and back through an external provider,
//! serving repeated lookups from a time-bounded cache.

use crate::domain::entities::{LocationDetails, ResolvedPlace};
use crate::domain::error::GeocodeError;
use crate::domain::ports::{GeocodingProvider, LocationCache};
use crate::domain::services;
use crate::domain::value_objects::{CacheKey, LocationCoordinates};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Default upper bound on a single provider call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Geocoding front end with a shared forward/reverse cache.
///
/// Failures never escape: provider errors, timeouts and malformed answers
/// are logged and reported as `None`. Concurrent misses for one key are not
/// coalesced; each calls the provider and the last write wins.
pub struct LocationResolver {
    provider: Arc<dyn GeocodingProvider>,
    cache: Arc<dyn LocationCache>,
    timeout: Duration,
}

impl LocationResolver {
    pub fn new(provider: Arc<dyn GeocodingProvider>, cache: Arc<dyn LocationCache>) -> Self {
        Self::with_timeout(provider, cache, DEFAULT_PROVIDER_TIMEOUT)
    }

    pub fn with_timeout(
        provider: Arc<dyn GeocodingProvider>,
        cache: Arc<dyn LocationCache>,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            timeout,
        }
    }

    /// Resolve an address to coordinates and a normalized description.
    ///
    /// The address is used verbatim, both as the cache key and in the
    /// provider request; an empty string is forwarded like any other.
    pub async fn geocode_address(&self, address: &str) -> Option<LocationDetails> {
        let key = CacheKey::geocode(address);

        self.resolve(key, || self.provider.geocode(address), |place| {
            let coordinates = place.coordinates.ok_or_else(|| {
                GeocodeError::MalformedResponse("forward result has no coordinates".to_string())
            })?;
            Ok(place.into_details(coordinates))
        })
        .await
    }

    /// Describe the place at a coordinate pair.
    ///
    /// The input is not validated here; see [`Self::validate_coordinates`].
    /// The returned coordinates are the input coordinates, whatever the
    /// provider reports.
    pub async fn reverse_geocode(
        &self,
        coordinates: LocationCoordinates,
    ) -> Option<LocationDetails> {
        let key = CacheKey::reverse(coordinates);

        self.resolve(key, || self.provider.reverse(coordinates), |place| {
            Ok(place.into_details(coordinates))
        })
        .await
    }

    /// Range check for a coordinate pair. Pure; does not touch the cache.
    pub fn validate_coordinates(coordinates: &LocationCoordinates) -> bool {
        services::validate_coordinates(coordinates)
    }

    async fn resolve<L, F, S>(&self, key: CacheKey, lookup: L, shape: S) -> Option<LocationDetails>
    where
        L: FnOnce() -> F,
        F: Future<Output = Result<ResolvedPlace, GeocodeError>>,
        S: FnOnce(ResolvedPlace) -> Result<LocationDetails, GeocodeError>,
    {
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!("location cache hit: {}", key);
            return Some(cached);
        }
        tracing::debug!("location cache miss: {}", key);

        let outcome = match tokio::time::timeout(self.timeout, lookup()).await {
            Ok(result) => result.and_then(shape),
            Err(_) => Err(GeocodeError::Timeout(self.timeout)),
        };

        match outcome {
            Ok(details) => {
                self.cache.set(&key, details.clone());
                Some(details)
            }
            Err(e) => {
                tracing::warn!("geocoding failed for {}: {}", key, e);
                None
            }
        }
    }
}
