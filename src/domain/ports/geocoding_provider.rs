//! Geocoding Provider Port
//!
//! Defines the interface to the external service that turns addresses into
//! coordinates and back.

use crate::domain::entities::ResolvedPlace;
use crate::domain::error::GeocodeError;
use crate::domain::value_objects::LocationCoordinates;
use async_trait::async_trait;

/// External geocoding service.
///
/// This is an outbound port. Transport, endpoint and credentials belong to
/// the implementation; the resolver only sees a request and a result.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Resolve an address to a place. The address is passed through untouched.
    async fn geocode(&self, address: &str) -> Result<ResolvedPlace, GeocodeError>;

    /// Describe the place at a known point.
    async fn reverse(&self, coordinates: LocationCoordinates)
        -> Result<ResolvedPlace, GeocodeError>;
}
