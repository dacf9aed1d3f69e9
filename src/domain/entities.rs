//! Domain Entities - Core business objects
//!
//! These entities represent the results the resolver hands back to callers
//! and the records it keeps in its cache.

use crate::domain::value_objects::LocationCoordinates;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A fully resolved location.
///
/// `coordinates` is always present; the descriptive fields depend on
/// what the provider knows about the point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDetails {
    pub coordinates: LocationCoordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl LocationDetails {
    /// A result carrying only coordinates.
    pub fn new(coordinates: LocationCoordinates) -> Self {
        Self {
            coordinates,
            city: None,
            state: None,
            formatted_address: None,
            place_id: None,
        }
    }
}

/// What a geocoding provider answered, before the resolver shapes it.
///
/// Providers may omit coordinates (reverse lookups only need the
/// descriptive fields), so they are optional here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    #[serde(default)]
    pub coordinates: Option<LocationCoordinates>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
}

impl ResolvedPlace {
    /// Build the caller-facing result around the given coordinates.
    pub fn into_details(self, coordinates: LocationCoordinates) -> LocationDetails {
        LocationDetails {
            coordinates,
            city: self.city,
            state: self.state,
            formatted_address: self.formatted_address,
            place_id: self.place_id,
        }
    }
}

/// A cached resolution with its insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: LocationDetails,
    /// Milliseconds since the Unix epoch at insertion
    pub stored_at_ms: u64,
}

impl CacheEntry {
    pub fn new(value: LocationDetails, stored_at_ms: u64) -> Self {
        Self {
            value,
            stored_at_ms,
        }
    }

    /// An entry is servable while its age does not exceed the TTL.
    ///
    /// A clock that went backwards yields age zero.
    pub fn is_fresh(&self, now_ms: u64, ttl: Duration) -> bool {
        now_ms.saturating_sub(self.stored_at_ms) <= ttl.as_millis() as u64
    }
}
