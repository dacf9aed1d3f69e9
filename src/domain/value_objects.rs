//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
///
/// Construction does not check ranges; use
/// [`validate_coordinates`](crate::domain::services::validate_coordinates)
/// before trusting a pair that came from user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for LocationCoordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Cache slot for a single lookup direction.
///
/// The rendered form is the storage key. Forward and reverse keys carry
/// distinct prefixes so the two directions never share a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheKey {
    /// Forward lookup, keyed on the address exactly as supplied
    Geocode(String),
    /// Reverse lookup, keyed on the rendered coordinate pair
    Reverse(LocationCoordinates),
}

impl CacheKey {
    pub fn geocode(address: impl Into<String>) -> Self {
        Self::Geocode(address.into())
    }

    pub fn reverse(coordinates: LocationCoordinates) -> Self {
        Self::Reverse(coordinates)
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Geocode(address) => write!(f, "geocode:{}", address),
            CacheKey::Reverse(coordinates) => write!(f, "reverse:{}", coordinates),
        }
    }
}
