//! Location Resolver Library
//!
//! Forward and reverse geocoding behind a time-bounded cache, with the
//! external provider abstracted as a port.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::{
    DashMapLocationCache, EdgeFunctionProvider, GoogleGeocodingProvider, ManualClock, SystemClock,
};
pub use application::LocationResolver;
pub use config::{load_config, Config, ProviderKind};
pub use domain::entities::{LocationDetails, ResolvedPlace};
pub use domain::error::GeocodeError;
pub use domain::ports::{Clock, GeocodingProvider, LocationCache};
pub use domain::services::{validate_coordinates, validate_coordinates_value};
pub use domain::value_objects::{CacheKey, LocationCoordinates};
