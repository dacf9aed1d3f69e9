//! Domain Layer
//!
//! Location types, the ports the resolver depends on, and pure validation.
//! Nothing here performs I/O.

pub mod entities;
pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{CacheEntry, LocationDetails, ResolvedPlace};
pub use error::GeocodeError;
pub use value_objects::{CacheKey, LocationCoordinates};
