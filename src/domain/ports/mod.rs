mod clock;
mod geocoding_provider;
mod location_cache;

pub use clock::Clock;
pub use geocoding_provider::GeocodingProvider;
pub use location_cache::LocationCache;
