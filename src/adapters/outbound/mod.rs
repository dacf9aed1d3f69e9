mod dashmap_location_cache;
mod edge_function_provider;
mod google_geocoding_provider;
mod system_clock;

pub use dashmap_location_cache::{DashMapLocationCache, DEFAULT_CACHE_TTL};
pub use edge_function_provider::EdgeFunctionProvider;
pub use google_geocoding_provider::{
    parse_geocode_response, GeocodeResponse, GoogleGeocodingProvider, GOOGLE_GEOCODE_URL,
};
pub use system_clock::{ManualClock, SystemClock};
