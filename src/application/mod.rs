//! Application Layer
//!
//! Use cases that combine the domain ports.

mod location_resolver;

pub use location_resolver::LocationResolver;
