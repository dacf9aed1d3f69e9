//! Clock Port
//!
//! Source of the current time for cache freshness checks.

/// Wall clock in milliseconds since the Unix epoch.
///
/// Injected into the cache so tests can move time forward explicitly.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}
