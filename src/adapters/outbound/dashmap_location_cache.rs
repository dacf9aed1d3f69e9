//! DashMap Location Cache
//!
//! Implements LocationCache using DashMap for lock-free concurrent access.

use crate::adapters::outbound::SystemClock;
use crate::domain::entities::{CacheEntry, LocationDetails};
use crate::domain::ports::{Clock, LocationCache};
use crate::domain::value_objects::CacheKey;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;

/// Default time an entry stays servable.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// DashMap-backed location cache.
///
/// Expiry is lazy: a stale entry is removed when a read finds it.
/// There is no size bound. `start_gc` adds an optional periodic sweep.
pub struct DashMapLocationCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl DashMapLocationCache {
    /// Create a cache on the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Remove every expired entry. Returns how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        sweep(&self.entries, self.clock.now_ms(), self.ttl)
    }

    /// Start the background sweep task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start_gc(&self, interval: Duration) {
        let entries = self.entries.clone();
        let clock = self.clock.clone();
        let ttl = self.ttl;

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;

                let removed = sweep(&entries, clock.now_ms(), ttl);
                if removed > 0 {
                    tracing::debug!("location cache GC removed {} expired entries", removed);
                }
            }
        });
    }
}

fn sweep(entries: &DashMap<String, CacheEntry>, now_ms: u64, ttl: Duration) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| entry.is_fresh(now_ms, ttl));
    before.saturating_sub(entries.len())
}

impl Default for DashMapLocationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl LocationCache for DashMapLocationCache {
    fn get(&self, key: &CacheKey) -> Option<LocationDetails> {
        let key = key.to_string();
        let now = self.clock.now_ms();

        match self.entries.get(&key) {
            Some(entry) if entry.is_fresh(now, self.ttl) => return Some(entry.value.clone()),
            Some(_) => {}
            None => return None,
        }

        // Read guard is released; re-check so a concurrent fresh write survives.
        self.entries
            .remove_if(&key, |_, entry| !entry.is_fresh(now, self.ttl));
        tracing::debug!("location cache entry expired: {}", key);
        None
    }

    fn set(&self, key: &CacheKey, value: LocationDetails) {
        let entry = CacheEntry::new(value, self.clock.now_ms());
        self.entries.insert(key.to_string(), entry);
    }

    fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(&key.to_string())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::ManualClock;
    use crate::domain::value_objects::LocationCoordinates;

    fn cache_with_clock() -> (DashMapLocationCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let cache = DashMapLocationCache::with_clock(DEFAULT_CACHE_TTL, clock.clone());
        (cache, clock)
    }

    fn details(lat: f64, lng: f64) -> LocationDetails {
        LocationDetails::new(LocationCoordinates::new(lat, lng))
    }

    // ===== Get and Set Tests =====

    #[test]
    fn test_get_missing_returns_none() {
        let (cache, _) = cache_with_clock();
        assert!(cache.get(&CacheKey::geocode("Lagos")).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let (cache, _) = cache_with_clock();
        let key = CacheKey::geocode("Lagos");

        cache.set(&key, details(6.5, 3.4));

        assert_eq!(cache.get(&key), Some(details(6.5, 3.4)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_set_overwrites_and_restamps() {
        let (cache, clock) = cache_with_clock();
        let key = CacheKey::geocode("Abuja");

        cache.set(&key, details(9.0, 7.4));
        clock.advance(Duration::from_secs(25 * 60));
        cache.set(&key, details(9.07, 7.49));
        clock.advance(Duration::from_secs(25 * 60));

        // 50 minutes after the first write, 25 after the second
        assert_eq!(cache.get(&key), Some(details(9.07, 7.49)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_directions_have_separate_slots() {
        let (cache, _) = cache_with_clock();
        let forward = CacheKey::geocode("1,2");
        let reverse = CacheKey::reverse(LocationCoordinates::new(1.0, 2.0));

        cache.set(&forward, details(10.0, 20.0));

        assert!(cache.get(&reverse).is_none());
        cache.set(&reverse, details(1.0, 2.0));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&forward), Some(details(10.0, 20.0)));
    }

    // ===== Expiry Tests =====

    #[test]
    fn test_entry_servable_at_exact_ttl() {
        let (cache, clock) = cache_with_clock();
        let key = CacheKey::geocode("Ibadan");

        cache.set(&key, details(7.4, 3.9));
        clock.advance(DEFAULT_CACHE_TTL);

        assert!(cache.get(&key).is_some());
    }

    #[test]
    fn test_expired_entry_is_removed_on_read() {
        let (cache, clock) = cache_with_clock();
        let key = CacheKey::geocode("Kano");

        cache.set(&key, details(12.0, 8.5));
        clock.advance(DEFAULT_CACHE_TTL + Duration::from_millis(1));

        assert!(cache.contains(&key));
        assert!(cache.get(&key).is_none());
        assert!(!cache.contains(&key));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expired_entries_not_swept_without_read() {
        let (cache, clock) = cache_with_clock();
        cache.set(&CacheKey::geocode("a"), details(1.0, 1.0));
        cache.set(&CacheKey::geocode("b"), details(2.0, 2.0));

        clock.advance(Duration::from_secs(60 * 60));

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_custom_ttl() {
        let clock = Arc::new(ManualClock::new(0));
        let cache = DashMapLocationCache::with_clock(Duration::from_secs(5), clock.clone());
        let key = CacheKey::geocode("Enugu");

        cache.set(&key, details(6.4, 7.5));
        clock.advance(Duration::from_secs(6));

        assert_eq!(cache.ttl(), Duration::from_secs(5));
        assert!(cache.get(&key).is_none());
    }

    // ===== Cleanup Tests =====

    #[test]
    fn test_cleanup_expired_removes_only_stale() {
        let (cache, clock) = cache_with_clock();
        cache.set(&CacheKey::geocode("old"), details(1.0, 1.0));
        clock.advance(Duration::from_secs(20 * 60));
        cache.set(&CacheKey::geocode("new"), details(2.0, 2.0));
        clock.advance(Duration::from_secs(20 * 60));

        let removed = cache.cleanup_expired();

        assert_eq!(removed, 1);
        assert!(!cache.contains(&CacheKey::geocode("old")));
        assert!(cache.contains(&CacheKey::geocode("new")));
    }

    #[test]
    fn test_cleanup_on_empty_cache() {
        let (cache, _) = cache_with_clock();
        assert_eq!(cache.cleanup_expired(), 0);
    }

    #[tokio::test]
    async fn test_start_gc_sweeps_in_background() {
        let clock = Arc::new(ManualClock::new(0));
        let cache = DashMapLocationCache::with_clock(Duration::from_secs(1), clock.clone());
        cache.set(&CacheKey::geocode("Jos"), details(9.9, 8.9));
        clock.advance(Duration::from_secs(2));

        cache.start_gc(Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.is_empty());
    }

    #[test]
    fn test_default_uses_thirty_minute_ttl() {
        let cache = DashMapLocationCache::default();
        assert_eq!(cache.ttl(), Duration::from_secs(1800));
    }

    #[test]
    fn test_cache_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DashMapLocationCache>();
    }
}
