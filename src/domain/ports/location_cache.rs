//! Location Cache Port
//!
//! Defines the interface for the time-bounded store shared by forward and
//! reverse lookups.

use crate::domain::entities::LocationDetails;
use crate::domain::value_objects::CacheKey;

/// Store of resolved locations keyed by lookup direction and input.
pub trait LocationCache: Send + Sync {
    /// Get a servable value. An expired entry is removed and reported as absent.
    fn get(&self, key: &CacheKey) -> Option<LocationDetails>;

    /// Insert or overwrite the entry for `key`, stamped with the current time.
    fn set(&self, key: &CacheKey, value: LocationDetails);

    /// Whether an entry is stored for `key`, fresh or not.
    fn contains(&self, key: &CacheKey) -> bool;

    /// Number of stored entries, fresh or not.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
