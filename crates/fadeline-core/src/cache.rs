//! Expiring cache on top of a [`KeyValueStore`].
//!
//! Each entry is stored as JSON `{"data": ..., "expiry": <epoch ms>}`.
//! An entry is valid while `now <= expiry`. Reads past expiry, unparseable
//! records, and records whose data no longer matches the requested type are
//! deleted and reported as a miss. No operation surfaces a storage error:
//! caching is best-effort.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{Clock, duration_millis};
use crate::storage::KeyValueStore;

/// Serialized shape of a cache record.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    data: T,
    expiry: i64,
}

/// Key/value cache with per-entry expiry.
#[derive(Debug)]
pub struct ExpiringCache<S, C> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> ExpiringCache<S, C> {
    /// Wrap a store and a clock.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Clock used for expiry.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Store `value` under `key` for `ttl`.
    ///
    /// Storage or serialization failures are logged and ignored.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Duration) {
        let entry = CacheEntry {
            data: value,
            expiry: self.clock.now_millis().saturating_add(duration_millis(ttl)),
        };
        let json = match serde_json::to_string(&entry) {
            Ok(json) => json,
            Err(err) => {
                debug!(key, error = %err, "cache entry not serializable");
                return;
            }
        };
        if let Err(err) = self.store.set_item(key, &json) {
            debug!(key, error = %err, "cache write skipped");
        }
    }

    /// Read the value under `key` if present and unexpired.
    ///
    /// A record without a numeric `expiry` never counts as permanent: it is
    /// treated as corrupt, deleted, and reported as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                debug!(key, error = %err, "cache read failed");
                self.remove(key);
                return None;
            }
        };

        let entry: CacheEntry<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                debug!(key, error = %err, "dropping corrupt cache entry");
                self.remove(key);
                return None;
            }
        };

        if self.clock.now_millis() > entry.expiry {
            debug!(key, "dropping expired cache entry");
            self.remove(key);
            return None;
        }

        match serde_json::from_value(entry.data) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(key, error = %err, "dropping cache entry with unexpected shape");
                self.remove(key);
                None
            }
        }
    }

    /// Delete `key`.
    pub fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove_item(key) {
            debug!(key, error = %err, "cache remove failed");
        }
    }

    /// Delete every key in the underlying store.
    pub fn clear(&self) {
        if let Err(err) = self.store.clear() {
            debug!(error = %err, "cache clear failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::{MemoryStore, UnavailableStore};

    const HOUR: Duration = Duration::from_secs(3600);

    fn cache() -> ExpiringCache<MemoryStore, ManualClock> {
        ExpiringCache::new(MemoryStore::new(), ManualClock::at(1_000_000))
    }

    #[test]
    fn test_round_trip() {
        let cache = cache();
        let value = json!([{ "id": 1, "name": "Jo" }, "x", 3.5, null]);
        cache.set("artists_v1", &value, HOUR);
        assert_eq!(cache.get::<serde_json::Value>("artists_v1"), Some(value));
    }

    #[test]
    fn test_record_shape() {
        let cache = cache();
        cache.set("k", &vec![1, 2], Duration::from_millis(500));
        let raw = cache.store().get_item("k").unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, json!({ "data": [1, 2], "expiry": 1_000_500 }));
    }

    #[test]
    fn test_valid_until_expiry_inclusive() {
        let cache = cache();
        cache.set("k", &"v", Duration::from_millis(100));

        cache.clock().advance(Duration::from_millis(100));
        assert_eq!(cache.get::<String>("k").as_deref(), Some("v"));

        cache.clock().advance(Duration::from_millis(1));
        assert_eq!(cache.get::<String>("k"), None);
        assert!(!cache.store().contains("k"));
    }

    #[test]
    fn test_corrupt_entry_removed() {
        let cache = cache();
        for raw in ["not json", "{\"data\": 1}", "42", "[1,2]", ""] {
            cache.store().set_item("k", raw).unwrap();
            assert_eq!(cache.get::<serde_json::Value>("k"), None, "raw: {raw:?}");
            assert!(!cache.store().contains("k"));
            // Second read is still a quiet miss
            assert_eq!(cache.get::<serde_json::Value>("k"), None);
        }
    }

    #[test]
    fn test_record_without_expiry_removed() {
        let cache = cache();
        for raw in [r#"{"data": [1]}"#, r#"{"data": [1], "expiry": null}"#] {
            cache.store().set_item("k", raw).unwrap();
            assert_eq!(cache.get::<Vec<u32>>("k"), None, "raw: {raw:?}");
            assert!(!cache.store().contains("k"));
        }
    }

    #[test]
    fn test_type_mismatch_removed() {
        let cache = cache();
        cache.set("k", &json!({ "not": "a list" }), HOUR);
        assert_eq!(cache.get::<Vec<u32>>("k"), None);
        assert!(!cache.store().contains("k"));
    }

    #[test]
    fn test_overwrite_refreshes_expiry() {
        let cache = cache();
        cache.set("k", &1, Duration::from_millis(10));
        cache.clock().advance(Duration::from_millis(5));
        cache.set("k", &2, Duration::from_millis(10));
        cache.clock().advance(Duration::from_millis(10));
        assert_eq!(cache.get::<u32>("k"), Some(2));
    }

    #[test]
    fn test_remove_and_clear() {
        let cache = cache();
        cache.set("a", &1, HOUR);
        cache.set("b", &2, HOUR);

        cache.remove("a");
        assert_eq!(cache.get::<u32>("a"), None);
        assert_eq!(cache.get::<u32>("b"), Some(2));

        cache.clear();
        assert!(cache.store().is_empty());
    }

    #[test]
    fn test_unavailable_storage_is_silent() {
        let cache = ExpiringCache::new(UnavailableStore, ManualClock::at(0));
        cache.set("k", &1, HOUR);
        assert_eq!(cache.get::<u32>("k"), None);
        cache.remove("k");
        cache.clear();
    }

    #[test]
    fn test_full_storage_is_silent() {
        let cache = ExpiringCache::new(MemoryStore::with_capacity(1), ManualClock::at(0));
        cache.set("a", &1, HOUR);
        cache.set("b", &2, HOUR);
        assert_eq!(cache.get::<u32>("a"), Some(1));
        assert_eq!(cache.get::<u32>("b"), None);
    }
}
