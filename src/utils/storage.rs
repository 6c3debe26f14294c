//! `localStorage` adapter for the storage port.
//!
//! Unlike session storage, entries survive closing the tab; the cache's own
//! expiry decides when they go stale.

use fadeline_core::{KeyValueStore, StorageError};

use super::dom;

/// Browser `localStorage`.
///
/// Zero-sized: the handle is looked up on every call, so a store can be
/// created anywhere and storage that becomes unavailable (private mode,
/// quota policy) surfaces as [`StorageError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|_| StorageError::ReadFailed(key.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed(key.to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .clear()
            .map_err(|_| StorageError::ClearFailed)
    }
}

/// Wall clock from `Date.now()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

impl fadeline_core::Clock for BrowserClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::time::Duration;

    use fadeline_core::{ExpiringCache, KeyValueStore, ManualClock};
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let store = LocalStorage;
        store.set_item("test:key", "value").unwrap();
        assert_eq!(store.get_item("test:key").unwrap().as_deref(), Some("value"));

        store.remove_item("test:key").unwrap();
        assert_eq!(store.get_item("test:key").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_local_storage_clear() {
        let store = LocalStorage;
        store.set_item("test:a", "1").unwrap();
        store.set_item("test:b", "2").unwrap();
        assert_eq!(store.clear(), Ok(()));
        assert_eq!(store.get_item("test:a").unwrap(), None);
        assert_eq!(store.get_item("test:b").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_cache_over_local_storage_expires() {
        let clock = ManualClock::at(1_000);
        let cache = ExpiringCache::new(LocalStorage, &clock);
        cache.set("test:artists", &vec![1, 2, 3], Duration::from_secs(60));
        assert_eq!(cache.get::<Vec<i32>>("test:artists"), Some(vec![1, 2, 3]));

        clock.advance(Duration::from_secs(61));
        assert_eq!(cache.get::<Vec<i32>>("test:artists"), None);
        assert_eq!(LocalStorage.get_item("test:artists").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_browser_clock_is_wall_time() {
        use fadeline_core::Clock;

        // 2020-01-01T00:00:00Z
        assert!(BrowserClock.now_millis() > 1_577_836_800_000);
    }
}
