//! Cache-backed access to the backend API.
//!
//! Every collection accessor follows the same pattern, implemented once in
//! [`ApiClient::load`]:
//!
//! 1. unless forced, return the cached value if present (cache-first)
//! 2. otherwise fetch `base_url + path`
//! 3. on success normalize, write the cache, return
//! 4. on failure return whatever the cache still holds, else an empty list
//!
//! Accessors never fail. [`Loaded::source`] tells callers which branch
//! produced the data.

mod collections;
mod detail;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::ExpiringCache;
use crate::clock::Clock;
use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::storage::KeyValueStore;

pub use collections::HomeData;

/// A cached backend collection: storage key and API path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Key in the cache.
    pub cache_key: &'static str,
    /// Path relative to the API base URL.
    pub path: &'static str,
}

/// Cached resources.
pub mod resources {
    use super::Resource;

    /// Raw artists.
    pub const ARTISTS: Resource = Resource {
        cache_key: "artists_v1",
        path: "artists/",
    };
    /// Raw categories.
    pub const CATEGORIES: Resource = Resource {
        cache_key: "categories_v1",
        path: "categories/",
    };
    /// Raw reviews.
    pub const REVIEWS: Resource = Resource {
        cache_key: "reviews_v1",
        path: "reviews/",
    };
    /// Normalized bookable services.
    pub const SERVICES: Resource = Resource {
        cache_key: "services_v1",
        path: "services/",
    };
    /// Normalized bookable barbers, from the artists endpoint.
    pub const BARBERS: Resource = Resource {
        cache_key: "barbers_v1",
        path: "artists/",
    };
    /// Raw gallery items.
    pub const GALLERY: Resource = Resource {
        cache_key: "gallery_v1",
        path: "galleries/",
    };
    /// Services grouped by category for the services page.
    pub const SERVICE_GROUPS: Resource = Resource {
        cache_key: "services_v1_grouped",
        path: "services/",
    };

    /// Every cached resource.
    pub const ALL: [Resource; 7] = [
        ARTISTS,
        CATEGORIES,
        REVIEWS,
        SERVICES,
        BARBERS,
        GALLERY,
        SERVICE_GROUPS,
    ];
}

/// Where a loaded collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Unexpired cache entry, no request made.
    Cache,
    /// Fresh network response.
    Network,
    /// Network failed; cache entry used instead.
    CacheFallback,
    /// Network failed and nothing was cached.
    Empty,
}

/// Result of a collection load.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub source: Source,
    /// Fetch failure message when the network branch failed.
    pub error: Option<String>,
}

impl<T> Loaded<T> {
    fn new(items: Vec<T>, source: Source) -> Self {
        Self {
            items,
            source,
            error: None,
        }
    }

    /// Whether the network was tried and failed.
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, Source::CacheFallback | Source::Empty)
    }

    /// Transform the items, keeping provenance.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Loaded<U> {
        Loaded {
            items: self.items.into_iter().map(f).collect(),
            source: self.source,
            error: self.error,
        }
    }
}

/// Backend client with a local expiring cache.
#[derive(Debug)]
pub struct ApiClient<F, S, C> {
    config: ApiConfig,
    fetcher: F,
    cache: ExpiringCache<S, C>,
}

impl<F, S, C> ApiClient<F, S, C>
where
    F: Fetcher,
    S: KeyValueStore,
    C: Clock,
{
    /// Assemble a client from its ports.
    pub fn new(config: ApiConfig, fetcher: F, store: S, clock: C) -> Self {
        Self {
            config,
            fetcher,
            cache: ExpiringCache::new(store, clock),
        }
    }

    /// API settings.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Underlying cache.
    pub fn cache(&self) -> &ExpiringCache<S, C> {
        &self.cache
    }

    /// Underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Current time according to the client's clock.
    pub fn now_millis(&self) -> i64 {
        self.cache.clock().now_millis()
    }

    /// Cached items of a resource without touching the network.
    pub fn cached<T: DeserializeOwned>(&self, resource: Resource) -> Option<Vec<T>> {
        self.cache.get(resource.cache_key)
    }

    /// Drop the cached entry of a resource.
    pub fn invalidate(&self, resource: Resource) {
        self.cache.remove(resource.cache_key);
    }

    /// Drop every cached resource. Other storage keys are left alone.
    pub fn invalidate_all(&self) {
        for resource in resources::ALL {
            self.invalidate(resource);
        }
    }

    /// GET a path relative to the base URL, without caching.
    pub(crate) async fn get_path(&self, path: &str) -> Result<Value, FetchError> {
        self.fetcher.get_json(&self.config.url(path)).await
    }

    /// Cache-first load with stale-on-error fallback.
    pub async fn load<T, N>(&self, resource: Resource, force: bool, normalize: N) -> Loaded<T>
    where
        T: Serialize + DeserializeOwned,
        N: FnOnce(Value) -> Result<Vec<T>, FetchError>,
    {
        let key = resource.cache_key;

        if !force && let Some(items) = self.cached::<T>(resource) {
            debug!(key, count = items.len(), "cache hit");
            return Loaded::new(items, Source::Cache);
        }

        match self.get_path(resource.path).await.and_then(normalize) {
            Ok(items) => {
                self.cache.set(key, &items, self.config.cache_ttl());
                debug!(key, count = items.len(), "fetched from network");
                Loaded::new(items, Source::Network)
            }
            Err(err) => {
                warn!(key, error = %err, "fetch failed, falling back to cache");
                let mut loaded = match self.cached::<T>(resource) {
                    Some(items) => Loaded::new(items, Source::CacheFallback),
                    None => Loaded::new(Vec::new(), Source::Empty),
                };
                loaded.error = Some(err.to_string());
                loaded
            }
        }
    }
}
