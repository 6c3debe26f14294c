//! Accessor scenarios against stubbed network and in-memory storage.

use std::time::Duration;

use chrono::{DateTime, Datelike, Utc};
use fadeline_core::mapper::map_artists_to_barbers;
use fadeline_core::models::{Artist, BarberDisplay, Service};
use fadeline_core::testing::StubFetcher;
use fadeline_core::{
    ApiClient, ApiConfig, Clock, FetchError, KeyValueStore, ManualClock, MemoryStore, Source,
    SystemClock, resources,
};
use serde_json::json;

const BASE: &str = "https://mock.test/api/";

fn artists_payload() -> serde_json::Value {
    json!([{
        "id": 1,
        "name": "Jo",
        "photo": "x.jpg",
        "specialties": [{ "id": 1, "name": "Fades" }],
        "created_at": "2020-01-01",
        "updated_at": "2020-01-01",
    }])
}

#[tokio::test]
async fn test_artists_end_to_end() {
    let store = MemoryStore::new();
    let api = ApiClient::new(ApiConfig::new(BASE), StubFetcher::new(), &store, SystemClock);
    api.fetcher()
        .respond(&format!("{BASE}artists/"), artists_payload());

    let artists = api.fetch_artists(false).await;
    assert!(store.contains("artists_v1"));

    let now = DateTime::<Utc>::from_timestamp_millis(api.now_millis()).unwrap();
    let years = now.year() - 2020;
    assert_eq!(
        map_artists_to_barbers(&artists, api.now_millis()),
        vec![BarberDisplay {
            name: "Jo".to_string(),
            specialty: "Fades".to_string(),
            exp: format!("{years} years"),
            img: "x.jpg".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_stale_data_survives_network_failure() {
    let clock = ManualClock::at(1_000_000);
    let api = ApiClient::new(ApiConfig::new(BASE), StubFetcher::new(), MemoryStore::new(), &clock);
    let url = format!("{BASE}services/");
    api.fetcher()
        .respond(&url, json!([{ "id": 1, "name": "Fade", "price": "30", "duration": 30 }]));

    let first = api.get_services(false).await;
    assert_eq!(first.len(), 1);

    // Still inside the TTL, but the backend is gone
    clock.advance(Duration::from_secs(59 * 60));
    api.fetcher().fail(&url, FetchError::Network("offline".to_string()));
    let loaded = api
        .load(resources::SERVICES, true, |_| Ok(Vec::<Service>::new()))
        .await;
    assert_eq!(loaded.source, Source::CacheFallback);
    assert_eq!(loaded.items, first);
    assert_eq!(api.get_services(true).await, first);
}

#[tokio::test]
async fn test_expired_entry_is_not_a_fallback() {
    let clock = ManualClock::at(0);
    let api = ApiClient::new(ApiConfig::new(BASE), StubFetcher::new(), MemoryStore::new(), &clock);
    let url = format!("{BASE}categories/");
    api.fetcher().respond(&url, json!([{ "id": 1, "name": "Barbing" }]));
    api.fetch_categories(false).await;

    clock.advance(Duration::from_secs(60 * 60) + Duration::from_millis(1));
    api.fetcher().fail(&url, FetchError::Timeout);
    assert!(api.fetch_categories(false).await.is_empty());
    assert!(!api.cache().store().contains("categories_v1"));
}

#[tokio::test]
async fn test_cold_start_returns_empty() {
    let api = ApiClient::new(
        ApiConfig::new(BASE),
        StubFetcher::new(),
        MemoryStore::new(),
        ManualClock::at(0),
    );
    assert!(api.fetch_artists(false).await.is_empty());
    assert!(api.fetch_categories(false).await.is_empty());
    assert!(api.fetch_reviews(false).await.is_empty());
    assert!(api.get_services(false).await.is_empty());
    assert!(api.get_barbers(false).await.is_empty());
    assert!(api.get_gallery(false).await.is_empty());
    assert!(api.get_service_groups(false).await.is_empty());
    assert!(api.cache().store().is_empty());
}

#[tokio::test]
async fn test_corrupt_cache_is_refetched() {
    let store = MemoryStore::new();
    store.set_item("reviews_v1", "{not json").unwrap();
    let api = ApiClient::new(ApiConfig::new(BASE), StubFetcher::new(), &store, ManualClock::at(0));
    api.fetcher().respond(
        &format!("{BASE}reviews/"),
        json!({ "results": [{ "id": 1, "name": "Ada", "stars": 5, "comment": "Sharp" }] }),
    );

    let reviews = api.fetch_reviews(false).await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(api.fetcher().total_calls(), 1);
    assert!(store.get_item("reviews_v1").unwrap().unwrap().contains("\"expiry\""));
    assert_eq!(api.cache().clock().now_millis(), 0);
}

#[tokio::test]
async fn test_null_fields_keep_whole_collection() {
    let api = ApiClient::new(
        ApiConfig::new(BASE),
        StubFetcher::new(),
        MemoryStore::new(),
        ManualClock::at(0),
    );
    api.fetcher().respond(
        &format!("{BASE}artists/"),
        json!([
            { "id": 1, "name": "Jo", "specialties": [{ "id": 1, "name": "Fades" }] },
            { "id": 2, "name": "Sam", "specialties": null, "photo": null },
        ]),
    );
    api.fetcher().respond(
        &format!("{BASE}galleries/"),
        json!([
            { "id": 1, "name": "Fade", "hero_image": "a.jpg" },
            { "id": 2, "name": null, "hero_image": null, "is_featured": null },
        ]),
    );
    api.fetcher().respond(
        &format!("{BASE}reviews/"),
        json!([
            { "id": 1, "name": "Ada", "stars": 5, "comment": "Sharp" },
            { "id": 2, "name": null, "stars": 4, "comment": null },
        ]),
    );
    api.fetcher().respond(
        &format!("{BASE}services/"),
        json!([
            { "id": 1, "name": "Fade", "price": "30", "duration": 30 },
            { "id": 2, "name": null, "gallery": null, "reviews": null, "add_ons": null },
        ]),
    );

    assert_eq!(api.fetch_artists(false).await.len(), 2);

    let barbers = api.get_barbers(false).await;
    assert_eq!(barbers.len(), 2);
    assert!(barbers[1].specialties.is_empty());

    let gallery = api.load_gallery(false).await;
    assert_eq!(gallery.source, Source::Network);
    assert_eq!(gallery.items.len(), 2);
    assert_eq!(gallery.error, None);

    let reviews = api.fetch_reviews(false).await;
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[1].comment, "");

    let services = api.get_services(false).await;
    assert_eq!(services.len(), 2);
    assert_eq!(services[1].name, "");
}
