//! Per-resource accessors.

use futures::join;

use super::{ApiClient, Loaded, resources};
use crate::clock::Clock;
use crate::fetch::{Fetcher, decode_list};
use crate::mapper::{
    map_artists_to_barbers, map_categories_to_services, map_reviews_to_testimonials,
};
use crate::models::{
    ApiService, Artist, Barber, BarberDisplay, Category, GalleryImage, GalleryItem, Review,
    Service, ServiceDisplay, ServiceGroup, TestimonialDisplay,
};
use crate::normalize::{gallery_image, group_services, normalize_barber, normalize_service};
use crate::storage::KeyValueStore;

/// Everything the home page shows from the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeData {
    pub services: Vec<ServiceDisplay>,
    pub barbers: Vec<BarberDisplay>,
    pub testimonials: Vec<TestimonialDisplay>,
}

impl<F, S, C> ApiClient<F, S, C>
where
    F: Fetcher,
    S: KeyValueStore,
    C: Clock,
{
    /// Artists as returned by the API.
    pub async fn fetch_artists(&self, force: bool) -> Vec<Artist> {
        self.load(resources::ARTISTS, force, decode_list).await.items
    }

    /// Categories as returned by the API.
    pub async fn fetch_categories(&self, force: bool) -> Vec<Category> {
        self.load(resources::CATEGORIES, force, decode_list)
            .await
            .items
    }

    /// Reviews as returned by the API.
    pub async fn fetch_reviews(&self, force: bool) -> Vec<Review> {
        self.load(resources::REVIEWS, force, decode_list).await.items
    }

    /// Bookable services, normalized before caching.
    pub async fn get_services(&self, force: bool) -> Vec<Service> {
        self.load(resources::SERVICES, force, |raw| {
            let services: Vec<ApiService> = decode_list(raw)?;
            Ok(services.iter().map(normalize_service).collect())
        })
        .await
        .items
    }

    /// Bookable barbers, normalized before caching.
    pub async fn get_barbers(&self, force: bool) -> Vec<Barber> {
        self.load(resources::BARBERS, force, |raw| {
            let artists: Vec<Artist> = decode_list(raw)?;
            Ok(artists.iter().map(normalize_barber).collect())
        })
        .await
        .items
    }

    /// Gallery items with provenance; raw items are cached.
    pub async fn load_gallery(&self, force: bool) -> Loaded<GalleryItem> {
        self.load(resources::GALLERY, force, decode_list).await
    }

    /// Gallery images.
    pub async fn get_gallery(&self, force: bool) -> Vec<GalleryImage> {
        self.load_gallery(force)
            .await
            .items
            .iter()
            .map(gallery_image)
            .collect()
    }

    /// Services grouped by category with provenance.
    pub async fn load_service_groups(&self, force: bool) -> Loaded<ServiceGroup> {
        self.load(resources::SERVICE_GROUPS, force, |raw| {
            let services: Vec<ApiService> = decode_list(raw)?;
            Ok(group_services(&services))
        })
        .await
    }

    /// Services grouped by category.
    pub async fn get_service_groups(&self, force: bool) -> Vec<ServiceGroup> {
        self.load_service_groups(force).await.items
    }

    /// Categories, artists and reviews for the home page, loaded concurrently.
    pub async fn load_home(&self, force: bool) -> HomeData {
        let (categories, artists, reviews) = join!(
            self.fetch_categories(force),
            self.fetch_artists(force),
            self.fetch_reviews(force),
        );
        HomeData {
            services: map_categories_to_services(&categories),
            barbers: map_artists_to_barbers(&artists, self.now_millis()),
            testimonials: map_reviews_to_testimonials(&reviews),
        }
    }

    /// Services and barbers for the booking form, loaded concurrently.
    pub async fn load_booking_options(&self, force: bool) -> (Vec<Service>, Vec<Barber>) {
        join!(self.get_services(force), self.get_barbers(force))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::{Resource, Source};
    use crate::clock::ManualClock;
    use crate::config::ApiConfig;
    use crate::error::FetchError;
    use crate::storage::MemoryStore;
    use crate::testing::StubFetcher;

    const BASE: &str = "https://api.test/api/";

    type TestClient = ApiClient<StubFetcher, MemoryStore, ManualClock>;

    fn client() -> TestClient {
        ApiClient::new(
            ApiConfig::new(BASE),
            StubFetcher::new(),
            MemoryStore::new(),
            ManualClock::at(1_792_324_800_000),
        )
    }

    fn url(resource: Resource) -> String {
        format!("{BASE}{}", resource.path)
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let api = client();
        api.fetcher()
            .respond(&url(resources::CATEGORIES), json!([{ "id": 1, "name": "Barbing" }]));

        assert_eq!(api.fetch_categories(false).await.len(), 1);
        assert_eq!(api.fetch_categories(false).await.len(), 1);
        assert_eq!(api.fetcher().calls(&url(resources::CATEGORIES)), 1);
    }

    #[tokio::test]
    async fn test_force_bypasses_cache() {
        let api = client();
        let categories = url(resources::CATEGORIES);
        api.fetcher().respond(&categories, json!([{ "id": 1, "name": "A" }]));
        api.fetch_categories(false).await;

        api.fetcher().respond(
            &categories,
            json!([{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }]),
        );
        assert_eq!(api.fetch_categories(true).await.len(), 2);
        assert_eq!(api.fetch_categories(false).await.len(), 2);
        assert_eq!(api.fetcher().calls(&categories), 2);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_cache() {
        let api = client();
        let reviews = url(resources::REVIEWS);
        api.fetcher()
            .respond(&reviews, json!([{ "id": 1, "name": "Ada", "stars": 5, "comment": "Great" }]));
        api.fetch_reviews(false).await;

        api.fetcher().fail(&reviews, FetchError::Status { status: 503, url: reviews.clone() });
        let loaded = api.load(resources::REVIEWS, true, decode_list::<Review>).await;
        assert_eq!(loaded.source, Source::CacheFallback);
        assert_eq!(loaded.items[0].name, "Ada");
        assert!(loaded.error.is_some());
    }

    #[tokio::test]
    async fn test_cold_start_failure_is_empty() {
        let api = client();
        api.fetcher().fail(
            &url(resources::SERVICES),
            FetchError::Network("connection refused".to_string()),
        );
        assert!(api.get_services(false).await.is_empty());
        assert!(api.cached::<Service>(resources::SERVICES).is_none());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_failure() {
        let api = client();
        api.fetcher().respond(&url(resources::ARTISTS), json!({ "detail": "oops" }));
        let loaded = api.load(resources::ARTISTS, false, decode_list::<Artist>).await;
        assert_eq!(loaded.source, Source::Empty);
        assert!(api.cached::<Artist>(resources::ARTISTS).is_none());
    }

    #[tokio::test]
    async fn test_services_normalized_before_caching() {
        let api = client();
        api.fetcher().respond(
            &url(resources::SERVICES),
            json!([
                { "id": 1, "name": "Fade", "price": "$45.00", "duration": 50,
                  "short_description": "Clean", "hero_image": "fade.jpg" },
                { "id": 2, "name": "Wash", "price": null, "duration": "" },
            ]),
        );
        let services = api.get_services(false).await;
        assert_eq!(services[0].price, 45.0);
        assert_eq!(services[0].duration, "50 min");
        assert_eq!(services[1].price, 0.0);
        assert_eq!(services[1].duration, crate::DURATION_PLACEHOLDER);

        let cached: Vec<Service> = api.cached(resources::SERVICES).unwrap();
        assert_eq!(cached, services);
    }

    #[tokio::test]
    async fn test_barbers_share_artists_endpoint() {
        let api = client();
        api.fetcher().respond(
            &url(resources::ARTISTS),
            json!([{ "id": 4, "name": "Sam", "specialties": ["Color", { "name": "Cuts" }] }]),
        );
        let barbers = api.get_barbers(false).await;
        assert_eq!(barbers[0].specialties, vec!["Color".to_string(), "Cuts".to_string()]);

        // Separate cache entries for raw artists and normalized barbers
        assert!(api.cached::<Barber>(resources::BARBERS).is_some());
        assert!(api.cached::<Artist>(resources::ARTISTS).is_none());
    }

    #[tokio::test]
    async fn test_gallery_and_groups() {
        let api = client();
        api.fetcher().respond(
            &url(resources::GALLERY),
            json!([{ "id": 1, "name": "Taper", "hero_image": "t.jpg",
                     "category": { "id": 2, "name": "Barbing" }, "min_price": "20" }]),
        );
        api.fetcher().respond(
            &url(resources::SERVICE_GROUPS),
            json!([{ "id": 1, "name": "Fade", "category": { "id": 2, "name": "Barbing" } }]),
        );

        let images = api.get_gallery(false).await;
        assert_eq!(images[0].category, "Barbing");
        assert_eq!(images[0].price.as_deref(), Some("$20"));

        let groups = api.get_service_groups(false).await;
        assert_eq!(groups[0].name, "Barbing");
        assert!(api.cached::<ServiceGroup>(resources::SERVICE_GROUPS).is_some());
    }

    #[tokio::test]
    async fn test_home_tolerates_partial_failure() {
        let api = client();
        api.fetcher().respond(
            &url(resources::CATEGORIES),
            json!([{ "id": 1, "name": "Makeup", "slug": "makeup" }]),
        );
        api.fetcher().fail(&url(resources::ARTISTS), FetchError::Timeout);
        api.fetcher().respond(&url(resources::REVIEWS), json!(null));

        let home = api.load_home(false).await;
        assert_eq!(home.services[0].img, "/makeup.jfif");
        assert!(home.barbers.is_empty());
        assert!(home.testimonials.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate_all_keeps_other_keys() {
        let api = client();
        api.fetcher().respond(&url(resources::CATEGORIES), json!([]));
        api.fetch_categories(false).await;
        api.cache().store().set_item("app:theme", "true").unwrap();

        api.invalidate_all();
        assert!(api.cached::<Category>(resources::CATEGORIES).is_none());
        assert!(api.cache().store().contains("app:theme"));
    }
}
