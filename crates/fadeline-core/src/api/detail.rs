//! Uncached lookups for the service detail page.
//!
//! The backend's filter syntax is not fixed, so both lookups try several
//! query shapes and stop at the first that yields data. Failures only ever
//! shorten the result.

use serde_json::Value;
use tracing::debug;

use super::ApiClient;
use crate::clock::Clock;
use crate::fetch::{Fetcher, encode_component};
use crate::models::{ApiService, Category, RelatedService, ServiceDetail};
use crate::normalize::{related_service, service_detail};
use crate::storage::KeyValueStore;

/// Services in a list, a `{"results": [...]}` page, or a single object.
///
/// Entries that do not decode as a service are dropped.
fn service_list(value: Value) -> Vec<ApiService> {
    let entries = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            Some(_) => Vec::new(),
            None => vec![Value::Object(map)],
        },
        _ => Vec::new(),
    };
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}

/// Related-service queries for a category, most specific first.
fn related_queries(category: &Category) -> Vec<String> {
    let mut queries = vec![format!("services/?category={}", category.id)];
    if let Some(slug) = category.slug.as_deref().filter(|s| !s.is_empty()) {
        let slug = encode_component(slug);
        queries.push(format!("services/?category__slug={slug}"));
        queries.push(format!("services/?category={slug}"));
    }
    if !category.name.is_empty() {
        queries.push(format!(
            "services/?category_name={}",
            encode_component(&category.name)
        ));
    }
    queries
}

impl<F, S, C> ApiClient<F, S, C>
where
    F: Fetcher,
    S: KeyValueStore,
    C: Clock,
{
    /// Raw service by slug or id.
    ///
    /// Tries the detail route, then the `?slug=` list filter.
    pub async fn fetch_service(&self, slug_or_id: &str) -> Option<ApiService> {
        let slug = encode_component(slug_or_id);

        match self.get_path(&format!("services/{slug}/")).await {
            Ok(value) => match serde_json::from_value::<ApiService>(value) {
                Ok(service) => return Some(service),
                Err(err) => debug!(slug_or_id, error = %err, "detail route returned no service"),
            },
            Err(err) => debug!(slug_or_id, error = %err, "detail route failed"),
        }

        match self.get_path(&format!("services/?slug={slug}")).await {
            Ok(value) => service_list(value).into_iter().next(),
            Err(err) => {
                debug!(slug_or_id, error = %err, "slug filter failed");
                None
            }
        }
    }

    /// Detail page record for a service, `None` when it cannot be found.
    pub async fn service_detail(&self, slug_or_id: &str) -> Option<ServiceDetail> {
        self.fetch_service(slug_or_id)
            .await
            .map(|svc| service_detail(&svc))
    }

    /// Other services in the same category, excluding `exclude_id`.
    ///
    /// Ids are compared as text, so `"12"` and `12` are the same service.
    pub async fn related_services(
        &self,
        category: Option<&Category>,
        exclude_id: &str,
    ) -> Vec<RelatedService> {
        let Some(category) = category else {
            return Vec::new();
        };

        for query in related_queries(category) {
            let services = match self.get_path(&query).await {
                Ok(value) => service_list(value),
                Err(err) => {
                    debug!(%query, error = %err, "related services query failed");
                    continue;
                }
            };
            if services.is_empty() {
                continue;
            }
            return services
                .iter()
                .filter(|svc| svc.id.to_string() != exclude_id)
                .map(related_service)
                .collect();
        }
        Vec::new()
    }
}
