//! Normalization from backend payloads to display records.
//!
//! Every function here is pure and total: missing or malformed fields turn
//! into defaults, never errors.

use serde_json::Value;

use crate::models::{
    AddOn, ApiService, Artist, Barber, DetailedDescription, GalleryImage, GalleryItem, ImageRef,
    ItemId, NumberOrText, RelatedService, Review, Service, ServiceCard, ServiceDetail,
    ServiceGroup, ServiceReview, SpecialtyRef,
};

/// Shown when a service has no duration.
pub const DURATION_PLACEHOLDER: &str = "—";

/// Category name for gallery items without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Group id for services without a category.
pub const UNCATEGORIZED_GROUP_ID: &str = "uncategorized";

/// Group heading for services without a category.
pub const UNCATEGORIZED_GROUP_NAME: &str = "Other Services";

// =============================================================================
// Scalars
// =============================================================================

/// Normalize a price to a number.
///
/// Numbers pass through. Strings keep only digits and dots, then the longest
/// leading decimal is parsed (`"$45.00"` → 45). Anything else is 0.
pub fn normalize_price(price: Option<&NumberOrText>) -> f64 {
    match price {
        None => 0.0,
        Some(NumberOrText::Number(n)) if n.is_finite() => *n,
        Some(NumberOrText::Number(_)) => 0.0,
        Some(NumberOrText::Text(s)) => parse_decimal_prefix(s).unwrap_or(0.0),
    }
}

fn parse_decimal_prefix(raw: &str) -> Option<f64> {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let int_len = filtered.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = int_len;
    if filtered.as_bytes().get(int_len) == Some(&b'.') {
        let frac_len = filtered[int_len + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        end = int_len + 1 + frac_len;
    }

    filtered[..end].parse::<f64>().ok()
}

/// Normalize a duration to display text.
///
/// Missing or empty → [`DURATION_PLACEHOLDER`]; a number or an all-digit
/// string gets `" min"` appended; other text passes through unchanged.
pub fn normalize_duration(duration: Option<&NumberOrText>) -> String {
    match duration {
        None => DURATION_PLACEHOLDER.to_string(),
        Some(NumberOrText::Number(n)) => format!("{n} min"),
        Some(NumberOrText::Text(s)) if s.is_empty() => DURATION_PLACEHOLDER.to_string(),
        Some(NumberOrText::Text(s)) if s.bytes().all(|b| b.is_ascii_digit()) => {
            format!("{s} min")
        }
        Some(NumberOrText::Text(s)) => s.clone(),
    }
}

/// Render a price without trailing `.0` for whole amounts.
pub fn format_price(price: f64) -> String {
    format!("{price}")
}

/// Long-form duration for the services page: "45 mins", "1 hr", "2 hrs 15 mins".
///
/// Digits and dots are extracted from the input; text without any is
/// returned unchanged, and an empty input gives an empty string.
pub fn format_duration_long(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let Some(value) = parse_decimal_prefix(raw) else {
        return raw.to_string();
    };

    let minutes = value.floor() as u64;
    if minutes < 60 {
        return format!("{minutes} mins");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    let label = if hours == 1 { "hr" } else { "hrs" };
    if mins == 0 {
        format!("{hours} {label}")
    } else {
        format!("{hours} {label} {mins} mins")
    }
}

/// `"$"` + backend text when the value is present, otherwise empty.
pub fn dollar_label(price: Option<&NumberOrText>) -> String {
    match price {
        Some(p) if p.is_truthy() => format!("${p}"),
        _ => String::new(),
    }
}

/// Price range label for a gallery item.
///
/// Both bounds present and different → `"$min - $max"`; otherwise whichever
/// bound exists, min first; `None` when neither does.
pub fn price_range(min: Option<&NumberOrText>, max: Option<&NumberOrText>) -> Option<String> {
    let min = min.map(ToString::to_string).filter(|s| !s.is_empty());
    let max = max.map(ToString::to_string).filter(|s| !s.is_empty());
    match (min, max) {
        (Some(lo), Some(hi)) if lo != hi => Some(format!("${lo} - ${hi}")),
        (Some(lo), _) => Some(format!("${lo}")),
        (None, Some(hi)) => Some(format!("${hi}")),
        (None, None) => None,
    }
}

// =============================================================================
// Loose shapes
// =============================================================================

impl SpecialtyRef {
    /// Resolve to a display name.
    ///
    /// Objects without a string `name` fall back to their JSON text.
    pub fn display_name(&self) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::Object(map) => match map.get("name").and_then(Value::as_str) {
                Some(name) => name.to_string(),
                None => Value::Object(map.clone()).to_string(),
            },
        }
    }
}

/// Flatten specialties into names.
pub fn flatten_specialties(specialties: &[SpecialtyRef]) -> Vec<String> {
    specialties.iter().map(SpecialtyRef::display_name).collect()
}

impl ImageRef {
    /// Resolve to a URL, `None` for objects without a string `image`.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Object(map) => map.get("image").and_then(Value::as_str),
        }
    }
}

fn first_non_empty<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn hero_image(svc: &ApiService) -> String {
    first_non_empty([
        svc.hero_image.as_deref(),
        svc.gallery.first().and_then(ImageRef::url),
    ])
}

// =============================================================================
// Collections
// =============================================================================

/// Backend service → bookable service.
pub fn normalize_service(svc: &ApiService) -> Service {
    Service {
        id: svc.id,
        name: svc.name.clone(),
        price: normalize_price(svc.price.as_ref()),
        duration: normalize_duration(svc.duration.as_ref()),
        description: first_non_empty([
            svc.short_description.as_deref(),
            svc.long_description.as_deref(),
        ]),
        image: first_non_empty([svc.hero_image.as_deref(), svc.image.as_deref()]),
    }
}

/// Backend artist → bookable barber.
pub fn normalize_barber(artist: &Artist) -> Barber {
    Barber {
        id: artist.id,
        name: artist.name.clone(),
        photo: artist.photo.clone(),
        specialties: flatten_specialties(&artist.specialties),
    }
}

/// Backend gallery item → portfolio image.
pub fn gallery_image(item: &GalleryItem) -> GalleryImage {
    GalleryImage {
        id: item.id.clone(),
        src: item.hero_image.clone(),
        category: item
            .category
            .as_ref()
            .map_or_else(|| UNCATEGORIZED.to_string(), |c| c.name.clone()),
        price: price_range(item.min_price.as_ref(), item.max_price.as_ref()),
        description: item.name.clone(),
        artist: item
            .artist
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        specialties: item
            .artist
            .as_ref()
            .map(|a| flatten_specialties(&a.specialties))
            .unwrap_or_default(),
    }
}

/// Backend service → card on the services page.
pub fn service_card(svc: &ApiService) -> ServiceCard {
    ServiceCard {
        id: svc.id,
        slug: svc.slug.clone(),
        name: svc.name.clone(),
        image: hero_image(svc),
        tagline: svc.tagline.clone().unwrap_or_default(),
        description: svc.short_description.clone().unwrap_or_default(),
        long_description: svc.long_description.clone().unwrap_or_default(),
        price: dollar_label(svc.price.as_ref()),
        duration: match &svc.duration {
            Some(d) if d.is_truthy() => d.to_string(),
            _ => String::new(),
        },
        category: svc.category.clone(),
    }
}

/// Group service cards by category, in order of first appearance.
pub fn group_services(services: &[ApiService]) -> Vec<ServiceGroup> {
    let mut groups: Vec<ServiceGroup> = Vec::new();
    for svc in services {
        let (id, name) = match &svc.category {
            Some(cat) => (ItemId::Number(cat.id), cat.name.clone()),
            None => (
                ItemId::Text(UNCATEGORIZED_GROUP_ID.to_string()),
                UNCATEGORIZED_GROUP_NAME.to_string(),
            ),
        };
        let card = service_card(svc);
        match groups.iter_mut().find(|g| g.id == id) {
            Some(group) => group.services.push(card),
            None => groups.push(ServiceGroup {
                id,
                name,
                services: vec![card],
            }),
        }
    }
    groups
}

fn service_review(review: &Review) -> ServiceReview {
    ServiceReview {
        id: review.id,
        name: review.name.clone(),
        rating: review.stars.or(review.rating).unwrap_or(5.0),
        comment: review.comment.clone(),
        date: review.date.clone(),
        avatar: first_non_empty([
            review.profile_picture.as_deref(),
            review.avatar.as_deref(),
        ]),
    }
}

fn add_on(value: &Value) -> Option<AddOn> {
    match value {
        Value::String(name) if !name.is_empty() => Some(AddOn {
            name: name.clone(),
            price: None,
        }),
        Value::Object(map) => {
            let name = map.get("name").and_then(Value::as_str)?.to_string();
            let price = match map.get("price") {
                Some(Value::Number(n)) => Some(format!("${n}")),
                Some(Value::String(s)) if !s.is_empty() => Some(format!("${s}")),
                _ => None,
            };
            Some(AddOn { name, price })
        }
        _ => None,
    }
}

/// Backend service → detail page record.
pub fn service_detail(svc: &ApiService) -> ServiceDetail {
    let detailed_description = svc
        .detailed_description
        .clone()
        .and_then(|v| serde_json::from_value::<DetailedDescription>(v).ok())
        .unwrap_or_default();

    ServiceDetail {
        id: svc.id,
        slug: svc.slug.clone(),
        name: svc.name.clone(),
        hero_image: hero_image(svc),
        gallery: svc
            .gallery
            .iter()
            .filter_map(ImageRef::url)
            .map(str::to_string)
            .collect(),
        tagline: svc.tagline.clone().unwrap_or_default(),
        short_description: svc.short_description.clone().unwrap_or_default(),
        long_description: svc.long_description.clone().unwrap_or_default(),
        price: dollar_label(svc.price.as_ref()),
        duration: match &svc.duration {
            Some(d) if d.is_truthy() => d.to_string(),
            _ => String::new(),
        },
        difficulty: first_non_empty([svc.difficulty_level.as_deref(), svc.difficulty.as_deref()]),
        category: svc.category.clone(),
        add_ons: svc.add_ons.iter().filter_map(add_on).collect(),
        reviews: svc.reviews.iter().map(service_review).collect(),
        detailed_description,
    }
}

/// Backend service → related-service card.
pub fn related_service(svc: &ApiService) -> RelatedService {
    RelatedService {
        id: ItemId::Number(svc.id),
        slug: svc.slug.clone(),
        name: svc.name.clone(),
        price: dollar_label(svc.price.as_ref()),
        image: hero_image(svc),
    }
}
