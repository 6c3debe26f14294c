//! Backend payload types.
//!
//! The API is loosely typed: prices arrive as strings or numbers, specialties
//! as names or objects, gallery entries as URLs or objects. Those shapes are
//! captured by small untagged enums here and resolved into display types by
//! [`crate::normalize`]; nothing outside this crate sees them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifier that may be numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id.
    Number(u64),
    /// String id or slug.
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

/// Scalar sent either as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    /// JSON number.
    Number(f64),
    /// JSON string.
    Text(String),
}

impl NumberOrText {
    /// Whether the value counts as present: non-zero number or non-empty text.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Specialty entry: a bare name or an object with a `name` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecialtyRef {
    /// Bare name.
    Name(String),
    /// Object form, e.g. `{"id": 1, "name": "Fades", "description": "..."}`.
    Object(Map<String, Value>),
}

/// Gallery entry on a service: a URL or an object with an `image` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// Bare URL.
    Url(String),
    /// Object form, e.g. `{"id": 3, "image": "https://..."}`.
    Object(Map<String, Value>),
}

/// Like `#[serde(default)]`, but an explicit `null` also yields the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Service category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category id.
    pub id: u64,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// URL slug, keys the static image/description table.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Staff member as returned by `artists/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialties: Vec<SpecialtyRef>,
    /// ISO-8601 timestamp; drives the experience label.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Customer review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<u64>,
    /// Ids of the services the review refers to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub stars: Option<f64>,
    /// Some endpoints send `rating` instead of `stars`.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Service as returned by `services/` and `services/{slug}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiService {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub price: Option<NumberOrText>,
    /// Minutes as a number, a digit string, or free text ("1 hour").
    #[serde(default)]
    pub duration: Option<NumberOrText>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<ImageRef>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "addOns",
        alias = "addons"
    )]
    pub add_ons: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
    #[serde(default, alias = "detailedDescription")]
    pub detailed_description: Option<Value>,
}

/// Portfolio entry as returned by `galleries/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub artist: Option<Artist>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero_image: String,
    #[serde(default)]
    pub min_price: Option<NumberOrText>,
    #[serde(default)]
    pub max_price: Option<NumberOrText>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_portfolio_grid: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_artist_specialty_shapes() {
        let artist: Artist = serde_json::from_value(json!({
            "id": 1,
            "name": "Jo",
            "specialties": ["Color", { "id": 2, "name": "Cuts" }],
        }))
        .unwrap();
        assert_eq!(artist.specialties[0], SpecialtyRef::Name("Color".to_string()));
        assert!(matches!(artist.specialties[1], SpecialtyRef::Object(_)));
        assert_eq!(artist.photo, None);
        assert_eq!(artist.created_at, None);
    }

    #[test]
    fn test_service_loose_fields() {
        let svc: ApiService = serde_json::from_value(json!({
            "id": 7,
            "name": "Skin Fade",
            "price": "45.00",
            "duration": 50,
            "gallery": ["a.jpg", { "image": "b.jpg" }],
            "addOns": [{ "name": "Hot towel" }],
            "hero_image": null,
        }))
        .unwrap();
        assert_eq!(svc.price, Some(NumberOrText::Text("45.00".to_string())));
        assert_eq!(svc.duration, Some(NumberOrText::Number(50.0)));
        assert_eq!(svc.gallery.len(), 2);
        assert_eq!(svc.add_ons.len(), 1);
        assert_eq!(svc.hero_image, None);
    }

    #[test]
    fn test_gallery_item_id_shapes() {
        let items: Vec<GalleryItem> = serde_json::from_value(json!([
            { "id": 1, "hero_image": "a.jpg" },
            { "id": "look-2", "hero_image": "b.jpg", "min_price": null },
        ]))
        .unwrap();
        assert_eq!(items[0].id, ItemId::Number(1));
        assert_eq!(items[1].id.to_string(), "look-2");
        assert!(!items[1].is_featured);
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let artist: Artist = serde_json::from_value(json!({
            "id": 2,
            "name": null,
            "specialties": null,
        }))
        .unwrap();
        assert_eq!(artist.name, "");
        assert!(artist.specialties.is_empty());

        let review: Review = serde_json::from_value(json!({
            "name": null,
            "comment": null,
            "services": null,
            "stars": 4,
        }))
        .unwrap();
        assert_eq!(review.name, "");
        assert_eq!(review.comment, "");
        assert!(review.services.is_empty());

        let svc: ApiService = serde_json::from_value(json!({
            "id": 3,
            "name": null,
            "gallery": null,
            "add_ons": null,
            "reviews": null,
        }))
        .unwrap();
        assert_eq!(svc.name, "");
        assert!(svc.gallery.is_empty());
        assert!(svc.add_ons.is_empty());
        assert!(svc.reviews.is_empty());

        let item: GalleryItem = serde_json::from_value(json!({
            "id": 4,
            "name": null,
            "hero_image": null,
            "is_featured": null,
            "is_portfolio_grid": null,
        }))
        .unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.hero_image, "");
        assert!(!item.is_featured);
        assert!(!item.is_portfolio_grid);
    }

    #[test]
    fn test_truthiness() {
        assert!(NumberOrText::Number(45.0).is_truthy());
        assert!(!NumberOrText::Number(0.0).is_truthy());
        assert!(!NumberOrText::Text(String::new()).is_truthy());
        assert!(NumberOrText::Text("0".to_string()).is_truthy());
    }
}
