//! Presentation-ready records derived from backend payloads.
//!
//! All of these are stable shapes: they are what pages render and, for the
//! normalized collections, what gets written to the cache.

use serde::{Deserialize, Serialize};

use super::api::{Category, ItemId};

/// Bookable service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    /// Price in dollars, 0 when the backend value is missing or unparseable.
    pub price: f64,
    /// "50 min", free text from the backend, or [`crate::DURATION_PLACEHOLDER`].
    pub duration: String,
    pub description: String,
    pub image: String,
}

/// Bookable staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barber {
    pub id: u64,
    pub name: String,
    pub photo: Option<String>,
    /// Specialty names only.
    pub specialties: Vec<String>,
}

/// Portfolio image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: ItemId,
    pub src: String,
    pub category: String,
    /// "$40", "$40 - $60", or `None` when no bounds are known.
    pub price: Option<String>,
    pub description: String,
    pub artist: String,
    pub specialties: Vec<String>,
}

/// Category tile on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDisplay {
    pub name: String,
    pub desc: String,
    pub img: String,
}

/// Team member card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarberDisplay {
    pub name: String,
    pub specialty: String,
    /// "6 years" or "New".
    pub exp: String,
    pub img: String,
}

/// Testimonial card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialDisplay {
    pub name: String,
    pub text: String,
    /// Star rating as sent, half stars included. Rounded only when drawn.
    pub rating: f64,
    pub img: String,
}

/// Service card on the services page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub id: u64,
    pub slug: Option<String>,
    pub name: String,
    pub image: String,
    pub tagline: String,
    pub description: String,
    pub long_description: String,
    /// "$45.00" as sent by the backend, or empty.
    pub price: String,
    /// Raw duration text; format with [`crate::format_duration_long`].
    pub duration: String,
    pub category: Option<Category>,
}

/// Services grouped under one category heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceGroup {
    /// Category id, or `"uncategorized"`.
    pub id: ItemId,
    pub name: String,
    pub services: Vec<ServiceCard>,
}

/// Optional extra offered with a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub name: String,
    pub price: Option<String>,
}

/// Review shown on a service detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceReview {
    pub id: Option<u64>,
    pub name: String,
    pub rating: f64,
    pub comment: String,
    /// Raw ISO date; format at render time.
    pub date: Option<String>,
    pub avatar: String,
}

/// Long-form copy on the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedDescription {
    pub overview: String,
    pub includes: Vec<String>,
    pub experience: Vec<String>,
    pub benefits: Vec<String>,
    pub expectations: String,
}

impl Default for DetailedDescription {
    fn default() -> Self {
        let list = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
        Self {
            overview: "This premium service combines expert technique with high-quality products \
                       to deliver a polished result and long-lasting style."
                .to_string(),
            includes: list(&[
                "Personal consultation",
                "Precision haircut",
                "Professional styling",
                "Premium product finish",
            ]),
            experience: list(&[
                "Welcome & consultation",
                "Tailored cutting/styling",
                "Precision finishing touches",
                "Aftercare & product recommendation",
            ]),
            benefits: list(&[
                "Long-lasting, polished results",
                "Expert attention to detail",
                "Professional-grade products",
                "Tailored to your personal style",
            ]),
            expectations: "Expect a calm, professional environment and a detailed consultation. \
                           Results are tailored to your preferences and include product \
                           recommendations for maintenance."
                .to_string(),
        }
    }
}

/// Service detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetail {
    pub id: u64,
    pub slug: Option<String>,
    pub name: String,
    pub hero_image: String,
    pub gallery: Vec<String>,
    pub tagline: String,
    pub short_description: String,
    pub long_description: String,
    /// "$45" or empty.
    pub price: String,
    pub duration: String,
    pub difficulty: String,
    pub category: Option<Category>,
    pub add_ons: Vec<AddOn>,
    pub reviews: Vec<ServiceReview>,
    pub detailed_description: DetailedDescription,
}

/// Card in the "related services" strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedService {
    pub id: ItemId,
    pub slug: Option<String>,
    pub name: String,
    pub price: String,
    pub image: String,
}
