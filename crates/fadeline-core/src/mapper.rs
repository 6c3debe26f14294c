//! View-model mappers for the home and about pages.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::models::{
    Artist, BarberDisplay, Category, Review, ServiceDisplay, SpecialtyRef, TestimonialDisplay,
};

/// Testimonials shown on the home page.
pub const TESTIMONIAL_LIMIT: usize = 6;

/// Specialty shown for artists without any.
pub const DEFAULT_SPECIALTY: &str = "Master Stylist";

/// Experience label for artists who joined this year (or in the future).
pub const NEW_ARTIST_LABEL: &str = "New";

const DEFAULT_CATEGORY_DESC: &str = "Premium service experience";
const DEFAULT_CATEGORY_IMG: &str = "/default-service.jpg";

/// Static artwork and copy per category slug: (slug, image, description).
const CATEGORY_ART: &[(&str, &str, &str)] = &[
    ("barbing", "/barber.jfif", "Precision cuts tailored to perfection"),
    ("beard-grooming", "/beard-grooming.jfif", "Sculpted beards that define your style"),
    ("hair-styling", "/hair-styling.jfif", "Intricate styling artistry"),
    ("pedicure-manicure", "/pedicure-manicure.jfif", "Manicured elegance at your fingertips"),
    ("makeup", "/makeup.jfif", "Flawless beauty transformations"),
    ("skin-care-facials", "/skin-care-facials.jfif", "Ultimate relaxation and rejuvenation"),
];

/// Category → home page service tile.
pub fn category_to_service(category: &Category) -> ServiceDisplay {
    let slug = category.slug.as_deref().unwrap_or_default();
    let (img, desc) = CATEGORY_ART
        .iter()
        .find(|(s, _, _)| *s == slug)
        .map_or((DEFAULT_CATEGORY_IMG, DEFAULT_CATEGORY_DESC), |(_, img, desc)| {
            (*img, *desc)
        });
    ServiceDisplay {
        name: category.name.clone(),
        desc: desc.to_string(),
        img: img.to_string(),
    }
}

/// Map every category.
pub fn map_categories_to_services(categories: &[Category]) -> Vec<ServiceDisplay> {
    categories.iter().map(category_to_service).collect()
}

/// Year of an ISO-8601 timestamp or date.
fn parse_year(raw: &str) -> Option<i32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).year());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.year());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// "N years" from the calendar-year difference, or [`NEW_ARTIST_LABEL`].
///
/// Missing or unparseable timestamps are treated as new.
pub fn experience_label(created_at: Option<&str>, now_millis: i64) -> String {
    let Some(now) = DateTime::<Utc>::from_timestamp_millis(now_millis) else {
        return NEW_ARTIST_LABEL.to_string();
    };
    let Some(created) = created_at.and_then(parse_year) else {
        return NEW_ARTIST_LABEL.to_string();
    };

    let years = now.year() - created;
    if years > 0 {
        format!("{years} years")
    } else {
        NEW_ARTIST_LABEL.to_string()
    }
}

/// Artist → team member card.
pub fn artist_to_barber(artist: &Artist, now_millis: i64) -> BarberDisplay {
    BarberDisplay {
        name: artist.name.clone(),
        specialty: artist
            .specialties
            .first()
            .map(SpecialtyRef::display_name)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SPECIALTY.to_string()),
        exp: experience_label(artist.created_at.as_deref(), now_millis),
        img: artist.photo.clone().unwrap_or_default(),
    }
}

/// Map every artist.
pub fn map_artists_to_barbers(artists: &[Artist], now_millis: i64) -> Vec<BarberDisplay> {
    artists
        .iter()
        .map(|a| artist_to_barber(a, now_millis))
        .collect()
}

/// Review → testimonial card.
pub fn review_to_testimonial(review: &Review) -> TestimonialDisplay {
    TestimonialDisplay {
        name: review.name.clone(),
        text: review.comment.clone(),
        rating: review.stars.or(review.rating).unwrap_or(0.0),
        img: review.profile_picture.clone().unwrap_or_default(),
    }
}

/// Map the first [`TESTIMONIAL_LIMIT`] reviews.
pub fn map_reviews_to_testimonials(reviews: &[Review]) -> Vec<TestimonialDisplay> {
    reviews
        .iter()
        .take(TESTIMONIAL_LIMIT)
        .map(review_to_testimonial)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    // 2026-10-18T12:00:00Z
    const NOW: i64 = 1_792_324_800_000;

    fn category(slug: Option<&str>) -> Category {
        Category {
            id: 1,
            name: "Barbing".to_string(),
            slug: slug.map(str::to_string),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_category_lookup() {
        let tile = category_to_service(&category(Some("beard-grooming")));
        assert_eq!(tile.img, "/beard-grooming.jfif");
        assert_eq!(tile.desc, "Sculpted beards that define your style");

        let unknown = category_to_service(&category(Some("tattoo")));
        assert_eq!(unknown.img, DEFAULT_CATEGORY_IMG);
        assert_eq!(unknown.desc, DEFAULT_CATEGORY_DESC);

        let no_slug = category_to_service(&category(None));
        assert_eq!(no_slug.desc, DEFAULT_CATEGORY_DESC);
    }

    #[test]
    fn test_experience_label() {
        assert_eq!(experience_label(Some("2020-01-01"), NOW), "6 years");
        assert_eq!(experience_label(Some("2020-12-31T23:00:00Z"), NOW), "6 years");
        assert_eq!(experience_label(Some("2024-05-01T10:00:00.123456"), NOW), "2 years");
        assert_eq!(experience_label(Some("2026-01-01"), NOW), NEW_ARTIST_LABEL);
        assert_eq!(experience_label(Some("2030-01-01"), NOW), NEW_ARTIST_LABEL);
        assert_eq!(experience_label(Some("yesterday"), NOW), NEW_ARTIST_LABEL);
        assert_eq!(experience_label(None, NOW), NEW_ARTIST_LABEL);
    }

    #[test]
    fn test_artist_to_barber() {
        let artist: Artist = serde_json::from_value(json!({
            "id": 1,
            "name": "Jo",
            "photo": "x.jpg",
            "specialties": [{ "id": 1, "name": "Fades" }],
            "created_at": "2020-01-01",
        }))
        .unwrap();
        assert_eq!(
            artist_to_barber(&artist, NOW),
            BarberDisplay {
                name: "Jo".to_string(),
                specialty: "Fades".to_string(),
                exp: "6 years".to_string(),
                img: "x.jpg".to_string(),
            }
        );
    }

    #[test]
    fn test_artist_missing_fields() {
        let artist: Artist = serde_json::from_value(json!({ "id": 2 })).unwrap();
        let card = artist_to_barber(&artist, NOW);
        assert_eq!(card.name, "");
        assert_eq!(card.specialty, DEFAULT_SPECIALTY);
        assert_eq!(card.exp, NEW_ARTIST_LABEL);
        assert_eq!(card.img, "");
    }

    #[test]
    fn test_reviews_truncated_to_six() {
        let reviews: Vec<Review> = (0..8)
            .map(|i| {
                serde_json::from_value(json!({
                    "id": i,
                    "name": format!("R{i}"),
                    "stars": 4,
                    "comment": "Sharp",
                }))
                .unwrap()
            })
            .collect();
        let cards = map_reviews_to_testimonials(&reviews);
        assert_eq!(cards.len(), TESTIMONIAL_LIMIT);
        assert_eq!(cards[5].name, "R5");
        assert_eq!(cards[0].rating, 4.0);
    }

    #[test]
    fn test_review_missing_fields() {
        let review: Review = serde_json::from_value(json!({})).unwrap();
        assert_eq!(
            review_to_testimonial(&review),
            TestimonialDisplay {
                name: String::new(),
                text: String::new(),
                rating: 0.0,
                img: String::new(),
            }
        );
    }

    #[test]
    fn test_review_half_stars_kept() {
        let review: Review = serde_json::from_value(json!({ "rating": 4.5 })).unwrap();
        assert_eq!(review_to_testimonial(&review).rating, 4.5);
    }

    #[test]
    fn test_null_fields_map_to_empty() {
        let review: Review = serde_json::from_value(json!({
            "name": null,
            "comment": null,
            "stars": null,
            "profile_picture": null,
        }))
        .unwrap();
        let card = review_to_testimonial(&review);
        assert_eq!(card.name, "");
        assert_eq!(card.text, "");
        assert_eq!(card.rating, 0.0);

        let artist: Artist = serde_json::from_value(json!({
            "id": 3,
            "name": "Sam",
            "specialties": null,
            "created_at": null,
        }))
        .unwrap();
        let card = artist_to_barber(&artist, NOW);
        assert_eq!(card.specialty, DEFAULT_SPECIALTY);
        assert_eq!(card.exp, NEW_ARTIST_LABEL);
    }
}
