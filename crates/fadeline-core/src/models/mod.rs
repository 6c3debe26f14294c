//! Data models.
//!
//! - [`api`] - backend payloads as they arrive over the wire
//! - [`display`] - normalized records consumed by pages

pub mod api;
pub mod display;

pub use api::{
    ApiService, Artist, Category, GalleryItem, ImageRef, ItemId, NumberOrText, Review,
    SpecialtyRef,
};
pub use display::{
    AddOn, Barber, BarberDisplay, DetailedDescription, GalleryImage, RelatedService, Service,
    ServiceCard, ServiceDetail, ServiceDisplay, ServiceGroup, ServiceReview, TestimonialDisplay,
};
