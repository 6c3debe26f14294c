//! One component per route.

mod about;
mod booking;
mod contact;
mod gallery;
mod home;
mod not_found;
mod service_detail;
mod services;

pub use about::AboutPage;
pub use booking::BookingPage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use service_detail::ServiceDetailPage;
pub use services::ServicesPage;
