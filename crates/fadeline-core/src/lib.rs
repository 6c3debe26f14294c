//! Platform-agnostic data layer for the Fadeline site.
//!
//! This crate provides:
//! - [`ExpiringCache`] over a [`KeyValueStore`], with a pluggable [`Clock`]
//! - [`ApiClient`] cache-first accessors with stale-on-error fallback
//! - [`normalize`] and [`mapper`] view-model projections
//! - [`booking`] and [`contact`] form submission over an [`EmailRelay`]
//! - [`ThemeStore`] light/dark preference
//!
//! Browser adapters (localStorage, Fetch API, EmailJS) live in the app crate.

pub mod api;
pub mod booking;
mod cache;
mod clock;
pub mod config;
pub mod contact;
pub mod error;
mod fetch;
pub mod gallery;
pub mod mapper;
pub mod models;
pub mod normalize;
mod relay;
mod storage;
mod theme;

#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use api::{ApiClient, HomeData, Loaded, Resource, Source, resources};
pub use booking::{BookingForm, BookingMessage, TIME_SLOTS, submit_booking};
pub use cache::ExpiringCache;
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use config::{ApiConfig, EmailConfig, SiteConfig};
pub use contact::{ContactForm, ContactOutcome, submit_contact};
pub use error::{
    BookingError, ConfigError, ContactError, DeliveryLeg, FetchError, RelayError, StorageError,
};
pub use fetch::{Fetcher, decode_list, encode_component};
pub use normalize::{DURATION_PLACEHOLDER, format_duration_long, format_price};
pub use relay::{EMAILJS_SEND_URL, EmailRelay, SendRequest, TemplateParams};
pub use storage::{KeyValueStore, MemoryStore, UnavailableStore};
pub use theme::{THEME_KEY, Theme, ThemeStore};
