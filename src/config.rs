//! Application configuration.
//!
//! Centralizes site copy and settings. The backend and email relay settings
//! are loaded at compile time from `assets/site.toml` using `include_str!`.

use fadeline_core::{ConfigError, SiteConfig};

// =============================================================================
// Site Settings (loaded at compile time)
// =============================================================================

/// Raw site settings.
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Parse the embedded site settings.
pub fn site_config() -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_toml_str(SITE_TOML)
}

// =============================================================================
// Business Details
// =============================================================================

pub const SHOP_NAME: &str = "Fade and Finishes";

pub const SHOP_SUBTITLE: &str = "Where Luxury Meets Precision";

pub const SHOP_TAGLINE: &str =
    "Where luxury meets precision. Elevating grooming to an art form since 2010.";

pub const ADDRESS_LINES: [&str; 2] = ["123 Premium Ave, Suite 100", "New York, NY 10036"];

pub const PHONE_DISPLAY: &str = "(555) 123-4567";
pub const PHONE_HREF: &str = "tel:+15551234567";
pub const WHATSAPP_HREF: &str = "https://wa.me/15551234567";

pub const CONTACT_EMAIL: &str = "hello@fadeandfinishes.com";

pub const INSTAGRAM_HREF: &str = "https://instagram.com/fadeandfinishes";
pub const FACEBOOK_HREF: &str = "https://facebook.com/fadeandfinishes";

pub const OPENING_HOURS: [&str; 3] = ["Mon–Fri: 9am–8pm", "Sat: 10am–9pm", "Sun: Closed"];

// =============================================================================
// Page Copy
// =============================================================================

/// Hero backgrounds: (dark theme, light theme).
pub const HERO_BACKGROUNDS: (&str, &str) = ("/herodark.jfif", "/herolight.jfif");

pub const ABOUT_INTRO: &str = "Fade and Finishes is more than a salon. It is a destination for \
     those who demand perfection in every detail.";

pub const ABOUT_STORY: [&str; 3] = [
    "Fade and Finishes was born from a vision to elevate grooming and beauty into an art form. \
     Founded by passionate professionals who trained across Europe and North America, we brought \
     together the finest techniques, premium products, and an unwavering commitment to excellence.",
    "Our founders recognized a gap in the market: a need for a sanctuary where clients could \
     experience not just a service, but a transformation. A place where precision barbering meets \
     luxury beauty, where every visit leaves you feeling confident and impeccably groomed.",
    "Today, Fade and Finishes stands as a beacon of sophistication in the grooming industry. \
     We've built a reputation on trust, skill, and an atmosphere that makes every client feel \
     like royalty.",
];

/// (title, description)
pub const ABOUT_VALUES: [(&str, &str); 3] = [
    (
        "Precision Craftsmanship",
        "Every cut, every stroke, every detail is executed with meticulous attention and artistic precision.",
    ),
    (
        "Client-Centered Care",
        "Your comfort, satisfaction, and confidence are at the heart of everything we do.",
    ),
    (
        "Luxury Experience",
        "From the moment you arrive to the finishing touches, we ensure a premium, indulgent experience.",
    ),
];

/// (label, description)
pub const ABOUT_STATS: [(&str, &str); 4] = [
    ("15+ Years", "Industry Excellence"),
    ("50+ Celebrity", "Clients Served"),
    ("10,000+", "Happy Customers"),
    ("International", "Training & Certifications"),
];

// =============================================================================
// UI Configuration
// =============================================================================

/// How long form success banners stay visible.
pub const SUCCESS_BANNER_MS: u32 = 5000;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = site_config().unwrap();
        assert_eq!(
            config.api.base_url,
            "https://fade-and-finishes.onrender.com/api/"
        );
        assert_eq!(config.api.fetch_timeout_ms, None);
        assert_eq!(config.email.contact_template, None);
    }
}
