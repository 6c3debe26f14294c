//! Site configuration.
//!
//! Loaded from TOML (the app embeds `assets/site.toml` at compile time) and
//! passed explicitly to the API client and the booking flow.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default cache lifetime: one hour.
pub const DEFAULT_CACHE_TTL_MS: u64 = 60 * 60 * 1000;

/// Backend API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the JSON API. Always ends with `/` after loading.
    pub base_url: String,
    /// Lifetime of cached collections.
    #[serde(default = "default_ttl")]
    pub cache_ttl_ms: u64,
    /// Optional request timeout. Unset means wait indefinitely.
    #[serde(default)]
    pub fetch_timeout_ms: Option<u32>,
}

fn default_ttl() -> u64 {
    DEFAULT_CACHE_TTL_MS
}

impl ApiConfig {
    /// Config with the default TTL and no timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut config = Self {
            base_url: base_url.into(),
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            fetch_timeout_ms: None,
        };
        config.normalize();
        config
    }

    /// Cache lifetime as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    /// Absolute URL for a resource path such as `"artists/"`.
    ///
    /// Absolute `http(s)` paths are returned unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    fn normalize(&mut self) {
        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }
    }
}

/// Email relay (EmailJS) settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailConfig {
    /// Relay service id.
    pub service_id: String,
    /// Public key identifying the site to the relay.
    pub public_key: String,
    /// Template for the shop's booking notification.
    pub business_template: String,
    /// Template for the customer's booking confirmation.
    pub customer_template: String,
    /// Template for contact form messages. Unset: contact is confirmed locally.
    #[serde(default)]
    pub contact_template: Option<String>,
}

/// Complete site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub api: ApiConfig,
    pub email: EmailConfig,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(raw)?;
        config.validate()?;
        config.api.normalize();
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("api.base_url", &self.api.base_url),
            ("email.service_id", &self.email.service_id),
            ("email.public_key", &self.email.public_key),
            ("email.business_template", &self.email.business_template),
            ("email.customer_template", &self.email.customer_template),
        ];
        match required.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::Missing(*name)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [api]
        base_url = "https://example.test/api"
        fetch_timeout_ms = 8000

        [email]
        service_id = "service_x"
        public_key = "pk"
        business_template = "template_shop"
        customer_template = "template_customer"
    "#;

    #[test]
    fn test_parse_sample() {
        let config = SiteConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.api.base_url, "https://example.test/api/");
        assert_eq!(config.api.cache_ttl(), Duration::from_secs(3600));
        assert_eq!(config.api.fetch_timeout_ms, Some(8000));
        assert_eq!(config.email.contact_template, None);
    }

    #[test]
    fn test_missing_value() {
        let raw = SAMPLE.replace("\"pk\"", "\"  \"");
        assert!(matches!(
            SiteConfig::from_toml_str(&raw),
            Err(ConfigError::Missing("email.public_key"))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            SiteConfig::from_toml_str("[api"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_url_join() {
        let api = ApiConfig::new("https://example.test/api");
        assert_eq!(api.url("artists/"), "https://example.test/api/artists/");
        assert_eq!(api.url("/reviews/"), "https://example.test/api/reviews/");
        assert_eq!(api.url("https://cdn.test/x.json"), "https://cdn.test/x.json");
    }
}
