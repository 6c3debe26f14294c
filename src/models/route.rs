//! Hash-based routing.

/// Application pages.
///
/// URL format: `#/services/silk-press`. Hash routing keeps the site
/// servable from any static host without rewrite rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `#/` or empty hash
    Home,
    About,
    Services,
    /// `#/services/{slug or id}`
    ServiceDetail { slug: String },
    Gallery,
    Booking,
    Contact,
    /// Anything else
    NotFound,
}

impl AppRoute {
    /// Top-level pages shown in the navigation bar: (label, route).
    pub fn nav_items() -> [(&'static str, AppRoute); 6] {
        [
            ("Home", Self::Home),
            ("About", Self::About),
            ("Services", Self::Services),
            ("Gallery", Self::Gallery),
            ("Booking", Self::Booking),
            ("Contact", Self::Contact),
        ]
    }

    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');
        let mut segments = path.splitn(2, '/');

        match (segments.next().unwrap_or_default(), segments.next()) {
            ("", None) => Self::Home,
            ("about", None) => Self::About,
            ("services", None) => Self::Services,
            ("services", Some(slug)) if !slug.contains('/') => Self::ServiceDetail {
                slug: slug.to_string(),
            },
            ("gallery", None) => Self::Gallery,
            ("booking", None) => Self::Booking,
            ("contact", None) => Self::Contact,
            _ => Self::NotFound,
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home | Self::NotFound => "#/".to_string(),
            Self::About => "#/about".to_string(),
            Self::Services => "#/services".to_string(),
            Self::ServiceDetail { slug } => format!("#/services/{slug}"),
            Self::Gallery => "#/gallery".to_string(),
            Self::Booking => "#/booking".to_string(),
            Self::Contact => "#/contact".to_string(),
        }
    }

    /// Whether a nav item for `self` should be highlighted on `current`.
    pub fn is_section_of(&self, current: &AppRoute) -> bool {
        match (self, current) {
            (Self::Services, Self::ServiceDetail { .. }) => true,
            _ => self == current,
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route (adds a history entry and fires `hashchange`).
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }
}
