//! Error types for the data layer.
//!
//! Each concern gets its own enum:
//!
//! - [`StorageError`] - key/value storage operations (browser storage, memory)
//! - [`FetchError`] - HTTP requests against the backend API
//! - [`RelayError`] - outbound messages through the email relay
//! - [`BookingError`] / [`ContactError`] - form submissions, shown inline
//! - [`ConfigError`] - site configuration loading

use thiserror::Error;

/// Key/value storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage backend not available (private mode, no window, ...).
    #[error("storage not available")]
    Unavailable,
    /// Write rejected, usually because the quota is exhausted.
    #[error("failed to write key `{0}`")]
    WriteFailed(String),
    /// Removal rejected by the backend.
    #[error("failed to remove key `{0}`")]
    RemoveFailed(String),
    /// Reading the key failed.
    #[error("failed to read key `{0}`")]
    ReadFailed(String),
    /// Wiping the whole store was rejected.
    #[error("failed to clear storage")]
    ClearFailed,
}

/// Network/fetch errors for backend requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available.
    #[error("browser window not available")]
    NoWindow,
    /// Failed to build the request object.
    #[error("failed to create request for {0}")]
    RequestCreationFailed(String),
    /// Transport-level failure (DNS, CORS, connection reset).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response.
    #[error("failed to fetch {url} - {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },
    /// Body could not be read or parsed as the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Request took longer than the configured timeout.
    #[error("request timed out")]
    Timeout,
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Email relay errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// Request could not be sent.
    #[error("email relay unreachable: {0}")]
    Network(String),
    /// Relay answered with a non-2xx status.
    #[error("email relay rejected the message ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Body returned by the relay.
        message: String,
    },
}

/// Which of the two booking messages failed to go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryLeg {
    /// Notification to the shop.
    Business,
    /// Confirmation to the customer.
    Customer,
}

impl std::fmt::Display for DeliveryLeg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Business => write!(f, "shop notification"),
            Self::Customer => write!(f, "customer confirmation"),
        }
    }
}

/// Booking submission errors. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// One or more form fields are blank.
    #[error("Please fill in all fields.")]
    MissingFields,
    /// Email does not look like an address.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    /// Phone number has fewer than ten digits.
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    /// Selected service or barber is not in the loaded lists.
    #[error("Invalid service or barber selection")]
    InvalidSelection,
    /// The relay refused or could not be reached.
    #[error("Failed to send booking request ({leg}). Please try again or contact us directly.")]
    Delivery {
        /// Message that failed.
        leg: DeliveryLeg,
        /// Underlying relay failure.
        #[source]
        source: RelayError,
    },
}

/// Contact form errors. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Name, email or message is blank.
    #[error("Please fill in your name, email and message.")]
    MissingFields,
    /// Email does not look like an address.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    /// The relay refused or could not be reached.
    #[error("Failed to send your message. Please try again later.")]
    Delivery(#[source] RelayError),
}

/// Site configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML could not be parsed into [`crate::SiteConfig`].
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A required value is empty.
    #[error("missing configuration value `{0}`")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_messages() {
        assert_eq!(StorageError::ClearFailed.to_string(), "failed to clear storage");
        assert_eq!(
            StorageError::WriteFailed("artists_v1".to_string()).to_string(),
            "failed to write key `artists_v1`"
        );
        assert_ne!(
            StorageError::ClearFailed,
            StorageError::WriteFailed("*".to_string())
        );
    }
}
