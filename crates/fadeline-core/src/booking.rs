//! Appointment requests.
//!
//! A booking is not stored anywhere: it is validated, resolved against the
//! loaded services and barbers, and mailed twice through the relay (shop
//! notification first, customer confirmation second).

use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::config::EmailConfig;
use crate::error::{BookingError, DeliveryLeg};
use crate::models::{Barber, Service};
use crate::normalize::format_price;
use crate::relay::{EmailRelay, TemplateParams};

/// Appointment times offered by the form.
pub const TIME_SLOTS: [&str; 11] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM", "6:00 PM", "7:00 PM",
];

/// Minimum digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Whether `phone` has at least [`MIN_PHONE_DIGITS`] digits, ignoring
/// separators.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Booking form contents as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Selected service id.
    pub service: String,
    /// Selected barber id.
    pub barber: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// One of [`TIME_SLOTS`].
    pub time: String,
}

impl BookingForm {
    /// Field checks, in order: completeness, email, phone.
    pub fn validate(&self) -> Result<(), BookingError> {
        let fields = [
            &self.name,
            &self.email,
            &self.phone,
            &self.service,
            &self.barber,
            &self.date,
            &self.time,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(BookingError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(BookingError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(BookingError::InvalidPhone);
        }
        Ok(())
    }

    /// Resolve the selected ids against the loaded lists.
    pub fn resolve<'a>(
        &self,
        services: &'a [Service],
        barbers: &'a [Barber],
    ) -> Result<(&'a Service, &'a Barber), BookingError> {
        let service = services.iter().find(|s| s.id.to_string() == self.service);
        let barber = barbers.iter().find(|b| b.id.to_string() == self.barber);
        service.zip(barber).ok_or(BookingError::InvalidSelection)
    }
}

/// Template variables of a booking email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `"{name} - ${price} ({duration})"`.
    pub service: String,
    /// `"{name} - {specialty, specialty}"`.
    pub barber: String,
    pub date: String,
    pub time: String,
}

impl BookingMessage {
    pub fn new(form: &BookingForm, service: &Service, barber: &Barber) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            service: format!(
                "{} - ${} ({})",
                service.name,
                format_price(service.price),
                service.duration
            ),
            barber: format!("{} - {}", barber.name, barber.specialties.join(", ")),
            date: form.date.clone(),
            time: form.time.clone(),
        }
    }

    /// Flatten into relay template variables.
    pub fn params(&self) -> TemplateParams {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("service", &self.service),
            ("barber", &self.barber),
            ("date", &self.date),
            ("time", &self.time),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
    }
}

/// Validate, resolve and send a booking.
///
/// The customer confirmation is only attempted after the shop notification
/// went out.
pub async fn submit_booking<R: EmailRelay>(
    relay: &R,
    email: &EmailConfig,
    form: &BookingForm,
    services: &[Service],
    barbers: &[Barber],
) -> Result<BookingMessage, BookingError> {
    form.validate()?;
    let (service, barber) = form.resolve(services, barbers)?;
    let message = BookingMessage::new(form, service, barber);
    let params = message.params();

    let legs = [
        (DeliveryLeg::Business, email.business_template.as_str()),
        (DeliveryLeg::Customer, email.customer_template.as_str()),
    ];
    for (leg, template) in legs {
        if let Err(source) = relay.send(template, &params).await {
            warn!(%leg, error = %source, "booking email failed");
            return Err(BookingError::Delivery { leg, source });
        }
        info!(%leg, template, "booking email sent");
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;
    use crate::testing::RecordingRelay;

    fn email_config() -> EmailConfig {
        EmailConfig {
            service_id: "service_x".to_string(),
            public_key: "pk".to_string(),
            business_template: "template_shop".to_string(),
            customer_template: "template_customer".to_string(),
            contact_template: None,
        }
    }

    fn services() -> Vec<Service> {
        vec![Service {
            id: 1,
            name: "Skin Fade".to_string(),
            price: 45.0,
            duration: "50 min".to_string(),
            description: String::new(),
            image: String::new(),
        }]
    }

    fn barbers() -> Vec<Barber> {
        vec![Barber {
            id: 7,
            name: "Jo".to_string(),
            photo: None,
            specialties: vec!["Fades".to_string(), "Beards".to_string()],
        }]
    }

    fn form() -> BookingForm {
        BookingForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            service: "1".to_string(),
            barber: "7".to_string(),
            date: "2026-10-20".to_string(),
            time: "10:00 AM".to_string(),
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn test_phone_digits() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(!is_valid_phone("555-1234"));
    }

    #[test]
    fn test_validation_order() {
        let blank = BookingForm {
            email: "nope".to_string(),
            time: String::new(),
            ..form()
        };
        assert_eq!(blank.validate(), Err(BookingError::MissingFields));

        let bad_email = BookingForm {
            email: "nope".to_string(),
            phone: "1".to_string(),
            ..form()
        };
        assert_eq!(bad_email.validate(), Err(BookingError::InvalidEmail));

        let bad_phone = BookingForm {
            phone: "555-1234".to_string(),
            ..form()
        };
        assert_eq!(bad_phone.validate(), Err(BookingError::InvalidPhone));
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn test_message_params() {
        let services = services();
        let barbers = barbers();
        let message = BookingMessage::new(&form(), &services[0], &barbers[0]);
        assert_eq!(message.service, "Skin Fade - $45 (50 min)");
        assert_eq!(message.barber, "Jo - Fades, Beards");

        let params = message.params();
        assert_eq!(params.len(), 7);
        assert_eq!(params["time"], "10:00 AM");
    }

    #[tokio::test]
    async fn test_submit_sends_both_legs() {
        let relay = RecordingRelay::new();
        let message = submit_booking(&relay, &email_config(), &form(), &services(), &barbers())
            .await
            .unwrap();

        let sent = relay.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, "template_shop");
        assert_eq!(sent[1].0, "template_customer");
        assert_eq!(sent[1].1, message.params());
    }

    #[tokio::test]
    async fn test_invalid_selection_sends_nothing() {
        let relay = RecordingRelay::new();
        let form = BookingForm {
            barber: "99".to_string(),
            ..form()
        };
        let result = submit_booking(&relay, &email_config(), &form, &services(), &barbers()).await;
        assert_eq!(result, Err(BookingError::InvalidSelection));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid service or barber selection"
        );
        assert!(relay.sent().is_empty());
    }

    #[tokio::test]
    async fn test_business_failure_skips_customer() {
        let relay = RecordingRelay::new();
        relay.fail_template(
            "template_shop",
            RelayError::Rejected {
                status: 400,
                message: "bad".to_string(),
            },
        );
        let err = submit_booking(&relay, &email_config(), &form(), &services(), &barbers())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BookingError::Delivery {
                leg: DeliveryLeg::Business,
                ..
            }
        ));
        assert!(relay.sent().is_empty());
    }

    #[tokio::test]
    async fn test_customer_failure_names_leg() {
        let relay = RecordingRelay::new();
        relay.fail_template("template_customer", RelayError::Network("offline".to_string()));
        let err = submit_booking(&relay, &email_config(), &form(), &services(), &barbers())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("customer confirmation"));
        assert_eq!(relay.sent().len(), 1);
    }
}
