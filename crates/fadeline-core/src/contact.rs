//! Contact form submission.

use tracing::info;

use crate::booking::is_valid_email;
use crate::config::EmailConfig;
use crate::error::ContactError;
use crate::relay::{EmailRelay, TemplateParams};

/// Shown after a message was accepted.
pub const CONTACT_SUCCESS: &str = "Message sent successfully!";

/// Contact form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    /// Optional.
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// What happened to an accepted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Delivered through the relay.
    Sent,
    /// No contact template configured; confirmed without sending.
    Acknowledged,
}

impl ContactForm {
    /// Name, email and message are required; the email must look valid.
    pub fn validate(&self) -> Result<(), ContactError> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|f| f.trim().is_empty())
        {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    fn params(&self) -> TemplateParams {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
    }
}

/// Validate and, when a contact template is configured, send the message.
pub async fn submit_contact<R: EmailRelay>(
    relay: &R,
    email: &EmailConfig,
    form: &ContactForm,
) -> Result<ContactOutcome, ContactError> {
    form.validate()?;
    let Some(template) = email.contact_template.as_deref() else {
        return Ok(ContactOutcome::Acknowledged);
    };
    relay
        .send(template, &form.params())
        .await
        .map_err(ContactError::Delivery)?;
    info!(template, "contact message sent");
    Ok(ContactOutcome::Sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;
    use crate::testing::RecordingRelay;

    fn config(contact_template: Option<&str>) -> EmailConfig {
        EmailConfig {
            service_id: "service_x".to_string(),
            public_key: "pk".to_string(),
            business_template: "template_shop".to_string(),
            customer_template: "template_customer".to_string(),
            contact_template: contact_template.map(str::to_string),
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            phone: String::new(),
            email: "ada@example.com".to_string(),
            message: "Do you take walk-ins?".to_string(),
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(form().validate(), Ok(()));
        let blank = ContactForm {
            message: "  ".to_string(),
            ..form()
        };
        assert_eq!(blank.validate(), Err(ContactError::MissingFields));
        let bad = ContactForm {
            email: "ada".to_string(),
            ..form()
        };
        assert_eq!(bad.validate(), Err(ContactError::InvalidEmail));
    }

    #[tokio::test]
    async fn test_without_template_acknowledges() {
        let relay = RecordingRelay::new();
        let outcome = submit_contact(&relay, &config(None), &form()).await;
        assert_eq!(outcome, Ok(ContactOutcome::Acknowledged));
        assert!(relay.sent().is_empty());
    }

    #[tokio::test]
    async fn test_with_template_sends() {
        let relay = RecordingRelay::new();
        let outcome = submit_contact(&relay, &config(Some("template_contact")), &form()).await;
        assert_eq!(outcome, Ok(ContactOutcome::Sent));
        let sent = relay.sent();
        assert_eq!(sent[0].0, "template_contact");
        assert_eq!(sent[0].1["message"], "Do you take walk-ins?");
    }

    #[tokio::test]
    async fn test_delivery_failure() {
        let relay = RecordingRelay::new();
        relay.fail_template("template_contact", RelayError::Network("offline".to_string()));
        let outcome = submit_contact(&relay, &config(Some("template_contact")), &form()).await;
        assert!(matches!(outcome, Err(ContactError::Delivery(_))));
    }
}
