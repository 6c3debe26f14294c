//! Outbound email relay port.
//!
//! The site never talks to a mail server. It hands a template id and a flat
//! map of template variables to a relay service that renders and delivers
//! the message. The browser build implements [`EmailRelay`] over the EmailJS
//! REST API.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::RelayError;

/// EmailJS REST endpoint.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Template variables, rendered into the relay's template.
pub type TemplateParams = BTreeMap<String, String>;

/// Sends one templated message.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), RelayError>;
}

impl<R: EmailRelay + ?Sized> EmailRelay for &R {
    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), RelayError> {
        (**self).send(template_id, params).await
    }
}

/// Request body for the EmailJS send endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id`.
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_send_request_body() {
        let params = TemplateParams::from([("name".to_string(), "Ada".to_string())]);
        let body = SendRequest {
            service_id: "service_x",
            template_id: "template_y",
            user_id: "pk",
            template_params: &params,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "pk",
                "template_params": { "name": "Ada" },
            })
        );
    }
}
