//! EmailJS REST adapter for the relay port.

use fadeline_core::{EMAILJS_SEND_URL, EmailConfig, EmailRelay, RelayError, SendRequest, TemplateParams};
use gloo_net::http::Request;

/// Sends templates through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    service_id: String,
    public_key: String,
}

impl EmailJsRelay {
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            service_id: config.service_id.clone(),
            public_key: config.public_key.clone(),
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        let resp = Request::post(EMAILJS_SEND_URL)
            .json(&body)
            .map_err(|e| RelayError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if resp.ok() {
            return Ok(());
        }
        Err(RelayError::Rejected {
            status: resp.status(),
            message: resp.text().await.unwrap_or_default(),
        })
    }
}
