//! EmailJS REST client.
//!
//! One `POST /api/v1.0/email/send` per submission. The service answers 200
//! with a short text body (`OK`) on success; anything else is a rejection
//! whose body is surfaced verbatim.

use std::time::Duration;

use async_trait::async_trait;
use forms::{Ack, Relay, RelayError, RelayPayload, RelayTemplate};
use serde::Serialize;

use super::config::{EmailJsSettings, RelayConfigError, RelayTimeouts};

const SEND_PATH: &str = "/api/v1.0/email/send";

pub struct EmailJsClient {
    http: reqwest::Client,
    settings: EmailJsSettings,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a std::collections::BTreeMap<String, String>,
}

impl EmailJsClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(settings: EmailJsSettings, timeouts: RelayTimeouts) -> Result<Self, RelayConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| RelayConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, settings })
    }

    fn template_id(&self, template: RelayTemplate) -> &str {
        match template {
            RelayTemplate::Contact => &self.settings.contact_template_id,
            RelayTemplate::Internship => &self.settings.internship_template_id,
        }
    }

    pub(crate) fn request_body<'a>(&'a self, payload: &'a RelayPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.settings.service_id,
            template_id: self.template_id(payload.template),
            user_id: &self.settings.public_key,
            access_token: self.settings.private_key.as_deref(),
            template_params: &payload.params,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{SEND_PATH}", self.settings.base_url)
    }
}

#[async_trait]
impl Relay for EmailJsClient {
    async fn submit(&self, payload: &RelayPayload) -> Result<Ack, RelayError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&self.request_body(payload))
            .send()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Request(e.to_string()))?;
        interpret_response(status, text)
    }
}

/// Map the service's answer onto the relay contract.
pub(crate) fn interpret_response(status: u16, body: String) -> Result<Ack, RelayError> {
    if status == 200 {
        Ok(Ack::new(body))
    } else {
        Err(RelayError::Rejected { status, body })
    }
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;
