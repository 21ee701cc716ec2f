//! Mail relay: delivers form submissions to the organisation's inbox.
//!
//! DESIGN
//! ======
//! `RelayClient` dispatches to EmailJS or Resend based on `RELAY_PROVIDER`.
//! Handlers only see `forms::Relay`, so tests substitute a mock and the
//! server can run without any relay configured (form endpoints answer 503).

pub mod config;
pub mod emailjs;
pub mod resend;

use async_trait::async_trait;
use config::{ProviderSettings, RelayConfig, RelayConfigError, RelayProviderKind};
use forms::{Ack, Relay, RelayError, RelayPayload};

pub enum RelayClient {
    EmailJs(emailjs::EmailJsClient),
    Resend(resend::ResendClient),
}

impl RelayClient {
    /// Build a relay client from environment variables.
    /// See [`RelayConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if required settings are missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, RelayConfigError> {
        Self::from_config(RelayConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: RelayConfig) -> Result<Self, RelayConfigError> {
        Ok(match config.provider {
            ProviderSettings::EmailJs(settings) => Self::EmailJs(emailjs::EmailJsClient::new(settings, config.timeouts)?),
            ProviderSettings::Resend(settings) => Self::Resend(resend::ResendClient::new(settings, config.timeouts)),
        })
    }

    #[must_use]
    pub fn kind(&self) -> RelayProviderKind {
        match self {
            Self::EmailJs(_) => RelayProviderKind::EmailJs,
            Self::Resend(_) => RelayProviderKind::Resend,
        }
    }

    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        match self.kind() {
            RelayProviderKind::EmailJs => "emailjs",
            RelayProviderKind::Resend => "resend",
        }
    }
}

#[async_trait]
impl Relay for RelayClient {
    async fn submit(&self, payload: &RelayPayload) -> Result<Ack, RelayError> {
        match self {
            Self::EmailJs(client) => client.submit(payload).await,
            Self::Resend(client) => client.submit(payload).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{EmailJsSettings, RelayTimeouts, ResendSettings};

    const TIMEOUTS: RelayTimeouts = RelayTimeouts { request_secs: 5, connect_secs: 2 };

    #[test]
    fn from_config_selects_the_configured_provider() {
        let resend = RelayClient::from_config(RelayConfig {
            provider: ProviderSettings::Resend(ResendSettings {
                api_key: "re_test".into(),
                from: "site@tektonika.ru".into(),
                recipient: "hr@tektonika.ru".into(),
            }),
            timeouts: TIMEOUTS,
        })
        .unwrap();
        assert_eq!(resend.provider_name(), "resend");

        let emailjs = RelayClient::from_config(RelayConfig {
            provider: ProviderSettings::EmailJs(EmailJsSettings {
                service_id: "svc".into(),
                public_key: "pk".into(),
                private_key: None,
                contact_template_id: config::DEFAULT_CONTACT_TEMPLATE_ID.into(),
                internship_template_id: config::DEFAULT_INTERNSHIP_TEMPLATE_ID.into(),
                base_url: config::DEFAULT_EMAILJS_BASE_URL.into(),
            }),
            timeouts: TIMEOUTS,
        })
        .unwrap();
        assert_eq!(emailjs.kind(), RelayProviderKind::EmailJs);
    }
}
