//! Relay configuration parsed from environment variables.

pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_CONTACT_TEMPLATE_ID: &str = "template_contact";
pub const DEFAULT_INTERNSHIP_TEMPLATE_ID: &str = "template_internship";
pub const DEFAULT_RELAY_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_RELAY_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while building a relay client at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A required environment variable is not set.
    #[error("missing relay setting: env var {var} not set")]
    MissingVar { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayProviderKind {
    EmailJs,
    Resend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsSettings {
    pub service_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub contact_template_id: String,
    pub internship_template_id: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendSettings {
    pub api_key: String,
    pub from: String,
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSettings {
    EmailJs(EmailJsSettings),
    Resend(ResendSettings),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub provider: ProviderSettings,
    pub timeouts: RelayTimeouts,
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// - `RELAY_PROVIDER`: `emailjs` (default) or `resend`
    /// - emailjs: `EMAILJS_SERVICE_ID`, `EMAILJS_PUBLIC_KEY` (required),
    ///   `EMAILJS_PRIVATE_KEY`, `EMAILJS_CONTACT_TEMPLATE_ID`,
    ///   `EMAILJS_INTERNSHIP_TEMPLATE_ID`, `EMAILJS_BASE_URL`
    /// - resend: `RESEND_API_KEY`, `RESEND_FROM`, `RELAY_RECIPIENT` (required)
    /// - `RELAY_REQUEST_TIMEOUT_SECS`: default 20
    /// - `RELAY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown provider or a missing required variable.
    pub fn from_env() -> Result<Self, RelayConfigError> {
        let kind = parse_provider(std::env::var("RELAY_PROVIDER").ok().as_deref())?;
        let provider = match kind {
            RelayProviderKind::EmailJs => ProviderSettings::EmailJs(EmailJsSettings {
                service_id: required("EMAILJS_SERVICE_ID")?,
                public_key: required("EMAILJS_PUBLIC_KEY")?,
                private_key: optional("EMAILJS_PRIVATE_KEY"),
                contact_template_id: optional("EMAILJS_CONTACT_TEMPLATE_ID")
                    .unwrap_or_else(|| DEFAULT_CONTACT_TEMPLATE_ID.to_owned()),
                internship_template_id: optional("EMAILJS_INTERNSHIP_TEMPLATE_ID")
                    .unwrap_or_else(|| DEFAULT_INTERNSHIP_TEMPLATE_ID.to_owned()),
                base_url: optional("EMAILJS_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_EMAILJS_BASE_URL.to_owned())
                    .trim_end_matches('/')
                    .to_owned(),
            }),
            RelayProviderKind::Resend => ProviderSettings::Resend(ResendSettings {
                api_key: required("RESEND_API_KEY")?,
                from: required("RESEND_FROM")?,
                recipient: required("RELAY_RECIPIENT")?,
            }),
        };
        let timeouts = RelayTimeouts {
            request_secs: env_parse_u64("RELAY_REQUEST_TIMEOUT_SECS", DEFAULT_RELAY_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("RELAY_CONNECT_TIMEOUT_SECS", DEFAULT_RELAY_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { provider, timeouts })
    }
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn required(key: &str) -> Result<String, RelayConfigError> {
    optional(key).ok_or_else(|| RelayConfigError::MissingVar { var: key.to_owned() })
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_provider(raw: Option<&str>) -> Result<RelayProviderKind, RelayConfigError> {
    match raw.unwrap_or("emailjs") {
        "emailjs" => Ok(RelayProviderKind::EmailJs),
        "resend" => Ok(RelayProviderKind::Resend),
        other => Err(RelayConfigError::ConfigParse(format!("unknown RELAY_PROVIDER: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
