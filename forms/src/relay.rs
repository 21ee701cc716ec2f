//! Relay capability: the boundary to the external mail-delivery service.
//!
//! A relay accepts one [`RelayPayload`] per submit action and answers with
//! either an [`Ack`] or a [`RelayError`] carrying a human-readable message.
//! There is no retry here; callers surface the failure and let the user
//! resubmit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while delivering a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// No relay is configured on this deployment.
    #[error("mail relay is not configured")]
    Unavailable,

    /// The HTTP request to the relay failed (connect error, timeout, ...).
    #[error("relay request failed: {0}")]
    Request(String),

    /// The relay answered with a non-success status.
    #[error("relay rejected the message (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

// =============================================================================
// PAYLOAD
// =============================================================================

/// Which relay template renders the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayTemplate {
    Contact,
    Internship,
}

/// Field-name to value mapping sent as one relay request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPayload {
    pub template: RelayTemplate,
    pub params: BTreeMap<String, String>,
}

impl RelayPayload {
    #[must_use]
    pub fn new(template: RelayTemplate, params: BTreeMap<String, String>) -> Self {
        Self { template, params }
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Relay acknowledgement. `detail` is whatever text the service returned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ack {
    pub detail: String,
}

impl Ack {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

// =============================================================================
// RELAY TRAIT
// =============================================================================

/// Provider-neutral async trait for mail delivery. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Relay: Send + Sync {
    /// Deliver one payload.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] if the request cannot be sent or the service
    /// rejects it.
    async fn submit(&self, payload: &RelayPayload) -> Result<Ack, RelayError>;
}
