//! Form submission routes: contact messages and internship applications.
//!
//! Both handlers rebuild the form state machine from the posted body so the
//! server enforces the same rules as the browser, then hand the payload to
//! the configured relay. Status mapping: validation 422, no relay 503,
//! relay failure 502.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use forms::{
    Ack, ApplicationDraft, ContactError, ContactForm, ContactMessage, IntakeError, IntakeForm, Relay, RelayError,
    RelayPayload, SubmitResponse,
};

use crate::state::AppState;

type SubmitReply = (StatusCode, Json<SubmitResponse>);

/// Stand-in used when the deployment has no relay configured.
struct Unconfigured;

#[async_trait]
impl Relay for Unconfigured {
    async fn submit(&self, _payload: &RelayPayload) -> Result<Ack, RelayError> {
        Err(RelayError::Unavailable)
    }
}

fn relay_of(state: &AppState) -> Arc<dyn Relay> {
    state.relay.clone().unwrap_or_else(|| Arc::new(Unconfigured))
}

fn accepted() -> SubmitReply {
    (StatusCode::OK, Json(SubmitResponse::ok()))
}

fn rejected(status: StatusCode, message: impl Into<String>) -> SubmitReply {
    (status, Json(SubmitResponse::failed(message)))
}

fn relay_failure(kind: &'static str, e: &RelayError) -> SubmitReply {
    if *e == RelayError::Unavailable {
        tracing::warn!(kind, "submission dropped: relay not configured");
        return rejected(StatusCode::SERVICE_UNAVAILABLE, e.to_string());
    }
    tracing::error!(kind, error = %e, "relay delivery failed");
    rejected(StatusCode::BAD_GATEWAY, e.to_string())
}

/// `POST /api/contact`
pub async fn submit_contact(State(state): State<AppState>, Json(message): Json<ContactMessage>) -> SubmitReply {
    let relay = relay_of(&state);
    let mut form = ContactForm::filled(message);
    match form.submit(relay.as_ref()).await {
        Ok(ack) => {
            tracing::info!(detail = %ack.detail, variant = ?form.variant(), "contact message relayed");
            accepted()
        }
        Err(ContactError::Relay(e)) => relay_failure("contact", &e),
        Err(e) => rejected(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    }
}

/// `POST /api/careers/internship`
pub async fn submit_internship(State(state): State<AppState>, Json(draft): Json<ApplicationDraft>) -> SubmitReply {
    let mut form = match IntakeForm::resume(draft) {
        Ok(form) => form,
        Err(e) => return rejected(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    };
    let relay = relay_of(&state);
    match form.submit(relay.as_ref()).await {
        Ok(ack) => {
            tracing::info!(detail = %ack.detail, "internship application relayed");
            accepted()
        }
        Err(IntakeError::Relay(e)) => relay_failure("internship", &e),
        Err(e) => rejected(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    }
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
