//! REST helpers for the form submission endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submissions only
//! happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<(), String>` so the caller can feed the
//! outcome straight into the form's `finish_submit` without panicking
//! during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use forms::{ApplicationDraft, ContactMessage};

pub const CONTACT_ENDPOINT: &str = "/api/contact";
pub const INTERNSHIP_ENDPOINT: &str = "/api/careers/internship";

#[cfg(any(test, feature = "hydrate"))]
fn submit_failed_message(status: u16) -> String {
    format!("submission failed: {status}")
}

/// Interpret a response body; fall back to the status when the body is not
/// a `SubmitResponse`.
#[cfg(any(test, feature = "hydrate"))]
fn submit_outcome(status: u16, body: &str) -> Result<(), String> {
    match serde_json::from_str::<forms::SubmitResponse>(body) {
        Ok(parsed) => parsed.into_result(),
        Err(_) if (200..300).contains(&status) => Ok(()),
        Err(_) => Err(submit_failed_message(status)),
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<(), String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let outcome = submit_outcome(status, &text);
    if let Err(e) = &outcome {
        log::warn!("{url} rejected: {e}");
    }
    outcome
}

/// Send a contact message via `POST /api/contact`.
///
/// # Errors
///
/// Returns the server's error text or a transport error.
pub async fn submit_contact(message: &ContactMessage) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(CONTACT_ENDPOINT, message).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}

/// Send a finished internship application via `POST /api/careers/internship`.
///
/// # Errors
///
/// Returns the server's error text or a transport error.
pub async fn submit_internship(draft: &ApplicationDraft) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(INTERNSHIP_ENDPOINT, draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}
