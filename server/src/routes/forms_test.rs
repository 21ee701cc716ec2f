use super::*;
use crate::state::test_helpers::{MockRelay, state_with};

fn contact(subject: Option<&str>) -> ContactMessage {
    ContactMessage {
        name: "Ivan Petrov".into(),
        email: "ivan@example.com".into(),
        subject: subject.map(str::to_owned),
        message: "Need a gravity survey quote".into(),
    }
}

fn application() -> ApplicationDraft {
    serde_json::from_value(serde_json::json!({
        "fullName": "Ivan Petrov",
        "email": "ivan@example.com",
        "phone": "+79001234567",
        "address": "Khabarovsk",
        "university": "FESTU",
        "faculty": "Geophysics",
        "course": "4",
        "gradYear": "2027",
        "objective": "Field practice",
        "experience": "Summer expedition",
        "skills": "Python",
        "languages": "Russian, English"
    }))
    .unwrap()
}

// =============================================================================
// contact
// =============================================================================

#[tokio::test]
async fn contact_is_relayed_and_acknowledged() {
    let relay = Arc::new(MockRelay::ok());
    let (status, Json(body)) = submit_contact(State(state_with(relay.clone())), Json(contact(Some("Survey")))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SubmitResponse::ok());
    let sent = relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].param("subject"), Some("Survey"));
}

#[tokio::test]
async fn short_contact_without_subject_is_accepted() {
    let relay = Arc::new(MockRelay::ok());
    let (status, _) = submit_contact(State(state_with(relay.clone())), Json(contact(None))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(relay.sent()[0].param("subject"), None);
}

#[tokio::test]
async fn contact_with_blank_field_is_unprocessable() {
    let relay = Arc::new(MockRelay::ok());
    let mut message = contact(Some("Survey"));
    message.message = "  ".into();

    let (status, Json(body)) = submit_contact(State(state_with(relay.clone())), Json(message)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!body.ok);
    assert!(body.error.unwrap().contains("message"));
    assert!(relay.sent().is_empty());
}

#[tokio::test]
async fn contact_without_relay_is_unavailable() {
    let (status, Json(body)) = submit_contact(State(AppState::default()), Json(contact(None))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body.error.as_deref(), Some("mail relay is not configured"));
}

#[tokio::test]
async fn invalid_contact_without_relay_is_still_unprocessable() {
    let mut message = contact(None);
    message.email = "nope".into();

    let (status, _) = submit_contact(State(AppState::default()), Json(message)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn contact_relay_rejection_is_bad_gateway() {
    let relay = Arc::new(MockRelay::with_replies(vec![Err(RelayError::Rejected { status: 412, body: "quota".into() })]));
    let (status, Json(body)) = submit_contact(State(state_with(relay)), Json(contact(None))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.error.unwrap().contains("quota"));
}

// =============================================================================
// internship
// =============================================================================

#[tokio::test]
async fn internship_is_relayed_with_role() {
    let relay = Arc::new(MockRelay::ok());
    let (status, Json(body)) = submit_internship(State(state_with(relay.clone())), Json(application())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.ok);
    let sent = relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].params.len(), 14);
    assert_eq!(sent[0].param("role"), Some("internship"));
    assert_eq!(sent[0].param("additional"), Some(""));
}

#[tokio::test]
async fn incomplete_internship_is_unprocessable() {
    let relay = Arc::new(MockRelay::ok());
    let mut draft = application();
    draft.faculty.clear();

    let (status, Json(body)) = submit_internship(State(state_with(relay.clone())), Json(draft)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error.as_deref(), Some("step 2 is incomplete: missing faculty"));
    assert!(relay.sent().is_empty());
}

#[tokio::test]
async fn internship_without_relay_is_unavailable() {
    let (status, _) = submit_internship(State(AppState::default()), Json(application())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn internship_relay_timeout_is_bad_gateway() {
    let relay = Arc::new(MockRelay::with_replies(vec![Err(RelayError::Request("operation timed out".into()))]));
    let (status, Json(body)) = submit_internship(State(state_with(relay)), Json(application())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.error.as_deref(), Some("relay request failed: operation timed out"));
}
