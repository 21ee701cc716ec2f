use std::collections::BTreeMap;

use super::*;
use crate::relay::config::DEFAULT_EMAILJS_BASE_URL;

fn settings(private_key: Option<&str>) -> EmailJsSettings {
    EmailJsSettings {
        service_id: "service_labg6pe".into(),
        public_key: "pk-test".into(),
        private_key: private_key.map(str::to_owned),
        contact_template_id: "template_pf48q3m".into(),
        internship_template_id: "template_intern".into(),
        base_url: DEFAULT_EMAILJS_BASE_URL.into(),
    }
}

fn client(private_key: Option<&str>) -> EmailJsClient {
    EmailJsClient::new(settings(private_key), RelayTimeouts { request_secs: 5, connect_secs: 2 }).unwrap()
}

fn payload(template: RelayTemplate) -> RelayPayload {
    let mut params = BTreeMap::new();
    params.insert("name".to_owned(), "Ivan".to_owned());
    params.insert("email".to_owned(), "ivan@example.com".to_owned());
    RelayPayload::new(template, params)
}

#[test]
fn request_body_matches_send_api_shape() {
    let client = client(None);
    let payload = payload(RelayTemplate::Contact);

    let json = serde_json::to_value(client.request_body(&payload)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "service_id": "service_labg6pe",
            "template_id": "template_pf48q3m",
            "user_id": "pk-test",
            "template_params": { "name": "Ivan", "email": "ivan@example.com" }
        })
    );
}

#[test]
fn request_body_picks_template_and_access_token() {
    let client = client(Some("secret"));
    let payload = payload(RelayTemplate::Internship);

    let json = serde_json::to_value(client.request_body(&payload)).unwrap();
    assert_eq!(json["template_id"], "template_intern");
    assert_eq!(json["accessToken"], "secret");
}

#[test]
fn endpoint_joins_base_url_and_send_path() {
    assert_eq!(client(None).endpoint(), "https://api.emailjs.com/api/v1.0/email/send");
}

#[test]
fn status_200_is_an_ack_with_body_text() {
    let ack = interpret_response(200, "OK".into()).unwrap();
    assert_eq!(ack.detail, "OK");
}

#[test]
fn other_statuses_are_rejections_with_body() {
    let err = interpret_response(400, "The template ID is invalid".into()).unwrap_err();
    assert_eq!(err, RelayError::Rejected { status: 400, body: "The template ID is invalid".into() });
    assert!(err.to_string().contains("The template ID is invalid"));
}
