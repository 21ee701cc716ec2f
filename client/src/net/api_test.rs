use super::*;

#[test]
fn submit_failed_message_formats_status() {
    assert_eq!(submit_failed_message(500), "submission failed: 500");
}

#[test]
fn submit_outcome_accepts_ok_body() {
    assert_eq!(submit_outcome(200, r#"{"ok":true}"#), Ok(()));
}

#[test]
fn submit_outcome_surfaces_server_error_text() {
    assert_eq!(
        submit_outcome(502, r#"{"ok":false,"error":"relay rejected the message (status 400): bad"}"#),
        Err("relay rejected the message (status 400): bad".to_owned())
    );
}

#[test]
fn submit_outcome_falls_back_to_status_for_foreign_bodies() {
    assert_eq!(submit_outcome(504, "<html>Gateway Timeout</html>"), Err("submission failed: 504".to_owned()));
    assert_eq!(submit_outcome(204, ""), Ok(()));
}

#[test]
fn endpoints_match_server_routes() {
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
    assert_eq!(INTERNSHIP_ENDPOINT, "/api/careers/internship");
}
