use super::*;
use crate::test_support::MockRelay;

fn filled_full_form() -> ContactForm {
    let mut form = ContactForm::new(ContactVariant::Full);
    form.set_field(ContactField::Name, "Ivan Petrov").unwrap();
    form.set_field(ContactField::Email, "ivan@example.com").unwrap();
    form.set_field(ContactField::Subject, "Seismic survey").unwrap();
    form.set_field(ContactField::Message, "Need a 2D survey quote").unwrap();
    form
}

#[test]
fn short_variant_has_no_subject() {
    let mut form = ContactForm::new(ContactVariant::Short);
    assert_eq!(form.variant(), ContactVariant::Short);
    assert_eq!(form.message().fields(), vec![ContactField::Name, ContactField::Email, ContactField::Message]);
    assert_eq!(form.set_field(ContactField::Subject, "hi"), Err(ContactError::NoSubjectField));
}

#[test]
fn begin_submit_lists_every_missing_field() {
    let mut form = ContactForm::new(ContactVariant::Full);
    form.set_field(ContactField::Name, "Ivan").unwrap();
    form.set_field(ContactField::Message, "   ").unwrap();

    let err = form.begin_submit().unwrap_err();
    assert_eq!(err, ContactError::MissingFields(vec![ContactField::Email, ContactField::Subject, ContactField::Message]));
    assert_eq!(err.to_string(), "required fields are empty: email, subject, message");
    assert_eq!(form.status(), &ContactStatus::Editing);
}

#[test]
fn begin_submit_rejects_bad_email() {
    let mut form = filled_full_form();
    form.set_field(ContactField::Email, "not-an-email").unwrap();
    assert_eq!(form.begin_submit(), Err(ContactError::InvalidEmail));
}

#[test]
fn inputs_are_locked_while_submitting() {
    let mut form = filled_full_form();
    form.begin_submit().unwrap();
    assert!(form.is_submitting());
    assert_eq!(form.set_field(ContactField::Name, "x"), Err(ContactError::SubmissionInFlight));
    assert_eq!(form.begin_submit(), Err(ContactError::SubmissionInFlight));
}

#[test]
fn payload_omits_subject_for_short_variant() {
    let message = ContactMessage {
        name: "Ivan".into(),
        email: "ivan@example.com".into(),
        subject: None,
        message: "Hello".into(),
    };
    let payload = message.to_payload();
    assert_eq!(payload.template, RelayTemplate::Contact);
    assert_eq!(payload.params.len(), 3);
    assert_eq!(payload.param("subject"), None);
}

#[test]
fn wire_shape_selects_variant_by_subject_presence() {
    let short: ContactMessage = serde_json::from_str(r#"{"name":"a","email":"a@b.c","message":"m"}"#).unwrap();
    assert_eq!(short.variant(), ContactVariant::Short);
    let full: ContactMessage = serde_json::from_str(r#"{"name":"a","email":"a@b.c","subject":"","message":"m"}"#).unwrap();
    assert_eq!(full.variant(), ContactVariant::Full);
    assert_eq!(full.missing(), vec![ContactField::Subject]);
}

#[tokio::test]
async fn success_clears_fields_and_shows_sent() {
    let relay = MockRelay::ok();
    let mut form = filled_full_form();

    form.submit(&relay).await.unwrap();

    assert_eq!(form.status(), &ContactStatus::Sent);
    assert_eq!(form.message(), &ContactMessage::empty(ContactVariant::Full));
    let sent = relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].param("subject"), Some("Seismic survey"));
}

#[tokio::test]
async fn failure_keeps_fields_and_shows_relay_text() {
    let relay = MockRelay::with_replies(vec![Err(RelayError::Rejected { status: 412, body: "quota exceeded".into() })]);
    let mut form = filled_full_form();
    let before = form.message().clone();

    assert!(form.submit(&relay).await.is_err());

    assert_eq!(form.message(), &before);
    match form.status() {
        ContactStatus::Failed(text) => assert!(text.contains("quota exceeded")),
        other => panic!("expected failure banner, got {other:?}"),
    }
}

#[test]
fn editing_after_result_keeps_banner_until_next_submit() {
    let mut form = filled_full_form();
    form.begin_submit().unwrap();
    form.finish_submit(Err("network down".into())).unwrap();

    form.set_field(ContactField::Message, "Updated").unwrap();
    assert_eq!(form.status(), &ContactStatus::Failed("network down".into()));

    form.begin_submit().unwrap();
    assert_eq!(form.status(), &ContactStatus::Submitting);
}

#[test]
fn finish_submit_requires_outstanding_request() {
    let mut form = filled_full_form();
    assert_eq!(form.finish_submit(Ok(())), Err(ContactError::NotSubmitting));
}

#[test]
fn payload_keeps_message_indentation() {
    let message = ContactMessage {
        name: "Ivan".into(),
        email: "ivan@example.com".into(),
        subject: None,
        message: "  1. gravity\n  2. magnetics".into(),
    };
    assert_eq!(message.to_payload().param("message"), Some("  1. gravity\n  2. magnetics"));
}
