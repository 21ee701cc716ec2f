use super::*;

#[test]
fn only_additional_is_optional() {
    let optional = IntakeField::ALL
        .into_iter()
        .filter(|f| !f.required())
        .collect::<Vec<_>>();
    assert_eq!(optional, vec![IntakeField::Additional]);
}

#[test]
fn set_and_get_address_the_same_slot() {
    let mut draft = ApplicationDraft::default();
    draft.set(IntakeField::GradYear, "2027");
    assert_eq!(draft.get(IntakeField::GradYear), "2027");
    assert_eq!(draft.grad_year, "2027");
}

#[test]
fn missing_treats_whitespace_as_empty_and_skips_optional() {
    let mut draft = ApplicationDraft::default();
    draft.set(IntakeField::FullName, "   ");
    draft.set(IntakeField::Email, "ivan@example.com");
    let missing = draft.missing(&[IntakeField::FullName, IntakeField::Email, IntakeField::Additional]);
    assert_eq!(missing, vec![IntakeField::FullName]);
}

#[test]
fn serde_uses_camel_case_wire_names() {
    let mut draft = ApplicationDraft::default();
    draft.set(IntakeField::FullName, "Ivan Petrov");
    draft.set(IntakeField::GradYear, "2026");
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["fullName"], "Ivan Petrov");
    assert_eq!(json["gradYear"], "2026");
    assert!(json.get("full_name").is_none());
}

#[test]
fn deserialize_defaults_missing_fields_to_empty() {
    let draft: ApplicationDraft = serde_json::from_str(r#"{"fullName":"Ivan"}"#).unwrap();
    assert_eq!(draft.full_name, "Ivan");
    assert!(draft.email.is_empty());
    assert!(draft.additional.is_empty());
}

#[test]
fn to_params_carries_every_field_and_role() {
    let mut draft = ApplicationDraft::default();
    draft.set(IntakeField::Skills, "Oasis Montaj");
    let params = draft.to_params("internship");
    assert_eq!(params.len(), 14);
    assert_eq!(params["skills"], "Oasis Montaj");
    assert_eq!(params["additional"], "");
    assert_eq!(params["role"], "internship");
}

#[test]
fn to_params_keeps_multiline_answers_as_entered() {
    let mut draft = ApplicationDraft::default();
    draft.set(IntakeField::Experience, "  - expedition 1\n  - expedition 2\n");
    let params = draft.to_params("internship");
    assert_eq!(params["experience"], "  - expedition 1\n  - expedition 2\n");
}
