use super::*;

#[test]
fn every_field_has_a_label() {
    for field in IntakeField::ALL {
        assert!(!field_label(field).is_empty(), "{} has no label", field.key());
    }
}

#[test]
fn input_types_follow_field_kind() {
    assert_eq!(input_type(IntakeField::Email), "email");
    assert_eq!(input_type(IntakeField::Phone), "tel");
    assert_eq!(input_type(IntakeField::GradYear), "number");
    assert_eq!(input_type(IntakeField::Objective), "textarea");
    assert_eq!(input_type(IntakeField::University), "text");
}

#[test]
fn incomplete_step_lists_missing_labels() {
    let err = IntakeError::Incomplete {
        step: IntakeStep::Personal,
        missing: vec![IntakeField::FullName, IntakeField::Phone],
    };
    assert_eq!(describe_error(&err), "Заполните обязательные поля: ФИО, Телефон");
}

#[test]
fn invalid_email_has_its_own_message() {
    assert_eq!(describe_error(&IntakeError::InvalidEmail), "Укажите корректный e-mail");
}

#[test]
fn progress_label_shows_position_and_title() {
    assert_eq!(progress_label(IntakeStep::Education), "Шаг 2 из 5: Образование");
    assert_eq!(progress_label(IntakeStep::Additional), "Шаг 5 из 5: Дополнительно");
}
