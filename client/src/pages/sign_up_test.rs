use super::*;

#[test]
fn field_reads_and_writes_its_own_slot() {
    let mut form = SignUpForm::default();
    Field::Email.set(&mut form, "a@b.co".into());
    Field::ConfirmPassword.set(&mut form, "secret123".into());
    assert_eq!(Field::Email.value(&form), "a@b.co");
    assert_eq!(Field::ConfirmPassword.value(&form), "secret123");
    assert!(Field::Name.value(&form).is_empty());
}

#[test]
fn clear_only_touches_one_field() {
    let mut errors = check_sign_up(&SignUpForm::default());
    assert_eq!(Field::Name.error(&errors), Some(&AuthInputError::Required));
    Field::Name.clear(&mut errors);
    assert!(Field::Name.error(&errors).is_none());
    assert_eq!(Field::Email.error(&errors), Some(&AuthInputError::Required));
}

#[test]
fn mismatched_confirmation_maps_to_confirm_field() {
    let form = SignUpForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: "longenough".into(),
        confirm_password: "different".into(),
    };
    let errors = check_sign_up(&form);
    assert_eq!(Field::ConfirmPassword.error(&errors), Some(&AuthInputError::PasswordMismatch));
    assert!(Field::Password.error(&errors).is_none());
}
