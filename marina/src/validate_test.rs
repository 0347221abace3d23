use super::*;
use crate::types::{BoatDetails, PaymentStatus, ReservationStatus};

fn draft() -> ReservationDraft {
    ReservationDraft {
        user_id: "user_123".into(),
        port_id: "1".into(),
        space_id: "1".into(),
        check_in: "2025-07-01".into(),
        check_out: "2025-07-04".into(),
        total_price: 280.5,
        status: ReservationStatus::Pending,
        guest_count: 2,
        boat_details: BoatDetails { name: "Sea Breeze".into(), length: 42.0, width: 12.5, boat_type: "Sailboat".into() },
        payment_status: PaymentStatus::Pending,
    }
}

// =============================================================
// Email / sign-in
// =============================================================

#[test]
fn email_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("  skipper@docknow.com "));
    assert!(!is_valid_email("no-at-sign.com"));
    assert!(!is_valid_email("a@nodot"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("a b@c.com"));
}

#[test]
fn sign_in_requires_email_and_password() {
    assert_eq!(check_sign_in("", "pw"), Err(AuthInputError::Required));
    assert_eq!(check_sign_in("bad", "pw"), Err(AuthInputError::InvalidEmail));
    assert_eq!(check_sign_in("a@b.com", ""), Err(AuthInputError::Required));
    assert_eq!(check_sign_in("a@b.com", "x"), Ok(()));
}

// =============================================================
// Sign-up
// =============================================================

#[test]
fn sign_up_valid_form_has_no_errors() {
    let form = SignUpForm {
        name: "Ana".into(),
        email: "ana@sea.es".into(),
        password: "longenough".into(),
        confirm_password: "longenough".into(),
    };
    assert!(check_sign_up(&form).is_empty());
}

#[test]
fn sign_up_reports_every_field() {
    let form = SignUpForm {
        name: "  ".into(),
        email: "nope".into(),
        password: "short".into(),
        confirm_password: "different".into(),
    };
    let errors = check_sign_up(&form);
    assert_eq!(errors.name, Some(AuthInputError::Required));
    assert_eq!(errors.email, Some(AuthInputError::InvalidEmail));
    assert_eq!(errors.password, Some(AuthInputError::PasswordTooShort));
    assert_eq!(errors.confirm_password, Some(AuthInputError::PasswordMismatch));
}

#[test]
fn sign_up_empty_password_is_required_not_too_short() {
    let form = SignUpForm { name: "A".into(), email: "a@b.com".into(), ..SignUpForm::default() };
    let errors = check_sign_up(&form);
    assert_eq!(errors.password, Some(AuthInputError::Required));
    assert_eq!(errors.confirm_password, None);
}

// =============================================================
// Booking
// =============================================================

#[test]
fn booking_valid_draft_passes() {
    assert_eq!(check_booking(&draft()), Ok(()));
}

#[test]
fn booking_requires_dates() {
    let mut d = draft();
    d.check_in = String::new();
    assert_eq!(check_booking(&d), Err(BookingError::CheckIn(DateError::Missing)));

    let mut d = draft();
    d.check_out = "07/04/2025".into();
    assert!(matches!(check_booking(&d), Err(BookingError::CheckOut(DateError::Invalid(_)))));
}

#[test]
fn booking_rejects_reversed_or_same_day_stay() {
    let mut d = draft();
    d.check_out = d.check_in.clone();
    assert_eq!(check_booking(&d), Err(BookingError::EmptyStay));

    let mut d = draft();
    d.check_out = "2025-06-30".into();
    assert_eq!(check_booking(&d), Err(BookingError::EmptyStay));
}

#[test]
fn booking_requires_guest_and_boat_name() {
    let mut d = draft();
    d.guest_count = 0;
    assert_eq!(check_booking(&d), Err(BookingError::NoGuests));

    let mut d = draft();
    d.boat_details.name = " ".into();
    assert_eq!(check_booking(&d), Err(BookingError::MissingBoatName));
}

#[test]
fn booking_error_messages_name_the_field() {
    assert_eq!(BookingError::CheckIn(DateError::Missing).to_string(), "check-in: date is required");
    assert_eq!(AuthInputError::PasswordTooShort.to_string(), "password must be at least 8 characters");
}
