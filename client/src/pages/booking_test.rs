use super::*;

fn filled_form() -> BookingForm {
    BookingForm {
        check_in: "2024-07-01".into(),
        check_out: "2024-07-04".into(),
        guests: 2,
        boat_name: " Sea Breeze ".into(),
        boat_length: "42".into(),
        boat_width: "abc".into(),
        ..BookingForm::default()
    }
}

// =============================================================================
// FORM
// =============================================================================

#[test]
fn default_form_starts_with_one_guest_and_first_boat_type() {
    let form = BookingForm::default();
    assert_eq!(form.guests, 1);
    assert_eq!(form.boat_type, "Sailboat");
}

#[test]
fn for_user_prefills_contact() {
    let user = marina::mock::default_user();
    let form = BookingForm::for_user(Some(&user));
    assert_eq!(form.guest_name, user.name);
    assert_eq!(form.guest_email, user.email);
    assert_eq!(form.guest_phone, user.phone.clone().unwrap_or_default());
    assert_eq!(BookingForm::for_user(None), BookingForm::default());
}

#[test]
fn to_draft_prices_stay_with_tax() {
    let port = marina::mock::port_by_id("7").expect("port 7");
    let draft = filled_form().to_draft("user_123", &port);
    // 3 nights at 65 plus 10%.
    assert!((draft.total_price - 214.5).abs() < 1e-9);
    assert_eq!(draft.port_id, "7");
    assert_eq!(draft.user_id, "user_123");
    assert_eq!(draft.guest_count, 2);
    assert_eq!(draft.status, ReservationStatus::Pending);
    assert_eq!(draft.payment_status, PaymentStatus::Pending);
}

#[test]
fn to_draft_trims_name_and_zeroes_bad_dimensions() {
    let port = marina::mock::port_by_id("1").expect("port 1");
    let draft = filled_form().to_draft("u", &port);
    assert_eq!(draft.boat_details.name, "Sea Breeze");
    assert!((draft.boat_details.length - 42.0).abs() < f64::EPSILON);
    assert!(draft.boat_details.width.abs() < f64::EPSILON);
    assert!(check_booking(&draft).is_ok());
}

#[test]
fn to_draft_with_reversed_dates_fails_validation() {
    let port = marina::mock::port_by_id("1").expect("port 1");
    let form = BookingForm { check_in: "2024-07-04".into(), check_out: "2024-07-01".into(), ..filled_form() };
    assert_eq!(check_booking(&form.to_draft("u", &port)), Err(BookingError::EmptyStay));
}

// =============================================================================
// STEPS
// =============================================================================

#[test]
fn step_one_needs_both_dates() {
    let mut form = BookingForm::default();
    assert!(!step_complete(&form, 1));
    form.check_in = "2024-07-01".into();
    assert!(!step_complete(&form, 1));
    form.check_out = "2024-07-02".into();
    assert!(step_complete(&form, 1));
}

#[test]
fn step_two_needs_boat_name() {
    let mut form = BookingForm::default();
    form.boat_name = "   ".into();
    assert!(!step_complete(&form, 2));
    form.boat_name = "Wave".into();
    assert!(step_complete(&form, 2));
    assert!(step_complete(&form, LAST_STEP));
}
