//! Form validation for auth and booking input.
//!
//! ERROR HANDLING
//! ==============
//! Validation returns typed errors; the client renders them next to the
//! offending field and the mock API maps them to `400 Bad Request`.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::pricing::{self, DateError};
use crate::types::ReservationDraft;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthInputError {
    #[error("this field is required")]
    Required,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("password must be at least 8 characters")]
    PasswordTooShort,
    #[error("passwords do not match")]
    PasswordMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("check-in: {0}")]
    CheckIn(DateError),
    #[error("check-out: {0}")]
    CheckOut(DateError),
    #[error("check-out must be after check-in")]
    EmptyStay,
    #[error("at least one guest is required")]
    NoGuests,
    #[error("boat name is required")]
    MissingBoatName,
}

/// Loose `something@something.tld` check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty() && !domain.contains('@')
}

/// Validate the email field.
///
/// # Errors
///
/// Returns `Required` for blank input, `InvalidEmail` otherwise.
pub fn check_email(email: &str) -> Result<(), AuthInputError> {
    if email.trim().is_empty() {
        return Err(AuthInputError::Required);
    }
    if !is_valid_email(email) {
        return Err(AuthInputError::InvalidEmail);
    }
    Ok(())
}

/// Sign-in only needs an email and some password.
///
/// # Errors
///
/// Returns the first failing field check.
pub fn check_sign_in(email: &str, password: &str) -> Result<(), AuthInputError> {
    check_email(email)?;
    if password.is_empty() {
        return Err(AuthInputError::Required);
    }
    Ok(())
}

/// Raw sign-up form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field errors for the sign-up form. All `None` means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub name: Option<AuthInputError>,
    pub email: Option<AuthInputError>,
    pub password: Option<AuthInputError>,
    pub confirm_password: Option<AuthInputError>,
}

impl SignUpErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

#[must_use]
pub fn check_sign_up(form: &SignUpForm) -> SignUpErrors {
    let mut errors = SignUpErrors::default();
    if form.name.trim().is_empty() {
        errors.name = Some(AuthInputError::Required);
    }
    errors.email = check_email(&form.email).err();
    if form.password.is_empty() {
        errors.password = Some(AuthInputError::Required);
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some(AuthInputError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        errors.confirm_password = Some(AuthInputError::PasswordMismatch);
    }
    errors
}

/// Validate a reservation draft before it is submitted.
///
/// Capacity and overlapping stays are not checked.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn check_booking(draft: &ReservationDraft) -> Result<(), BookingError> {
    let check_in = pricing::parse_date(&draft.check_in).map_err(BookingError::CheckIn)?;
    let check_out = pricing::parse_date(&draft.check_out).map_err(BookingError::CheckOut)?;
    if check_out <= check_in {
        return Err(BookingError::EmptyStay);
    }
    if draft.guest_count == 0 {
        return Err(BookingError::NoGuests);
    }
    if draft.boat_details.name.trim().is_empty() {
        return Err(BookingError::MissingBoatName);
    }
    Ok(())
}
