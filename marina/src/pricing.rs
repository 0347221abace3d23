//! Stay length and price quote for the booking wizard.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use time::Date;
use time::macros::format_description;

/// Flat tax applied on top of the nightly subtotal.
pub const TAX_RATE: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("date is required")]
    Missing,
    #[error("invalid date: {0}")]
    Invalid(String),
}

/// Parse a `YYYY-MM-DD` calendar string.
///
/// # Errors
///
/// Returns [`DateError::Missing`] for blank input and
/// [`DateError::Invalid`] when the string is not a calendar date.
pub fn parse_date(raw: &str) -> Result<Date, DateError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DateError::Missing);
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).map_err(|_| DateError::Invalid(raw.to_owned()))
}

/// Whole nights between two calendar strings, order-insensitive.
/// Zero when either side is missing or unparsable.
#[must_use]
pub fn nights(check_in: &str, check_out: &str) -> u32 {
    let (Ok(a), Ok(b)) = (parse_date(check_in), parse_date(check_out)) else {
        return 0;
    };
    u32::try_from((b - a).whole_days().unsigned_abs()).unwrap_or(u32::MAX)
}

/// Price breakdown shown in the booking summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub nights: u32,
    pub subtotal: f64,
    pub taxes: f64,
    pub total: f64,
}

#[must_use]
pub fn quote(price_per_night: f64, nights: u32) -> Quote {
    let subtotal = f64::from(nights) * price_per_night;
    let taxes = subtotal * TAX_RATE;
    Quote { nights, subtotal, taxes, total: subtotal + taxes }
}

/// Quote for a date range at a nightly price.
#[must_use]
pub fn quote_stay(price_per_night: f64, check_in: &str, check_out: &str) -> Quote {
    quote(price_per_night, nights(check_in, check_out))
}
