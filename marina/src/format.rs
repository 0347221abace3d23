//! Display formatting for prices, ratings, and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Currencies offered by the header picker.
pub const CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

#[must_use]
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Format an amount in `currency`. Whole amounts drop the decimals; other
/// amounts keep two. Unknown codes are appended as a suffix.
#[must_use]
pub fn format_price(amount: f64, currency: &str) -> String {
    let number = if (amount - amount.round()).abs() < 0.005 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    };
    match currency_symbol(currency) {
        Some(symbol) => format!("{symbol}{number}"),
        None => format!("{number} {}", currency.to_ascii_uppercase()),
    }
}

/// One-decimal star rating, e.g. `4.7`.
#[must_use]
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// `2024-03-14` → `Mar 14, 2024`. Unparsable input is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    match crate::pricing::parse_date(date_part) {
        Ok(date) => {
            let month = MONTHS[usize::from(u8::from(date.month())) - 1];
            format!("{month} {}, {}", date.day(), date.year())
        }
        Err(_) => raw.to_owned(),
    }
}
