use super::*;

#[test]
fn known_currencies_use_prefix_symbol() {
    assert_eq!(format_price(85.0, "USD"), "$85");
    assert_eq!(format_price(135.0, "eur"), "€135");
    assert_eq!(format_price(17.5, "GBP"), "£17.50");
}

#[test]
fn unknown_currency_is_suffixed() {
    assert_eq!(format_price(99.0, "chf"), "99 CHF");
}

#[test]
fn near_whole_amounts_round_cleanly() {
    assert_eq!(format_price(187.000_000_1, "USD"), "$187");
    assert_eq!(format_price(280.5, "USD"), "$280.50");
}

#[test]
fn rating_has_one_decimal() {
    assert_eq!(format_rating(5.0), "5.0");
    assert_eq!(format_rating(4.76), "4.8");
}

#[test]
fn dates_format_month_day_year() {
    assert_eq!(format_date("2024-03-14"), "Mar 14, 2024");
    assert_eq!(format_date("2024-12-01T10:00:00Z"), "Dec 1, 2024");
    assert_eq!(format_date("soon"), "soon");
}
