use super::*;

#[test]
fn parse_date_accepts_calendar_strings() {
    let date = parse_date("2024-03-14").unwrap();
    assert_eq!(date.year(), 2024);
    assert_eq!(u8::from(date.month()), 3);
    assert_eq!(date.day(), 14);
}

#[test]
fn parse_date_rejects_blank_and_garbage() {
    assert_eq!(parse_date("  "), Err(DateError::Missing));
    assert_eq!(parse_date("2024-02-30"), Err(DateError::Invalid("2024-02-30".into())));
    assert!(matches!(parse_date("tomorrow"), Err(DateError::Invalid(_))));
}

#[test]
fn nights_counts_whole_days() {
    assert_eq!(nights("2024-03-14", "2024-03-17"), 3);
    assert_eq!(nights("2024-02-28", "2024-03-01"), 2);
}

#[test]
fn nights_is_order_insensitive() {
    assert_eq!(nights("2024-05-12", "2024-05-08"), 4);
}

#[test]
fn nights_zero_when_missing() {
    assert_eq!(nights("", "2024-05-08"), 0);
    assert_eq!(nights("2024-05-08", "bogus"), 0);
}

#[test]
fn quote_adds_ten_percent_tax() {
    let q = quote(85.0, 2);
    assert_eq!(q.nights, 2);
    assert!((q.subtotal - 170.0).abs() < 1e-9);
    assert!((q.taxes - 17.0).abs() < 1e-9);
    assert!((q.total - 187.0).abs() < 1e-9);
}

#[test]
fn quote_stay_with_no_dates_is_zero() {
    let q = quote_stay(120.0, "", "");
    assert_eq!(q.nights, 0);
    assert!(q.total.abs() < f64::EPSILON);
}
