use super::*;

// =============================================================
// Wire shape
// =============================================================

#[test]
fn port_type_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&PortType::PrivatePort).unwrap(), "\"private_port\"");
    assert_eq!(serde_json::to_string(&PortType::Marina).unwrap(), "\"marina\"");
}

#[test]
fn reservation_status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&ReservationStatus::Cancelled).unwrap(), "\"cancelled\"");
    let parsed: ReservationStatus = serde_json::from_str("\"completed\"").unwrap();
    assert_eq!(parsed, ReservationStatus::Completed);
}

#[test]
fn boat_details_uses_type_key() {
    let boat = BoatDetails { name: "Sea Breeze".into(), length: 42.0, width: 12.5, boat_type: "Sailboat".into() };
    let value = serde_json::to_value(&boat).unwrap();
    assert_eq!(value["type"], "Sailboat");
    assert!(value.get("boatType").is_none());
}

#[test]
fn search_filters_omit_unset_fields() {
    let filters = SearchFilters { min_price: Some(80.0), ..SearchFilters::default() };
    let value = serde_json::to_value(&filters).unwrap();
    assert_eq!(value, serde_json::json!({ "minPrice": 80.0 }));
}

#[test]
fn search_filters_parse_from_camel_case() {
    let filters: SearchFilters =
        serde_json::from_str(r#"{"maxPrice":150,"amenities":["WiFi"],"portType":"private_port"}"#).unwrap();
    assert_eq!(filters.max_price, Some(150.0));
    assert_eq!(filters.amenities, vec!["WiFi".to_owned()]);
    assert_eq!(filters.port_type, Some(PortTypeFilter::PrivatePort));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn toggle_amenity_adds_then_removes() {
    let mut filters = SearchFilters::default();
    filters.toggle_amenity("Fuel");
    assert_eq!(filters.amenities, vec!["Fuel".to_owned()]);
    filters.toggle_amenity("Fuel");
    assert!(filters.amenities.is_empty());
    assert!(filters.is_empty());
}

#[test]
fn draft_into_reservation_sets_id_and_both_timestamps() {
    let draft = ReservationDraft {
        user_id: "u".into(),
        port_id: "1".into(),
        space_id: "1".into(),
        check_in: "2025-06-01".into(),
        check_out: "2025-06-03".into(),
        total_price: 187.0,
        status: ReservationStatus::Pending,
        guest_count: 2,
        boat_details: BoatDetails::default(),
        payment_status: PaymentStatus::Pending,
    };
    let reservation = draft.into_reservation("42".into(), "2025-05-01T00:00:00Z");
    assert_eq!(reservation.id, "42");
    assert_eq!(reservation.created_at, reservation.updated_at);
    assert_eq!(reservation.port_id, "1");
}

#[test]
fn cancellable_statuses() {
    assert!(ReservationStatus::Pending.is_cancellable());
    assert!(ReservationStatus::Confirmed.is_cancellable());
    assert!(!ReservationStatus::Cancelled.is_cancellable());
    assert!(!ReservationStatus::Completed.is_cancellable());
}

#[test]
fn preferences_apply_partial_update() {
    let mut prefs = Preferences::default();
    prefs.apply(PreferencesUpdate { language: Some(Language::Fr), currency: None });
    assert_eq!(prefs.language, Language::Fr);
    assert_eq!(prefs.currency, "USD");
}

#[test]
fn language_from_code_is_case_insensitive() {
    assert_eq!(Language::from_code(" ES "), Some(Language::Es));
    assert_eq!(Language::from_code("de"), None);
}

#[test]
fn port_type_filter_admits() {
    assert!(PortTypeFilter::All.admits(PortType::PrivatePort));
    assert!(PortTypeFilter::Marina.admits(PortType::Marina));
    assert!(!PortTypeFilter::Marina.admits(PortType::PrivatePort));
}

#[test]
fn map_bounds_contains_handles_antimeridian() {
    let normal = MapBounds { north: 50.0, south: 30.0, east: 20.0, west: -10.0 };
    assert!(normal.contains(43.55, 7.01));
    assert!(!normal.contains(25.76, -80.19));

    let wrapped = MapBounds { north: 0.0, south: -40.0, east: -170.0, west: 140.0 };
    assert!(wrapped.contains(-33.85, 151.21));
    assert!(!wrapped.contains(-33.85, 0.0));
}

#[test]
fn public_config_tolerates_missing_fields() {
    let config: PublicConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, PublicConfig::default());
    let config: PublicConfig =
        serde_json::from_str(r#"{"mapsApiKey":"abc","paymentsConfigured":true}"#).unwrap();
    assert_eq!(config.maps_api_key.as_deref(), Some("abc"));
    assert!(config.payments_configured);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["mapsApiKey"], "abc");
}
