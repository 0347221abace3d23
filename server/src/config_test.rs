use super::*;

// =============================================================================
// env helpers: unique variable names keep parallel tests from racing.
// =============================================================================

#[test]
fn env_parse_reads_value() {
    let key = "__TEST_CFG_PARSE_OK_311__";
    unsafe { std::env::set_var(key, " 8080 ") };
    assert_eq!(env_parse::<u16>(key, 1), 8080);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_invalid_falls_back() {
    let key = "__TEST_CFG_PARSE_BAD_312__";
    unsafe { std::env::set_var(key, "lots") };
    assert_eq!(env_parse::<u16>(key, 3000), 3000);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_unset_falls_back() {
    assert!((env_parse::<f64>("__TEST_CFG_SURELY_UNSET_313__", 1.5) - 1.5).abs() < f64::EPSILON);
}

#[test]
fn env_nonempty_trims_and_drops_blank() {
    let key = "__TEST_CFG_NONEMPTY_314__";
    unsafe { std::env::set_var(key, "   ") };
    assert_eq!(env_nonempty(key), None);
    unsafe { std::env::set_var(key, " abc ") };
    assert_eq!(env_nonempty(key), Some("abc".to_owned()));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn template_maps_key_counts_as_unset() {
    assert_eq!(usable_maps_key(Some(MAPS_KEY_PLACEHOLDER.to_owned())), None);
    assert_eq!(usable_maps_key(None), None);
    assert_eq!(usable_maps_key(Some("AIza-real".to_owned())), Some("AIza-real".to_owned()));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn default_config_has_no_keys() {
    let config = Config::default();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.maps_api_key.is_none());
    assert!(!config.public().payments_configured);
}

#[test]
fn public_config_hides_secret_key() {
    let config = Config {
        maps_api_key: Some("maps-key".into()),
        stripe_publishable_key: Some("pk_test".into()),
        stripe_secret_key: Some("sk_test".into()),
        ..Config::default()
    };
    let public = config.public();
    assert_eq!(public.maps_api_key.as_deref(), Some("maps-key"));
    assert!(public.payments_configured);
    let json = serde_json::to_string(&public).unwrap();
    assert!(!json.contains("sk_test"));
    assert!(json.contains("mapsApiKey"));
}

#[test]
fn payments_need_both_keys() {
    let config = Config { stripe_publishable_key: Some("pk".into()), ..Config::default() };
    assert!(!config.public().payments_configured);
}
