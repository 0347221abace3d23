use super::*;

#[test]
fn spec_rows_render_units_and_flags() {
    let port = marina::mock::port_by_id("7").expect("catalog port");
    let rows = spec_rows(&port.specifications);
    assert_eq!(rows[0], ("Max boat length", "45 ft".to_owned()));
    assert_eq!(rows[1], ("Depth", "8 ft".to_owned()));
    assert!(rows.contains(&("Electricity", "Yes".to_owned())));
    assert!(rows.contains(&("Fuel", "No".to_owned())));
    assert_eq!(rows.len(), 7);
}

#[test]
fn resolve_prefers_loaded_catalog() {
    let mut state = PortsState::default();
    state.fetch_fulfilled(marina::mock::ports());
    let port = resolve(&state, "3").expect("port 3");
    assert_eq!(port.id, "3");
}

#[test]
fn resolve_falls_back_to_matching_selection() {
    let mut state = PortsState::default();
    state.set_selected_port(marina::mock::port_by_id("8"));
    assert_eq!(resolve(&state, "8").map(|p| p.id), Some("8".to_owned()));
    assert!(resolve(&state, "2").is_none());
}
