use super::*;

fn loaded() -> PortsState {
    let mut state = PortsState::default();
    state.fetch_pending();
    state.fetch_fulfilled(marina::mock::ports());
    state
}

// =============================================================
// fetch lifecycle
// =============================================================

#[test]
fn fetch_pending_sets_loading_and_clears_error() {
    let mut state = PortsState { error: Some("old".into()), ..PortsState::default() };
    state.fetch_pending();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn fetch_fulfilled_replaces_ports_and_filtered() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.ports.len(), 9);
    assert_eq!(state.ports, state.filtered_ports);
}

#[test]
fn fetch_fulfilled_ignores_active_filters() {
    let mut state = loaded();
    state.set_search_filters(SearchFilters { min_price: Some(200.0), ..SearchFilters::default() });
    assert_eq!(state.filtered_ports.len(), 2);
    state.fetch_fulfilled(marina::mock::ports());
    assert_eq!(state.filtered_ports.len(), 9);
}

#[test]
fn fetch_rejected_defaults_message() {
    let mut state = PortsState::default();
    state.fetch_pending();
    state.fetch_rejected(None);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(FETCH_FAILED));

    state.fetch_rejected(Some("offline".into()));
    assert_eq!(state.error.as_deref(), Some("offline"));
}

// =============================================================
// filters
// =============================================================

#[test]
fn set_search_filters_applies_predicate() {
    let mut state = loaded();
    let filters = SearchFilters {
        min_price: Some(80.0),
        amenities: vec!["WiFi".into()],
        ..SearchFilters::default()
    };
    state.set_search_filters(filters.clone());
    let ids: Vec<_> = state.filtered_ports.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "4", "5", "6", "8"]);
    assert_eq!(state.search_filters, filters);
    assert_eq!(state.ports.len(), 9);
}

#[test]
fn set_search_filters_replaces_previous_filters() {
    let mut state = loaded();
    state.set_search_filters(SearchFilters { rating: Some(4.9), ..SearchFilters::default() });
    state.set_search_filters(SearchFilters { max_price: Some(70.0), ..SearchFilters::default() });
    assert_eq!(state.search_filters.rating, None);
    let ids: Vec<_> = state.filtered_ports.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["7"]);
}

#[test]
fn clear_filters_restores_catalog() {
    let mut state = loaded();
    state.set_search_filters(SearchFilters { boat_length: Some(100.0), ..SearchFilters::default() });
    assert_eq!(state.filtered_ports.len(), 2);
    state.clear_filters();
    assert!(state.search_filters.is_empty());
    assert_eq!(state.filtered_ports, state.ports);
}

// =============================================================
// selection / bounds
// =============================================================

#[test]
fn selected_port_round_trips() {
    let mut state = loaded();
    let port = state.find("3").cloned();
    assert!(port.is_some());
    state.set_selected_port(port.clone());
    assert_eq!(state.selected_port, port);
    state.set_selected_port(None);
    assert!(state.selected_port.is_none());
}

#[test]
fn set_map_bounds_keeps_filtered_list() {
    let mut state = loaded();
    assert!(state.map_bounds.is_none());
    let mediterranean = MapBounds { north: 46.0, south: 35.0, east: 20.0, west: -6.0 };
    state.set_map_bounds(mediterranean);
    assert_eq!(state.map_bounds, Some(mediterranean));
    assert_eq!(state.filtered_ports.len(), 9);
}

#[test]
fn find_unknown_is_none() {
    assert!(loaded().find("42").is_none());
    assert!(PortsState::default().find("1").is_none());
}
