use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert_eq!(state.language, Language::En);
    assert_eq!(state.currency, "USD");
    assert!(!state.sidebar_open);
    assert_eq!(state.map_view, MapView::Satellite);
    assert_eq!(state.map_kind, MapKind::Schematic);
    assert!(!state.show_filters);
    assert_eq!(state.loading, LoadingFlags::default());
    assert!(state.notifications.is_empty());
}

// =============================================================
// toggles and setters
// =============================================================

#[test]
fn toggles_flip_and_setters_assign() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.set_sidebar_open(true);
    assert!(state.sidebar_open);

    state.toggle_filters();
    assert!(state.show_filters);
    state.set_show_filters(false);
    assert!(!state.show_filters);

    state.set_map_view(MapView::Street);
    assert_eq!(state.map_view.as_str(), "street");

    state.set_map_kind(MapKind::Tiles);
    assert_eq!(state.map_kind.as_str(), "tiles");
    assert_eq!(state.map_view, MapView::Street);

    state.set_language(Language::Es);
    state.set_currency("GBP");
    assert_eq!(state.language, Language::Es);
    assert_eq!(state.currency, "GBP");
}

#[test]
fn set_loading_touches_one_flag() {
    let mut state = UiState::default();
    state.set_loading(LoadingKey::Booking, true);
    assert_eq!(state.loading, LoadingFlags { global: false, search: false, booking: true });
    state.set_loading(LoadingKey::Search, true);
    state.set_loading(LoadingKey::Booking, false);
    assert_eq!(state.loading, LoadingFlags { global: false, search: true, booking: false });
}

// =============================================================
// notifications
// =============================================================

#[test]
fn add_notification_assigns_unique_ids() {
    let mut state = UiState::default();
    let a = state.add_notification(NotificationKind::Success, "Booked", 1.0);
    let b = state.add_notification(NotificationKind::Error, "Failed", 1.0);
    assert_ne!(a, b);
    assert_eq!(state.notifications.len(), 2);
    assert_eq!(state.notifications[0].message, "Booked");
    assert_eq!(state.notifications[1].kind.as_str(), "error");
}

#[test]
fn remove_notification_by_id() {
    let mut state = UiState::default();
    let a = state.add_notification(NotificationKind::Info, "one", 1.0);
    let b = state.add_notification(NotificationKind::Warning, "two", 2.0);
    state.remove_notification(&a);
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].id, b);
    state.remove_notification("missing");
    assert_eq!(state.notifications.len(), 1);
}

#[test]
fn clear_all_notifications_empties_queue() {
    let mut state = UiState::default();
    state.add_notification(NotificationKind::Info, "one", 1.0);
    state.add_notification(NotificationKind::Info, "two", 1.0);
    state.clear_all_notifications();
    assert!(state.notifications.is_empty());
}

#[test]
fn notification_ttl_is_five_seconds() {
    assert_eq!(NOTIFICATION_TTL.as_secs(), 5);
}
