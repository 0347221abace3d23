use super::*;

#[test]
fn catalog_has_nine_ports_with_unique_ids() {
    let ports = ports();
    assert_eq!(ports.len(), 9);
    let mut ids: Vec<&str> = ports.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 9);
}

#[test]
fn private_ports_carry_owner_and_instant_book() {
    for port in ports() {
        if port.is_private() {
            assert!(port.owner.is_some(), "{} should have an owner", port.name);
            assert!(port.is_instant_book.is_some());
        } else {
            assert!(port.owner.is_none(), "{} should not have an owner", port.name);
        }
    }
}

#[test]
fn available_spaces_never_exceed_capacity() {
    for port in ports() {
        assert!(port.available_spaces <= port.capacity, "{}", port.name);
    }
}

#[test]
fn port_by_id_finds_and_misses() {
    assert_eq!(port_by_id("2").map(|p| p.name), Some("Port de Cannes".to_owned()));
    assert!(port_by_id("nope").is_none());
}

#[test]
fn default_user_is_marina_explorer() {
    let user = default_user();
    assert_eq!(user.id, "user_123");
    assert_eq!(user.preferences.currency, "EUR");
    assert_eq!(user.boats.len(), 1);
}

#[test]
fn signed_in_user_echoes_email() {
    let user = signed_in_user("skipper@example.com");
    assert_eq!(user.email, "skipper@example.com");
    assert_eq!(user.preferences.currency, "USD");
}

#[test]
fn reservation_history_has_three_entries() {
    let list = reservations();
    assert_eq!(list.len(), 3);
    assert_eq!(list[1].status, ReservationStatus::Pending);
}

#[test]
fn port_summary_uses_fixed_table_then_catalog() {
    let fixed = port_summary("port_italy_001").unwrap();
    assert_eq!(fixed.name, "Porto Azzurro");

    let catalog = port_summary("7").unwrap();
    assert_eq!(catalog.location, "Fort Lauderdale, USA");
    assert!(catalog.image.starts_with("https://"));

    assert!(port_summary("unknown").is_none());
}
