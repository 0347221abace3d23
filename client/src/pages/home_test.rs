use super::*;

#[test]
fn hero_search_trims_and_drops_blank_fields() {
    let search = HeroSearch {
        location: "  Miami ".into(),
        check_in: "2024-07-01".into(),
        check_out: "   ".into(),
        boat_length: "NaN".into(),
    };
    let filters = search.to_filters(&SearchFilters::default());
    assert_eq!(filters.location.as_deref(), Some("Miami"));
    assert_eq!(filters.check_in.as_deref(), Some("2024-07-01"));
    assert_eq!(filters.check_out, None);
    assert_eq!(filters.boat_length, None);
}

#[test]
fn hero_search_keeps_sidebar_choices() {
    let base = SearchFilters { min_price: Some(50.0), amenities: vec!["Fuel".into()], ..SearchFilters::default() };
    let search = HeroSearch { boat_length: "40".into(), ..HeroSearch::default() };
    let filters = search.to_filters(&base);
    assert_eq!(filters.boat_length, Some(40.0));
    assert_eq!(filters.min_price, Some(50.0));
    assert_eq!(filters.amenities, vec!["Fuel".to_owned()]);
}

#[test]
fn featured_lists_private_ports_best_rated_first() {
    let picks = featured(&marina::mock::ports(), 3);
    let ids: Vec<&str> = picks.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["8", "9", "7"]);
    assert!(picks.iter().all(Port::is_private));
}

#[test]
fn featured_respects_count() {
    assert_eq!(featured(&marina::mock::ports(), 1).len(), 1);
    assert!(featured(&[], 3).is_empty());
}
