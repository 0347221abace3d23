//! Port search predicate.
//!
//! DESIGN
//! ======
//! `apply` is the slice-level filter: a linear scan that checks, in order,
//! minimum price, maximum price, minimum rating, minimum max-boat-length, and
//! "has every requested amenity". A criterion that is unset or zero imposes
//! no constraint. `narrow` is a separate view-level pass (free-text query and
//! port-type selector) that never feeds back into slice state.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::types::{Port, PortTypeFilter, SearchFilters};

/// Treat zero, negative, and NaN criteria as unset.
fn active(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Whether `port` passes every set criterion in `filters`.
#[must_use]
pub fn matches(port: &Port, filters: &SearchFilters) -> bool {
    if let Some(min) = active(filters.min_price) {
        if port.price_per_night < min {
            return false;
        }
    }
    if let Some(max) = active(filters.max_price) {
        if port.price_per_night > max {
            return false;
        }
    }
    if let Some(rating) = active(filters.rating) {
        if port.rating < rating {
            return false;
        }
    }
    if let Some(length) = active(filters.boat_length) {
        if port.specifications.max_boat_length < length {
            return false;
        }
    }
    filters.amenities.iter().all(|amenity| port.has_amenity(amenity))
}

/// Ports passing `filters`, in their original order.
#[must_use]
pub fn apply(ports: &[Port], filters: &SearchFilters) -> Vec<Port> {
    ports.iter().filter(|p| matches(p, filters)).cloned().collect()
}

/// Case-insensitive match of a free-text query against name, city, country,
/// and amenities. A blank query matches everything.
#[must_use]
pub fn matches_query(port: &Port, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |s: &str| s.to_lowercase().contains(&needle);
    hit(&port.name)
        || hit(&port.location.city)
        || hit(&port.location.country)
        || port.amenities.iter().any(|a| hit(a))
}

/// View-level narrowing by query text and port-type selector.
#[must_use]
pub fn narrow(ports: &[Port], query: &str, port_type: Option<PortTypeFilter>) -> Vec<Port> {
    let selector = port_type.unwrap_or_default();
    ports
        .iter()
        .filter(|p| selector.admits(p.port_type) && matches_query(p, query))
        .cloned()
        .collect()
}

/// Every distinct amenity across `ports`, first-seen order.
#[must_use]
pub fn amenity_catalog(ports: &[Port]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for amenity in ports.iter().flat_map(|p| p.amenities.iter()) {
        if !seen.contains(amenity) {
            seen.push(amenity.clone());
        }
    }
    seen
}
